//! Listing view state machine.
//!
//! `Loading → Ready` per fetch cycle. Fetch failures are absorbed: the view
//! substitutes a fixed demo dataset instead of surfacing an error, so the
//! listing page never shows a hard failure. A generation token guards
//! against a stale response overwriting a newer one.

use std::future::Future;

use crate::client::ClientError;
use crate::client::properties::ListingFilters;
use crate::domain::property::{ListingType, Property};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Ready,
}

/// Identifies one fetch cycle; resolving with an outdated token is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

#[derive(Debug)]
pub struct ListingView {
    filters: ListingFilters,
    properties: Vec<Property>,
    state: ViewState,
    generation: u64,
}

impl ListingView {
    /// A freshly mounted view: empty filters, loading.
    pub fn new() -> Self {
        Self {
            filters: ListingFilters::default(),
            properties: Vec::new(),
            state: ViewState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn filters(&self) -> &ListingFilters {
        &self.filters
    }

    /// Mutates the held filter only; no fetch is triggered.
    pub fn edit_filters(&mut self, edit: impl FnOnce(&mut ListingFilters)) {
        edit(&mut self.filters);
    }

    /// Begins a fetch cycle, invalidating any outstanding token.
    pub fn start_fetch(&mut self) -> FetchToken {
        self.state = ViewState::Loading;
        self.generation += 1;
        FetchToken(self.generation)
    }

    /// "Apply Filters": re-enter loading with the current filter.
    pub fn apply(&mut self) -> FetchToken {
        self.start_fetch()
    }

    /// "Clear": reset filters to all-empty defaults and always refetch, even
    /// when the filters were already empty.
    pub fn clear(&mut self) -> FetchToken {
        self.filters.clear();
        self.start_fetch()
    }

    /// Completes a fetch cycle. Stale tokens are ignored. Any failure is
    /// logged and replaced by the demo dataset; the view still becomes ready.
    pub fn resolve(&mut self, token: FetchToken, result: Result<Vec<Property>, ClientError>) {
        if token.0 != self.generation {
            return;
        }
        self.properties = match result {
            Ok(properties) => properties,
            Err(e) => {
                log::warn!("Error fetching properties: {e}; falling back to demo data");
                demo_properties()
            }
        };
        self.state = ViewState::Ready;
    }

    /// Drives one full fetch cycle through the given fetch function.
    pub async fn refresh<F, Fut>(&mut self, fetch: F)
    where
        F: FnOnce(ListingFilters) -> Fut,
        Fut: Future<Output = Result<Vec<Property>, ClientError>>,
    {
        let token = self.start_fetch();
        let result = fetch(self.filters.clone()).await;
        self.resolve(token, result);
    }
}

impl Default for ListingView {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_property(
    id: &str,
    title: &str,
    price: i64,
    location: &str,
    image: &str,
    bedrooms: i32,
    bathrooms: i32,
    area: f64,
) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        price,
        location: location.to_string(),
        images: vec![image.to_string()],
        bedrooms,
        bathrooms,
        area,
        listing_type: ListingType::Sale,
        created_at: None,
        updated_at: None,
    }
}

/// The fixed fallback dataset shown when live data cannot be fetched. The
/// literal values are part of the view's contract.
pub fn demo_properties() -> Vec<Property> {
    vec![
        demo_property(
            "1",
            "3BHK Apartment in South Delhi",
            8_500_000,
            "South Delhi, Delhi",
            "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=800",
            3,
            2,
            1500.0,
        ),
        demo_property(
            "2",
            "Luxury Villa in Bandra West",
            35_000_000,
            "Mumbai, Maharashtra",
            "https://images.unsplash.com/photo-1613490493576-7fde63acd811?w=800",
            5,
            4,
            4200.0,
        ),
        demo_property(
            "3",
            "2BHK Flat near IT Hub",
            6_800_000,
            "Whitefield, Bengaluru",
            "https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=800",
            2,
            2,
            1150.0,
        ),
        demo_property(
            "4",
            "Penthouse in Koregaon Park",
            12_500_000,
            "Pune, Maharashtra",
            "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=800",
            3,
            3,
            2100.0,
        ),
        demo_property(
            "5",
            "Independent House",
            9_200_000,
            "Jaipur, Rajasthan",
            "https://images.unsplash.com/photo-1580587771525-78b9dba3b914?w=800",
            4,
            3,
            2800.0,
        ),
        demo_property(
            "6",
            "2BHK Apartment in Gachibowli",
            7_200_000,
            "Hyderabad, Telangana",
            "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800",
            2,
            2,
            1200.0,
        ),
    ]
}
