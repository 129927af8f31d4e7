use std::cell::Cell;

use property_hub::client::listing::demo_properties;
use property_hub::client::{ClientError, ListingFilters, ListingView, ViewState};
use property_hub::domain::property::{ListingType, Property};

fn one_property(id: &str, title: &str) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        price: 1_000_000,
        location: "Pune".to_string(),
        bedrooms: 2,
        bathrooms: 1,
        area: 800.0,
        ..Property::default()
    }
}

#[test]
fn mount_starts_loading_with_empty_filters() {
    let view = ListingView::new();
    assert_eq!(view.state(), ViewState::Loading);
    assert_eq!(view.filters(), &ListingFilters::default());
    assert!(view.properties().is_empty());
}

#[test]
fn successful_fetch_stores_results_and_becomes_ready() {
    let mut view = ListingView::new();
    let token = view.start_fetch();
    view.resolve(token, Ok(vec![one_property("42", "Flat")]));
    assert_eq!(view.state(), ViewState::Ready);
    assert_eq!(view.properties().len(), 1);
    assert_eq!(view.properties()[0].id, "42");
}

#[test]
fn any_failure_substitutes_the_literal_demo_dataset() {
    let mut view = ListingView::new();
    let token = view.start_fetch();
    view.resolve(token, Err(ClientError::new("boom")));

    assert_eq!(view.state(), ViewState::Ready);
    let properties = view.properties();
    assert_eq!(properties.len(), 6);
    assert_eq!(
        properties.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        vec!["1", "2", "3", "4", "5", "6"]
    );
    assert_eq!(
        properties
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>(),
        vec![
            "3BHK Apartment in South Delhi",
            "Luxury Villa in Bandra West",
            "2BHK Flat near IT Hub",
            "Penthouse in Koregaon Park",
            "Independent House",
            "2BHK Apartment in Gachibowli",
        ]
    );
    assert!(
        properties
            .iter()
            .all(|p| p.listing_type == ListingType::Sale)
    );
    assert_eq!(properties[0].price, 8_500_000);
    assert_eq!(properties[0].location, "South Delhi, Delhi");
    assert_eq!(
        properties[0].images,
        vec!["https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=800".to_string()]
    );
    assert_eq!(properties[0].bedrooms, 3);
    assert_eq!(properties[0].bathrooms, 2);
    assert_eq!(properties[0].area, 1500.0);
    assert_eq!(properties[5].price, 7_200_000);
    assert_eq!(properties[5].location, "Hyderabad, Telangana");
}

#[test]
fn demo_dataset_is_stable() {
    assert_eq!(demo_properties(), demo_properties());
}

#[test]
fn editing_filters_does_not_change_state() {
    let mut view = ListingView::new();
    let token = view.start_fetch();
    view.resolve(token, Ok(vec![]));
    assert_eq!(view.state(), ViewState::Ready);

    view.edit_filters(|f| f.search = "delhi".to_string());
    view.edit_filters(|f| f.min_price = "1000000".to_string());
    assert_eq!(view.state(), ViewState::Ready);
    assert_eq!(view.filters().search, "delhi");
}

#[test]
fn apply_reenters_loading_with_current_filters() {
    let mut view = ListingView::new();
    let token = view.start_fetch();
    view.resolve(token, Ok(vec![]));

    view.edit_filters(|f| f.bedrooms = "3".to_string());
    let token = view.apply();
    assert_eq!(view.state(), ViewState::Loading);
    assert_eq!(view.filters().bedrooms, "3");
    view.resolve(token, Ok(vec![]));
    assert_eq!(view.state(), ViewState::Ready);
}

#[test]
fn clear_resets_filters_and_always_restarts_the_fetch() {
    let mut view = ListingView::new();
    let token = view.start_fetch();
    view.resolve(token, Ok(vec![]));

    view.edit_filters(|f| f.search = "mumbai".to_string());
    let first = view.clear();
    assert_eq!(view.filters(), &ListingFilters::default());
    assert_eq!(view.state(), ViewState::Loading);
    view.resolve(first, Ok(vec![]));

    // Already empty, cleared again: a fresh fetch still starts.
    let second = view.clear();
    assert_ne!(first, second);
    assert_eq!(view.state(), ViewState::Loading);
}

#[test]
fn stale_responses_never_overwrite_newer_fetches() {
    let mut view = ListingView::new();
    let stale = view.start_fetch();
    let current = view.start_fetch();

    view.resolve(stale, Ok(vec![one_property("9", "Old result")]));
    assert_eq!(view.state(), ViewState::Loading);
    assert!(view.properties().is_empty());

    view.resolve(current, Ok(vec![one_property("10", "New result")]));
    assert_eq!(view.state(), ViewState::Ready);
    assert_eq!(view.properties()[0].id, "10");
}

#[actix_web::test]
async fn refresh_drives_one_cycle_through_the_fetcher() {
    let calls = Cell::new(0u32);
    let mut view = ListingView::new();
    view.edit_filters(|f| f.search = "delhi".to_string());

    view.refresh(|filters| {
        calls.set(calls.get() + 1);
        async move {
            assert_eq!(filters.search, "delhi");
            Ok(vec![one_property("1", "Match")])
        }
    })
    .await;

    assert_eq!(calls.get(), 1);
    assert_eq!(view.state(), ViewState::Ready);
    assert_eq!(view.properties().len(), 1);
}

#[actix_web::test]
async fn refresh_failure_falls_back_to_demo_data() {
    let mut view = ListingView::new();
    view.refresh(|_| async { Err(ClientError::new("connection refused")) })
        .await;

    assert_eq!(view.state(), ViewState::Ready);
    assert_eq!(view.properties(), demo_properties().as_slice());
}
