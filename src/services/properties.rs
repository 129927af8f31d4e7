//! The property query service: translates raw filter parameters into a
//! repository query and shapes the results.

use std::str::FromStr;

use crate::domain::property::{ListingType, NewProperty, Property, UpdateProperty};
use crate::repository::{PropertyListQuery, PropertyReader, PropertyWriter};
use crate::services::{ServiceError, ServiceResult};

/// Filter fields exactly as received on the wire: all optional, all strings
/// pre-coercion. Empty strings count as unset.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilters {
    pub search: Option<String>,
    pub listing_type: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub bedrooms: Option<String>,
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Unparsable submissions are ignored rather than failing the request.
fn coerce<T: FromStr>(raw: Option<&str>) -> Option<T> {
    non_empty(raw).and_then(|s| s.parse().ok())
}

/// Builds the repository query from raw filter input. Absent or empty fields
/// impose no constraint; provided fields combine with logical AND.
pub fn build_query(filters: &PropertyFilters) -> ServiceResult<PropertyListQuery> {
    let mut query = PropertyListQuery::new();

    if let Some(term) = non_empty(filters.search.as_deref()) {
        query = query.search(term);
    }
    if let Some(raw) = non_empty(filters.listing_type.as_deref())
        && let Ok(listing_type) = raw.parse::<ListingType>()
    {
        // Unrecognised type values impose no constraint, like unparsable numbers.
        query = query.listing_type(listing_type);
    }
    if let Some(min_price) = coerce::<i64>(filters.min_price.as_deref()) {
        if min_price < 0 {
            return Err(ServiceError::Validation(
                "minPrice must not be negative".to_string(),
            ));
        }
        query = query.min_price(min_price);
    }
    if let Some(max_price) = coerce::<i64>(filters.max_price.as_deref()) {
        if max_price < 0 {
            return Err(ServiceError::Validation(
                "maxPrice must not be negative".to_string(),
            ));
        }
        query = query.max_price(max_price);
    }
    if let Some(bedrooms) = coerce::<i32>(filters.bedrooms.as_deref()) {
        if bedrooms < 0 {
            return Err(ServiceError::Validation(
                "bedrooms must not be negative".to_string(),
            ));
        }
        query = query.min_bedrooms(bedrooms);
    }

    Ok(query)
}

/// Returns every property matching all supplied criteria.
pub fn list_properties<R>(repo: &R, filters: PropertyFilters) -> ServiceResult<Vec<Property>>
where
    R: PropertyReader + ?Sized,
{
    let query = build_query(&filters)?;
    repo.list_properties(query).map_err(ServiceError::from)
}

pub fn get_property<R>(repo: &R, id: i32) -> ServiceResult<Property>
where
    R: PropertyReader + ?Sized,
{
    repo.get_property_by_id(id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_property<R>(repo: &R, new_property: NewProperty) -> ServiceResult<Property>
where
    R: PropertyWriter + ?Sized,
{
    if new_property.title.is_empty() {
        return Err(ServiceError::Validation("title is required".to_string()));
    }
    if new_property.location.is_empty() {
        return Err(ServiceError::Validation("location is required".to_string()));
    }
    if new_property.price < 0 {
        return Err(ServiceError::Validation(
            "price must not be negative".to_string(),
        ));
    }
    if new_property.bedrooms < 0 || new_property.bathrooms < 0 {
        return Err(ServiceError::Validation(
            "room counts must not be negative".to_string(),
        ));
    }

    repo.create_property(&new_property).map_err(ServiceError::from)
}

pub fn update_property<R>(repo: &R, id: i32, updates: UpdateProperty) -> ServiceResult<Property>
where
    R: PropertyWriter + ?Sized,
{
    if updates.title.trim().is_empty() {
        return Err(ServiceError::Validation("title is required".to_string()));
    }
    repo.update_property(id, &updates).map_err(ServiceError::from)
}

pub fn add_property_images<R>(repo: &R, id: i32, urls: &[String]) -> ServiceResult<Property>
where
    R: PropertyWriter + ?Sized,
{
    if urls.is_empty() {
        return Err(ServiceError::Validation(
            "at least one image is required".to_string(),
        ));
    }
    repo.add_property_images(id, urls).map_err(ServiceError::from)
}

pub fn delete_property<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: PropertyWriter + ?Sized,
{
    repo.delete_property(id).map_err(ServiceError::from)
}
