use serde::Deserialize;

use crate::domain::property::{ListingType, NewProperty, UpdateProperty};
use crate::services::properties::PropertyFilters;

/// Query parameters accepted by `GET /api/properties`.
///
/// All fields arrive as optional strings; coercion happens in the query
/// service, never here.
#[derive(Debug, Default, Deserialize)]
pub struct PropertyFilterParams {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    pub bedrooms: Option<String>,
}

impl From<PropertyFilterParams> for PropertyFilters {
    fn from(params: PropertyFilterParams) -> Self {
        Self {
            search: params.search,
            listing_type: params.listing_type,
            min_price: params.min_price,
            max_price: params.max_price,
            bedrooms: params.bedrooms,
        }
    }
}

/// Body of `POST /api/properties`.
#[derive(Debug, Deserialize)]
pub struct CreatePropertyRequest {
    pub title: String,
    pub price: i64,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
}

impl From<CreatePropertyRequest> for NewProperty {
    fn from(req: CreatePropertyRequest) -> Self {
        NewProperty::new(
            req.title,
            req.price,
            req.location,
            req.images,
            req.bedrooms,
            req.bathrooms,
            req.area,
            req.listing_type,
        )
    }
}

/// Body of `PUT /api/properties/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdatePropertyRequest {
    pub title: String,
    pub price: i64,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
}

impl From<UpdatePropertyRequest> for UpdateProperty {
    fn from(req: UpdatePropertyRequest) -> Self {
        UpdateProperty {
            title: req.title,
            price: req.price,
            location: req.location,
            images: req.images,
            bedrooms: req.bedrooms,
            bathrooms: req.bathrooms,
            area: req.area,
            listing_type: req.listing_type,
        }
    }
}
