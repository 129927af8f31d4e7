use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Whether a listing is offered for sale or for rent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ListingType {
    #[default]
    Sale,
    Rent,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown listing type: {0}")]
pub struct ParseListingTypeError(String);

impl ListingType {
    /// Canonical form stored in the database.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }
}

impl Display for ListingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingType::Sale => write!(f, "For Sale"),
            ListingType::Rent => write!(f, "For Rent"),
        }
    }
}

impl FromStr for ListingType {
    type Err = ParseListingTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sale" | "for sale" | "for-sale" => Ok(ListingType::Sale),
            "rent" | "for rent" | "for-rent" => Ok(ListingType::Rent),
            other => Err(ParseListingTypeError(other.to_string())),
        }
    }
}

impl Serialize for ListingType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ListingType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A persisted listing record.
///
/// The identifier is opaque to API consumers; timestamps are absent on
/// records that never touched the store (e.g. the demo fallback dataset).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub price: i64,
    pub location: String,
    pub images: Vec<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProperty {
    pub title: String,
    pub price: i64,
    pub location: String,
    pub images: Vec<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub listing_type: ListingType,
}

impl NewProperty {
    #[must_use]
    pub fn new(
        title: String,
        price: i64,
        location: String,
        images: Vec<String>,
        bedrooms: i32,
        bathrooms: i32,
        area: f64,
        listing_type: ListingType,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            price,
            location: location.trim().to_string(),
            images: images
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            bedrooms,
            bathrooms,
            area,
            listing_type,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProperty {
    pub title: String,
    pub price: i64,
    pub location: String,
    pub images: Vec<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub listing_type: ListingType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_type_parses_form_values() {
        assert_eq!("sale".parse::<ListingType>().unwrap(), ListingType::Sale);
        assert_eq!("For Rent".parse::<ListingType>().unwrap(), ListingType::Rent);
        assert_eq!("for-sale".parse::<ListingType>().unwrap(), ListingType::Sale);
        assert!("lease".parse::<ListingType>().is_err());
    }

    #[test]
    fn listing_type_serializes_display_form() {
        let json = serde_json::to_string(&ListingType::Sale).unwrap();
        assert_eq!(json, "\"For Sale\"");
        let back: ListingType = serde_json::from_str("\"For Sale\"").unwrap();
        assert_eq!(back, ListingType::Sale);
    }

    #[test]
    fn new_property_trims_and_drops_empty_images() {
        let p = NewProperty::new(
            "  Flat ".into(),
            100,
            " Delhi ".into(),
            vec!["  ".into(), "https://img/1.jpg ".into()],
            2,
            1,
            900.0,
            ListingType::Rent,
        );
        assert_eq!(p.title, "Flat");
        assert_eq!(p.location, "Delhi");
        assert_eq!(p.images, vec!["https://img/1.jpg".to_string()]);
    }
}
