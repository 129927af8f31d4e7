use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::property::{
    ListingType, NewProperty as DomainNewProperty, Property as DomainProperty,
    UpdateProperty as DomainUpdateProperty,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::properties)]
/// Diesel model for [`crate::domain::property::Property`].
///
/// Image URLs are stored as a JSON array in a text column.
pub struct Property {
    pub id: i32,
    pub title: String,
    pub price: i64,
    pub location: String,
    pub images: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub listing_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::properties)]
/// Insertable form of [`Property`].
pub struct NewProperty<'a> {
    pub title: &'a str,
    pub price: i64,
    pub location: &'a str,
    pub images: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub listing_type: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::properties)]
/// Data used when updating a [`Property`] record.
pub struct UpdateProperty<'a> {
    pub title: &'a str,
    pub price: i64,
    pub location: &'a str,
    pub images: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub listing_type: &'a str,
}

impl From<Property> for DomainProperty {
    fn from(property: Property) -> Self {
        Self {
            id: property.id.to_string(),
            title: property.title,
            price: property.price,
            location: property.location,
            images: serde_json::from_str(&property.images).unwrap_or_default(),
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            area: property.area,
            listing_type: property.listing_type.parse().unwrap_or_default(),
            created_at: Some(property.created_at),
            updated_at: Some(property.updated_at),
        }
    }
}

fn images_json(images: &[String]) -> String {
    serde_json::to_string(images).unwrap_or_else(|_| "[]".to_string())
}

impl<'a> From<&'a DomainNewProperty> for NewProperty<'a> {
    fn from(property: &'a DomainNewProperty) -> Self {
        Self {
            title: property.title.as_str(),
            price: property.price,
            location: property.location.as_str(),
            images: images_json(&property.images),
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            area: property.area,
            listing_type: property.listing_type.as_db_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateProperty> for UpdateProperty<'a> {
    fn from(property: &'a DomainUpdateProperty) -> Self {
        Self {
            title: property.title.as_str(),
            price: property.price,
            location: property.location.as_str(),
            images: images_json(&property.images),
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            area: property.area,
            listing_type: property.listing_type.as_db_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_domain_new() -> DomainNewProperty {
        DomainNewProperty::new(
            "2BHK Flat".to_string(),
            6_800_000,
            "Whitefield, Bengaluru".to_string(),
            vec!["https://img/1.jpg".to_string()],
            2,
            2,
            1150.0,
            ListingType::Sale,
        )
    }

    #[test]
    fn from_domain_new_creates_newproperty() {
        let domain = sample_domain_new();
        let new: NewProperty = (&domain).into();
        assert_eq!(new.title, domain.title);
        assert_eq!(new.price, domain.price);
        assert_eq!(new.location, domain.location);
        assert_eq!(new.images, "[\"https://img/1.jpg\"]");
        assert_eq!(new.listing_type, "sale");
    }

    #[test]
    fn property_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_property = Property {
            id: 7,
            title: "Villa".to_string(),
            price: 35_000_000,
            location: "Mumbai".to_string(),
            images: "[\"https://img/a.jpg\",\"https://img/b.jpg\"]".to_string(),
            bedrooms: 5,
            bathrooms: 4,
            area: 4200.0,
            listing_type: "rent".to_string(),
            created_at: now,
            updated_at: now,
        };
        let domain: DomainProperty = db_property.into();
        assert_eq!(domain.id, "7");
        assert_eq!(domain.images.len(), 2);
        assert_eq!(domain.listing_type, ListingType::Rent);
        assert_eq!(domain.created_at, Some(now));
    }

    #[test]
    fn malformed_images_column_becomes_empty_list() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_property = Property {
            id: 1,
            title: "t".to_string(),
            price: 1,
            location: "l".to_string(),
            images: "not json".to_string(),
            bedrooms: 0,
            bathrooms: 0,
            area: 0.0,
            listing_type: "sale".to_string(),
            created_at: now,
            updated_at: now,
        };
        let domain: DomainProperty = db_property.into();
        assert!(domain.images.is_empty());
    }
}
