use diesel::prelude::*;

use crate::{
    domain::property::{NewProperty, Property, UpdateProperty},
    repository::{DieselRepository, PropertyListQuery, PropertyReader, PropertyWriter},
    repository::errors::{RepositoryError, RepositoryResult},
};

impl PropertyReader for DieselRepository {
    fn get_property_by_id(&self, id: i32) -> RepositoryResult<Option<Property>> {
        use crate::models::property::Property as DbProperty;
        use crate::schema::properties;

        let mut conn = self.conn()?;
        let property = properties::table
            .find(id)
            .first::<DbProperty>(&mut conn)
            .optional()?;

        Ok(property.map(Into::into))
    }

    fn list_properties(&self, query: PropertyListQuery) -> RepositoryResult<Vec<Property>> {
        use crate::models::property::Property as DbProperty;
        use crate::schema::properties;

        let mut conn = self.conn()?;

        let mut stmt = properties::table.into_boxed();

        if let Some(listing_type) = query.listing_type {
            stmt = stmt.filter(properties::listing_type.eq(listing_type.as_db_str()));
        }
        if let Some(min_price) = query.min_price {
            stmt = stmt.filter(properties::price.ge(min_price));
        }
        if let Some(max_price) = query.max_price {
            stmt = stmt.filter(properties::price.le(max_price));
        }
        if let Some(min_bedrooms) = query.min_bedrooms {
            stmt = stmt.filter(properties::bedrooms.ge(min_bedrooms));
        }
        if let Some(search) = &query.search {
            // SQLite LIKE is case-insensitive for ASCII.
            let pattern = format!("%{search}%");
            stmt = stmt.filter(
                properties::title
                    .like(pattern.clone())
                    .or(properties::location.like(pattern)),
            );
        }

        let items = stmt
            .order(properties::id.asc())
            .load::<DbProperty>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl PropertyWriter for DieselRepository {
    fn create_property(&self, new_property: &NewProperty) -> RepositoryResult<Property> {
        use crate::models::property::{NewProperty as DbNewProperty, Property as DbProperty};
        use crate::schema::properties;

        let mut conn = self.conn()?;
        let insertable: DbNewProperty = new_property.into();
        let created = diesel::insert_into(properties::table)
            .values(&insertable)
            .get_result::<DbProperty>(&mut conn)?;

        Ok(created.into())
    }

    fn update_property(&self, id: i32, updates: &UpdateProperty) -> RepositoryResult<Property> {
        use crate::models::property::{Property as DbProperty, UpdateProperty as DbUpdateProperty};
        use crate::schema::properties;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateProperty = updates.into();

        let updated = diesel::update(properties::table.find(id))
            .set((&db_updates, properties::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbProperty>(&mut conn)?;

        Ok(updated.into())
    }

    fn add_property_images(&self, id: i32, urls: &[String]) -> RepositoryResult<Property> {
        use crate::models::property::Property as DbProperty;
        use crate::schema::properties;

        let mut conn = self.conn()?;

        let current = properties::table
            .find(id)
            .first::<DbProperty>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        let mut images: Vec<String> = serde_json::from_str(&current.images).unwrap_or_default();
        images.extend(urls.iter().cloned());
        let serialized = serde_json::to_string(&images)
            .map_err(|e| RepositoryError::ValidationError(format!("Serialization error: {e}")))?;

        let updated = diesel::update(properties::table.find(id))
            .set((
                properties::images.eq(serialized),
                properties::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbProperty>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_property(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::{leads, properties};

        let mut conn = self.conn()?;

        // Detach enquiries before removing the listing itself; one
        // transaction so a failed delete rolls the detach back.
        conn.transaction(|conn| {
            diesel::update(leads::table.filter(leads::property_id.eq(id)))
                .set(leads::property_id.eq(None::<i32>))
                .execute(conn)?;

            let affected = diesel::delete(properties::table.find(id)).execute(conn)?;
            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}
