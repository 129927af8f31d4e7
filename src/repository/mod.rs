//! Repository traits, query value objects, and the Diesel implementation.

use crate::db::{DbConnection, DbPool};
use crate::domain::lead::{Lead, NewLead};
use crate::domain::property::{ListingType, NewProperty, Property, UpdateProperty};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod lead;
pub mod property;
pub mod user;

/// Constraints applied to a property listing query.
///
/// Absent fields impose no constraint; provided fields combine with logical
/// AND. Built once per request from the raw filter parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyListQuery {
    pub search: Option<String>,
    pub listing_type: Option<ListingType>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<i32>,
}

impl PropertyListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn listing_type(mut self, listing_type: ListingType) -> Self {
        self.listing_type = Some(listing_type);
        self
    }

    pub fn min_price(mut self, price: i64) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: i64) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn min_bedrooms(mut self, bedrooms: i32) -> Self {
        self.min_bedrooms = Some(bedrooms);
        self
    }
}

pub trait PropertyReader {
    fn get_property_by_id(&self, id: i32) -> RepositoryResult<Option<Property>>;
    fn list_properties(&self, query: PropertyListQuery) -> RepositoryResult<Vec<Property>>;
}

pub trait PropertyWriter {
    fn create_property(&self, new_property: &NewProperty) -> RepositoryResult<Property>;
    fn update_property(&self, id: i32, updates: &UpdateProperty) -> RepositoryResult<Property>;
    fn add_property_images(&self, id: i32, urls: &[String]) -> RepositoryResult<Property>;
    fn delete_property(&self, id: i32) -> RepositoryResult<()>;
}

pub trait LeadReader {
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
}

pub trait LeadWriter {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
}

pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    /// Returns the user together with the stored password hash.
    fn get_user_credentials(&self, email: &str) -> RepositoryResult<Option<(User, String)>>;
    fn get_password_hash(&self, id: i32) -> RepositoryResult<Option<String>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user(&self, id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
    fn set_password_hash(&self, id: i32, password_hash: &str) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
