use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An enquiry left by a visitor, optionally tied to a listing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Lead {
    pub id: i32,
    pub property_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewLead {
    pub property_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl NewLead {
    #[must_use]
    pub fn new(
        property_id: Option<i32>,
        name: String,
        email: String,
        phone: String,
        message: String,
    ) -> Self {
        Self {
            property_id,
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.trim().to_string(),
            message: message.trim().to_string(),
        }
    }
}
