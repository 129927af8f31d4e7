use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An account able to manage listings. The password hash never leaves the
/// repository layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    #[must_use]
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            password_hash,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
}
