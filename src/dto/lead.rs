use serde::Deserialize;

use crate::domain::lead::NewLead;

/// Body of `POST /api/leads`.
#[derive(Debug, Deserialize)]
pub struct CreateLeadRequest {
    #[serde(rename = "propertyId")]
    pub property_id: Option<i32>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl From<CreateLeadRequest> for NewLead {
    fn from(req: CreateLeadRequest) -> Self {
        NewLead::new(req.property_id, req.name, req.email, req.phone, req.message)
    }
}
