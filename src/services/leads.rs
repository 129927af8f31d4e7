//! Visitor enquiries.

use validator::ValidateEmail;

use crate::domain::lead::{Lead, NewLead};
use crate::repository::{LeadReader, LeadWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn create_lead<R>(repo: &R, new_lead: NewLead) -> ServiceResult<Lead>
where
    R: LeadWriter + ?Sized,
{
    if new_lead.name.is_empty() {
        return Err(ServiceError::Validation("name is required".to_string()));
    }
    if !new_lead.email.validate_email() {
        return Err(ServiceError::Validation("Invalid email address".to_string()));
    }

    repo.create_lead(&new_lead).map_err(ServiceError::from)
}

pub fn list_leads<R>(repo: &R) -> ServiceResult<Vec<Lead>>
where
    R: LeadReader + ?Sized,
{
    repo.list_leads().map_err(ServiceError::from)
}
