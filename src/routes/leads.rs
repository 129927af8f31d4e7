use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::lead::CreateLeadRequest;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::leads as lead_service;

#[post("")]
pub async fn create_lead(
    body: web::Json<CreateLeadRequest>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match lead_service::create_lead(repo.get_ref(), body.into_inner().into()) {
        Ok(lead) => HttpResponse::Created().json(lead),
        Err(e) => error_response(&e, config.development),
    }
}

#[get("")]
pub async fn list_leads(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match lead_service::list_leads(repo.get_ref()) {
        Ok(leads) => HttpResponse::Ok().json(leads),
        Err(e) => error_response(&e, config.development),
    }
}
