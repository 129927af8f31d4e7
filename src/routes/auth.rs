use actix_web::{HttpResponse, Responder, get, post, put, web};

use crate::dto::auth::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, SessionResponse, UpdateProfileRequest,
};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::auth as auth_service;

#[post("/register")]
pub async fn register(
    body: web::Json<RegisterRequest>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match auth_service::register(repo.get_ref(), &config, &body.name, &body.email, &body.password)
    {
        Ok(session) => HttpResponse::Created().json(SessionResponse::from(session)),
        Err(e) => error_response(&e, config.development),
    }
}

#[post("/login")]
pub async fn login(
    body: web::Json<LoginRequest>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), &config, &body.email, &body.password) {
        Ok(session) => HttpResponse::Ok().json(SessionResponse::from(session)),
        Err(e) => error_response(&e, config.development),
    }
}

#[get("/me")]
pub async fn me(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match auth_service::profile(repo.get_ref(), user.id) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => error_response(&e, config.development),
    }
}

#[put("/profile")]
pub async fn update_profile(
    user: AuthenticatedUser,
    body: web::Json<UpdateProfileRequest>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match auth_service::update_profile(repo.get_ref(), user.id, &body.username, &body.email) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => error_response(&e, config.development),
    }
}

#[put("/change-password")]
pub async fn change_password(
    user: AuthenticatedUser,
    body: web::Json<ChangePasswordRequest>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match auth_service::change_password(
        repo.get_ref(),
        user.id,
        &body.current_password,
        &body.new_password,
    ) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e, config.development),
    }
}
