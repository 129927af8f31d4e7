use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use log::error;

use crate::dto::property::{CreatePropertyRequest, PropertyFilterParams, UpdatePropertyRequest};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::images::{ImageStore, LocalImageStore};
use crate::services::properties as property_service;
use crate::services::{ServiceError, ServiceResult};

/// `GET /api/properties`, the filtered listing endpoint.
///
/// Responds with a flat JSON array of properties matching all supplied
/// filters; absent or empty parameters impose no constraint.
#[get("")]
pub async fn list_properties(
    params: web::Query<PropertyFilterParams>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match property_service::list_properties(repo.get_ref(), params.into_inner().into()) {
        Ok(properties) => HttpResponse::Ok().json(properties),
        Err(e) => error_response(&e, config.development),
    }
}

#[get("/{id}")]
pub async fn get_property(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match property_service::get_property(repo.get_ref(), id.into_inner()) {
        Ok(property) => HttpResponse::Ok().json(property),
        Err(e) => error_response(&e, config.development),
    }
}

#[post("")]
pub async fn create_property(
    _user: AuthenticatedUser,
    body: web::Json<CreatePropertyRequest>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match property_service::create_property(repo.get_ref(), body.into_inner().into()) {
        Ok(property) => HttpResponse::Created().json(property),
        Err(e) => error_response(&e, config.development),
    }
}

#[put("/{id}")]
pub async fn update_property(
    _user: AuthenticatedUser,
    id: web::Path<i32>,
    body: web::Json<UpdatePropertyRequest>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match property_service::update_property(repo.get_ref(), id.into_inner(), body.into_inner().into())
    {
        Ok(property) => HttpResponse::Ok().json(property),
        Err(e) => error_response(&e, config.development),
    }
}

#[delete("/{id}")]
pub async fn delete_property(
    _user: AuthenticatedUser,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match property_service::delete_property(repo.get_ref(), id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e, config.development),
    }
}

#[derive(MultipartForm)]
pub struct UploadImagesForm {
    #[multipart(limit = "10MB")]
    pub images: Vec<TempFile>,
}

fn store_uploaded_images(store: &LocalImageStore, form: &UploadImagesForm) -> ServiceResult<Vec<String>> {
    let mut urls = Vec::with_capacity(form.images.len());
    for file in &form.images {
        let name = file
            .file_name
            .as_deref()
            .ok_or_else(|| ServiceError::Validation("file name is required".to_string()))?;
        let data = std::fs::read(file.file.path())
            .map_err(|e| ServiceError::Internal(format!("Failed to read upload: {e}")))?;
        urls.push(store.store(name, &data)?);
    }
    Ok(urls)
}

/// `POST /api/properties/{id}/images`, multipart image upload.
#[post("/{id}/images")]
pub async fn upload_property_images(
    _user: AuthenticatedUser,
    id: web::Path<i32>,
    form: MultipartForm<UploadImagesForm>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let store = LocalImageStore::new(&config.media_dir);

    let urls = match store_uploaded_images(&store, &form) {
        Ok(urls) => urls,
        Err(e) => {
            error!("Image upload failed: {e}");
            return error_response(&e, config.development);
        }
    };

    match property_service::add_property_images(repo.get_ref(), id.into_inner(), &urls) {
        Ok(property) => HttpResponse::Ok().json(property),
        Err(e) => error_response(&e, config.development),
    }
}
