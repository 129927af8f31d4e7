use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};

use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::auth::{change_password, login, me, register, update_profile};
use crate::routes::leads::{create_lead, list_leads};
use crate::routes::properties::{
    create_property, delete_property, get_property, list_properties, update_property,
    upload_property_images,
};
use crate::routes::{index, not_found};

pub mod client;
pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// The `/api` routing tree, shared by the server and the integration tests.
pub fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .service(
            web::scope("/auth")
                .service(register)
                .service(login)
                .service(me)
                .service(update_profile)
                .service(change_password),
        )
        .service(
            web::scope("/properties")
                .service(list_properties)
                .service(create_property)
                .service(upload_property_images)
                .service(get_property)
                .service(update_property)
                .service(delete_property),
        )
        .service(
            web::scope("/leads")
                .service(create_lead)
                .service(list_leads),
        )
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = db::establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let media_dir = server_config.media_dir.clone();
    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/media", media_dir.clone()))
            .service(index)
            .service(api_scope())
            .default_service(web::route().to(not_found))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
