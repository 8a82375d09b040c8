#[cfg(feature = "data")]
pub mod backend;
#[cfg(feature = "data")]
pub mod bridge;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use std::sync::Arc;

    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::backend::{BookingBackend, HttpBookingBackend};
    use crate::models::config::ServerConfig;
    use crate::routes::booking::{available_slots, lock_available_slot};
    use crate::routes::main::show_index;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let backend = HttpBookingBackend::from_config(&server_config).map_err(|e| {
            std::io::Error::other(format!("Failed to build booking service client: {e}"))
        })?;
        let backend: Arc<dyn BookingBackend> = Arc::new(backend);

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Proxying bookings to {} on {}:{}",
            server_config.booking_api_url,
            bind_address.0,
            bind_address.1
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(show_index)
                .service(available_slots)
                .service(lock_available_slot)
                .app_data(web::Data::from(backend.clone()))
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
