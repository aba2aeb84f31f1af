use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use std::net::TcpListener;
use actix_cors::Cors;

pub mod config;
mod routes;
mod handlers;
pub mod models;
pub mod allocation;
pub mod telemetry;
use crate::routes::init_routes;
use crate::allocation::TeamAllocator;
use crate::config::allocation::AllocationSettings;

/// Largest roster payload accepted, in bytes
const MAX_PAYLOAD_BYTES: usize = 2 * 1024 * 1024;

pub fn run(
    listener: TcpListener,
    allocation_settings: AllocationSettings,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let allocator = web::Data::new(TeamAllocator::new(allocation_settings));

    let server = HttpServer::new(move || {
        // Rosters are posted server-to-server from spreadsheet scripts
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::PayloadConfig::new(MAX_PAYLOAD_BYTES))
            .app_data(allocator.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
