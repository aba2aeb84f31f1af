use actix_web::web;

pub mod allocation;
pub mod backend_health;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::resource("/allocate_teams")
            .route(web::post().to(allocation::allocate_teams))
            .default_service(web::to(allocation::method_not_allowed))
    );
}
