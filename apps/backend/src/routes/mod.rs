use actix_web::web;

pub mod game;
pub mod health;

/// Register every endpoint at the application root.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(game::configure_routes);
}
