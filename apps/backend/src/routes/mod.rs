use actix_web::web;

pub mod game;
pub mod health;

/// Register every HTTP route. Shared by `main.rs` and the test app builder
/// so both serve identical paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // GET /, GET /health
    health::configure_routes(cfg);

    // Game routes: /api/animal, /api/guess
    cfg.service(web::scope("/api").configure(game::configure_routes));
}
