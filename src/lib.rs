pub mod auth;
pub mod bootstrap;
pub mod dto;
pub mod entity;
pub mod game_management;
pub mod user_management;

pub use bootstrap::{connect_and_migrate_from_env, init_tracing, load_dotenv};

use actix_web::web;

use game_management::{create_game, finish_game, get_game_state, process_card};

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(hello).service(
        web::scope("/api")
            .service(create_game)
            .service(process_card)
            .service(get_game_state)
            .service(finish_game),
    );
}

#[actix_web::get("/")]
async fn hello() -> impl actix_web::Responder {
    "Hello, Raspisnoy!"
}
