//! Reflex Backend Server
//!
//! Serves live runs over WebSocket and the shared leaderboard over HTTP
//! from a single actix-web server.
//!
//! ## Configuration
//!
//! - `BIND_ADDR` — listen address, default `0.0.0.0:8888`
//! - `DB_URL` — PostgreSQL connection string; without it the leaderboard
//!   lives in memory and is lost on restart
pub use rfx_hosting::Arcade;
pub use rfx_hosting::RunHandle;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use rfx_leaderboard::Leaderboard;
use rfx_leaderboard::Memory;
use rfx_leaderboard::Postgres;
use rfx_hosting::handlers;
use std::sync::Arc;

/// Leaderboard backend chosen at startup.
#[derive(Clone)]
pub enum Store {
    Memory(Arc<Memory>),
    Postgres(Postgres),
}

impl Store {
    /// Connects and migrates when `DB_URL` is set, otherwise stays in memory.
    pub async fn from_env() -> anyhow::Result<Self> {
        match std::env::var("DB_URL") {
            Ok(url) => {
                let client = rfx_pg::db(&url).await?;
                let store = Postgres::new(client);
                store.migrate().await?;
                log::info!("leaderboard backed by postgres");
                Ok(Self::Postgres(store))
            }
            Err(_) => {
                log::warn!("DB_URL not set, leaderboard is in memory only");
                Ok(Self::Memory(Arc::new(Memory::new())))
            }
        }
    }
    pub fn leaderboard(&self) -> Arc<dyn Leaderboard> {
        match self {
            Self::Memory(memory) => memory.clone(),
            Self::Postgres(postgres) => Arc::new(postgres.clone()),
        }
    }
    pub async fn healthy(&self) -> bool {
        match self {
            Self::Memory(_) => true,
            Self::Postgres(postgres) => postgres
                .ping()
                .await
                .inspect_err(|e| log::error!("health check failed: {}", e))
                .is_ok(),
        }
    }
}

async fn health(store: web::Data<Store>) -> impl Responder {
    match store.healthy().await {
        true => HttpResponse::Ok().body("ok"),
        false => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

#[rustfmt::skip]
pub async fn run() -> anyhow::Result<()> {
    let store = Store::from_env().await?;
    let arcade = web::Data::new(Arcade::new(store.leaderboard()));
    let store = web::Data::new(store);
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8888"));
    log::info!("starting reflex server on {}", addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(arcade.clone())
            .app_data(store.clone())
            .route("/health", web::get().to(health))
            .service(
                web::scope("/run")
                    .route("/start", web::post().to(handlers::start))
                    .route("/enter/{run_id}", web::get().to(handlers::enter))
                    .route("/leave/{run_id}", web::post().to(handlers::leave)),
            )
            .service(
                web::scope("/leaderboard")
                    .route("", web::get().to(handlers::top))
                    .route("/{name}", web::get().to(handlers::rank)),
            )
    })
    .workers(6)
    .bind(addr)?
    .run()
    .await?;
    Ok(())
}
