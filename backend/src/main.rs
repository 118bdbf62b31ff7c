mod config;
mod error;
mod ingest;
mod registry;
mod seed;
mod services;
mod state;
mod store;

use crate::config::ServerConfig;
use crate::registry::DatasetRegistry;
use crate::state::AppState;
use crate::store::Database;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let cfg = ServerConfig::from_env();
    let url = cfg.url();

    let db = Database::open(&cfg.db_path).map_err(|e| io::Error::other(e.to_string()))?;
    info!("Using database {}", cfg.db_path.display());
    let registry = DatasetRegistry::new(Arc::new(db), cfg.chunk_size);
    info!("Dataset rows are written in chunks of {}", registry.chunk_size());
    if let Err(e) = registry.initialize(cfg.seed_on_startup) {
        warn!("Start-up seeding failed: {}", e);
    }
    let state = AppState::new(registry, cfg.upload_limit);

    if cfg.open_browser {
        let browser_url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&browser_url) {
                warn!("Could not open a browser: {}", e);
            }
        });
    }

    info!("Server running at {}", url);

    let json_limit = cfg.json_limit;
    HttpServer::new(move || {
        App::new()
            .app_data(services::json_config(json_limit))
            .app_data(web::Data::new(state.clone()))
            .configure(services::configure)
            .default_service(web::route().to(serve_embedded))
    })
    .bind((cfg.host.as_str(), cfg.port))?
    .run()
    .await
}
