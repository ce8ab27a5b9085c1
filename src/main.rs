use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::{get, get_service},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tera::{Context, Tera};
use time::Duration;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

mod data;
mod error;
mod features;
mod handlers;
mod parser;
mod utils;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    // Dictionary data loading
    let kamus_path = PathBuf::from(
        std::env::var("KAMUS_PATH").unwrap_or_else(|_| "src/data/kamus_lampung.tsv".into()),
    );
    let dict = match parser::parse_kamus(&kamus_path) {
        Ok(entries) => Arc::new(entries),
        Err(e) => {
            eprintln!("Failed to load dictionary {}: {}", kamus_path.display(), e);
            std::process::exit(1);
        }
    };
    log::info!("Loaded {} dictionary entries", dict.len());

    // Templates configuration
    let templates = match Tera::new("templates/**/*.html") {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    let templates = Arc::new(templates);

    // Sessions configuration
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(1)))
        .with_secure(false);

    // Translation API router
    let api_router = Router::new()
        .route("/translate", get(handlers::translate::api::translate_api))
        .with_state(dict.clone());

    // Translation page router
    let page_router = Router::new()
        .route("/", get(handlers::translate::page::translate_page))
        .with_state(dict.clone());

    // Main application router
    let app = Router::new()
        .merge(page_router)
        .route("/about", get(about))
        .nest("/panel", handlers::panel::panel_router(dict.clone()))
        .nest("/api", api_router)
        .nest_service("/static", get_service(ServeDir::new("static")))
        .layer(Extension(templates))
        .layer(session_layer);

    // Start server
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".into());
    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", bind_addr, e);
            std::process::exit(1);
        }
    };

    println!("Server running on http://{}", bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn about(Extension(templates): Extension<Arc<Tera>>) -> impl IntoResponse {
    utils::render_template(&templates, "about.html", Context::new())
}
