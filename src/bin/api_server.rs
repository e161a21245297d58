//! REST API Server for the Coverage Dashboard
//!
//! Usage:
//!   ./target/release/api_server [options]
//!
//! Options:
//!   --port PORT    Port to listen on (default: 8080)
//!   --host HOST    Address to bind (default: 0.0.0.0)
//!
//! REST endpoints:
//!   GET /api/v1/health          - Health check
//!   GET /api/v1/days            - Day selector: label, color, count
//!   GET /api/v1/locations?day=D - Markers for a day ("All" by default)
//!   GET /api/v1/schedule        - Per-day location breakdown
//!   GET /api/v1/map-config      - Map viewport defaults

use anyhow::Result;
use axum::{routing::get, Router};
use clap::Parser;
use delivery_coverage::api::{handlers, CoverageService};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(about = "Coverage dashboard API server")]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
}

fn print_banner(port: u16) {
    println!("============================================================");
    println!("         DELIVERY COVERAGE DASHBOARD API SERVER");
    println!("============================================================");
    println!();
    println!("  Port:     {}", port);
    println!("  REST:     http://localhost:{}/api/v1/", port);
    println!();
    println!("REST Endpoints:");
    println!("  GET /api/v1/health          Health check");
    println!("  GET /api/v1/days            Day selector strip");
    println!("  GET /api/v1/locations       Markers (?day=Monday..Friday|All)");
    println!("  GET /api/v1/schedule        Per-day breakdown");
    println!("  GET /api/v1/map-config      Map viewport defaults");
    println!();
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let args = Args::parse();

    print_banner(args.port);

    let service = Arc::new(CoverageService::new());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let app = create_router(service);

    tracing::info!("Starting REST server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(service: Arc<CoverageService>) -> Router {
    // The map frontend is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/days", get(handlers::get_days))
        .route("/api/v1/locations", get(handlers::get_locations))
        .route("/api/v1/schedule", get(handlers::get_schedule))
        .route("/api/v1/map-config", get(handlers::get_map_config))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
