use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod domain;
mod metrics;

use config::Config;
use domain::order::{Currency, OrderCommandHandler, StandardOrderValidator, ValidatorRegistry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_gate=debug"))
        )
        .init();

    let config = Config::parse();
    tracing::info!("🚀 Starting order gate");
    tracing::debug!(?config, "Loaded configuration");

    // === 1. Initialize Prometheus metrics ===
    let metrics = Arc::new(metrics::Metrics::new()?);
    tracing::info!("📊 Metrics registry created with {} metrics", metrics.registry().gather().len());

    // === 2. Build the validation pipeline ===
    let standard = Arc::new(StandardOrderValidator::new());
    let mut registry = ValidatorRegistry::new(standard.clone());
    for currency in [Currency::Twd, Currency::Usd] {
        registry.register(currency.code(), standard.clone());
    }
    tracing::info!(currencies = ?registry.currencies(), "Validator registry ready");
    let handler = web::Data::new(OrderCommandHandler::new(registry, metrics.clone()));

    // === 3. Serve the API and metrics side by side ===
    let mut api_server = HttpServer::new(move || {
        App::new()
            .app_data(handler.clone())
            .configure(api::configure)
    });
    if let Some(workers) = config.workers {
        api_server = api_server.workers(workers);
    }
    let api_server = api_server
        .bind((config.host.as_str(), config.port))?
        .run();
    tracing::info!("📝 Accepting orders on http://{}:{}/api/orders", config.host, config.port);

    let metrics_server = metrics::start_metrics_server(
        metrics.registry().clone(),
        config.host.clone(),
        config.metrics_port,
    );

    tokio::try_join!(api_server, metrics_server)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
