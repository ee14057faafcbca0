use clap::Parser;
use dotenvy::dotenv;
use std::sync::Arc;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use application::PostService;
use data::PostgresPostRepository;
use infrastructure::{config::Config, database::create_pool, logging::init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    init_logging();

    let config = Config::parse();
    let http_addr = config.listen_addr();

    tracing::info!("Starting blog API...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let pool = match create_pool(&config.dsn).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database unavailable: {:#}", e);
            return Err(e);
        }
    };

    let post_repo = Arc::new(PostgresPostRepository::new(pool.clone()));
    let post_service = Arc::new(PostService::new(post_repo));

    if let Err(e) = run_http_server(http_addr, post_service).await {
        tracing::error!("HTTP server error: {:#}", e);
        return Err(e);
    }

    pool.close().await;
    tracing::info!("Shutting down...");
    Ok(())
}

async fn run_http_server(addr: String, post_service: Arc<PostService>) -> anyhow::Result<()> {
    use actix_web::{middleware::Logger, web, App, HttpServer};

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(post_service.clone()))
            .configure(presentation::configure)
    })
    .bind(&addr)?
    .run();

    tracing::info!("HTTP server running on {}", addr);

    server.await?;

    Ok(())
}
