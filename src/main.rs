//! # Adhan Bot Main Entry Point
//!
//! This is the main entry point for the Adhan Bot application.
//! It initializes logging, loads configuration, wires up the location
//! store and external-service clients, starts the alert scheduler, and
//! runs the Telegram bot alongside the health-check server.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod directory;
mod error;
mod services;
mod store;
mod utils;

use crate::bot::handlers::{BotContext, BotHandler};
use crate::config::Config;
use crate::services::adhan::AdhanScheduler;
use crate::services::geocoding::GeocodingClient;
use crate::services::health::HealthService;
use crate::services::prayer_times::PrayerTimesClient;
use crate::store::LocationStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adhan_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Adhan Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - HTTP Port: {}, Calculation method: {:?}",
        config.http_port, config.calculation_method
    );

    // Initialize bot and service clients
    info!("Initializing Telegram bot...");
    let telegram_bot = Bot::new(&config.telegram_bot_token);
    let store = Arc::new(LocationStore::new());
    let prayer_client = Arc::new(PrayerTimesClient::new(config.calculation_method));
    let geocoder = Arc::new(GeocodingClient::new());
    info!("Telegram bot initialized successfully");

    // Initialize and start the adhan alert scheduler
    info!("Initializing adhan scheduler...");
    let adhan = match AdhanScheduler::new(telegram_bot.clone(), prayer_client.clone()).await {
        Ok(scheduler) => {
            info!("Adhan scheduler initialized successfully");
            Arc::new(scheduler)
        }
        Err(e) => {
            tracing::error!("Failed to create adhan scheduler: {}", e);
            return Err(anyhow::anyhow!("Failed to create adhan scheduler: {}", e));
        }
    };

    if let Err(e) = adhan.start().await {
        tracing::error!("Failed to start adhan scheduler: {}", e);
        return Err(anyhow::anyhow!("Failed to start adhan scheduler: {}", e));
    }

    let ctx = BotContext {
        store,
        prayer_client,
        geocoder,
        adhan: adhan.clone(),
    };
    let handler = BotHandler::new(ctx);

    // Initialize health service
    let health_service = HealthService::new();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(telegram_bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    // Stop the alert scheduler on shutdown
    if let Err(e) = adhan.stop().await {
        tracing::warn!("Error stopping adhan scheduler: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
