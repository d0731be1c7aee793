//! Crossroads Engine - Story-driven personality quiz for the terminal
//!
//! The engine owns:
//! - A built-in catalog of four 20-scene stories and sixteen type profiles
//! - A session state machine walking one story at a time
//! - A pure scoring pass from picked options to a 4-letter type
//! - A readline front end rendering the three screens

mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::ports::outbound::ContentCatalogPort;
use crate::application::services::QuizServiceImpl;
use crate::infrastructure::catalog::StaticCatalog;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::terminal;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging; stdout belongs to the screens, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crossroads_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Crossroads Engine");

    let config = AppConfig::from_env()?;
    let catalog = Arc::new(StaticCatalog::load()?);
    tracing::info!(scenarios = catalog.scenarios().len(), "Catalog loaded");

    let mut service = QuizServiceImpl::new(catalog);
    terminal::run(&mut service, &config)
}
