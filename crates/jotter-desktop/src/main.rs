//! Jotter Desktop Application
//!
//! Personal notes behind a simple account, stored in a REST data store.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod machine;
mod pages;
mod theme;

use dioxus::desktop::{Config, WindowBuilder};
use jotter_core::{AppContext, ClientConfig, FileStore, RestClient};

/// Process-wide session and data access shared with every page
pub type Services = AppContext<RestClient, FileStore>;

fn build_services() -> jotter_core::Result<Services> {
    let config = ClientConfig::from_env()?;
    tracing::info!(
        "Using data store at {} and session dir {}",
        config.api_url,
        config.data_dir.display()
    );

    let session_store = FileStore::open(&config.data_dir)?;
    let data = RestClient::new(&config.api_url)?;
    Ok(AppContext::new(data, session_store))
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "jotter=debug".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Jotter...");

    let services = match build_services() {
        Ok(services) => services,
        Err(e) => {
            tracing::error!("Failed to start Jotter: {}", e);
            std::process::exit(1);
        }
    };

    let config = Config::new().with_window(WindowBuilder::new().with_title("Jotter"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(services)
        .launch(app::App);
}
