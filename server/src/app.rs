//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::config::ServerConfig;
use crate::error::{AppError, Result};
use crate::services::ThoughtsService;
use crate::storage::ThoughtStore;
use std::path::PathBuf;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub thoughts_service: ThoughtsService,
}

impl AppState {
    pub fn new(data_path: PathBuf) -> Self {
        let store = ThoughtStore::new(data_path.clone());
        Self {
            data_path,
            thoughts_service: ThoughtsService::new(store),
        }
    }
}

/// Application setup - called once on startup
pub async fn setup(config: &ServerConfig) -> Result<AppState> {
    tracing::info!("Initializing application");

    let data_path = config.data_path.clone();
    if data_path.file_name().is_none() {
        return Err(AppError::Config(format!(
            "Data path {:?} does not name a file",
            data_path
        )));
    }

    // Create the data directory up front so the first write cannot fail on it
    if let Some(parent) = data_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tracing::info!("Thought store file: {:?}", data_path);

    let state = AppState::new(data_path);

    tracing::info!("Application initialized successfully");

    Ok(state)
}
