//! Backend factory for creating backend instances from configuration.

use anyhow::{anyhow, Result};
use std::sync::Arc;

use super::{MemoryBackend, TodoBackend};
use crate::config::BackendConfig;

/// Create a backend instance from its configuration.
///
/// # Arguments
/// * `config` - The `[backend]` section of the configuration
/// * `user_id` - Owner of any lists loaded from a seed file
///
/// # Errors
/// Returns error if:
/// - Backend type is unknown
/// - The seed file cannot be read or parsed
pub fn create_backend(config: &BackendConfig, user_id: &str) -> Result<Arc<dyn TodoBackend>> {
    match config.backend_type.as_str() {
        "memory" => {
            let backend = match &config.seed_file {
                Some(path) => MemoryBackend::from_json_file(path, user_id)?,
                None => MemoryBackend::new(),
            };
            Ok(Arc::new(backend))
        }
        _ => Err(anyhow!("Unknown backend type: {}", config.backend_type)),
    }
}
