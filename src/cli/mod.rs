//! CLI support for sqlcraft
//!
//! Provides programmatic access to the `sqlcraft` binary's commands so they
//! can be embedded in other tools and tested without spawning a process.

mod inject;

pub use inject::{InjectOptions, execute_inject};

use crate::{ConfigError, EmitError};

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad value for an emitter or escape option
    #[error("Invalid option: {0}")]
    Config(#[from] ConfigError),

    /// Payload could not be rendered
    #[error("Emission error: {0}")]
    Emit(#[from] EmitError),

    /// A JSON value flag did not parse
    #[error("Invalid JSON value: {0}")]
    Json(#[from] serde_json::Error),
}
