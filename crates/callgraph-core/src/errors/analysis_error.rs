//! Top-level error for a configured analysis run.

use super::error_code::ErrorCode;
use super::{CallGraphError, ConfigError};

/// Errors from loading configuration and building the call graph,
/// aggregated via `From` conversions so callers can use `?` across both.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Call graph error: {0}")]
    CallGraph(#[from] CallGraphError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CallGraph(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
