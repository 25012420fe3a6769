//! Error handling for the call graph analysis.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod call_graph_error;
pub mod config_error;
pub mod error_code;

pub use analysis_error::AnalysisError;
pub use call_graph_error::CallGraphError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
