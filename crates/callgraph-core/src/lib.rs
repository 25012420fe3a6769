//! Shared foundations for the call graph analysis: errors, configuration,
//! tracing setup and collection aliases.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
