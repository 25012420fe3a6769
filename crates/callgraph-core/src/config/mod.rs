//! Configuration system for the call graph analysis.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.

pub mod call_graph_config;
pub mod graph_config;

pub use call_graph_config::CallGraphConfig;
pub use graph_config::{ConfigOverrides, GraphConfig};
