//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CallGraphConfig;
use crate::errors::ConfigError;

/// Name of the project-level config file looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "callgraph.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`CALLGRAPH_*`)
/// 3. Project config (`callgraph.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GraphConfig {
    pub call_graph: CallGraphConfig,
}

/// Override arguments supplied programmatically by the host pipeline.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub entry_points: Option<Vec<String>>,
    pub max_nodes: Option<usize>,
    pub trace_edges: Option<bool>,
}

impl GraphConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: GraphConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &GraphConfig) -> Result<(), ConfigError> {
        if config.call_graph.max_nodes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "call_graph.max_nodes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for entry in &config.call_graph.entry_points {
            let valid = entry
                .trim()
                .rsplit_once('.')
                .map(|(namespace, name)| !namespace.is_empty() && !name.is_empty())
                .unwrap_or(false);
            if !valid {
                return Err(ConfigError::ValidationFailed {
                    field: "call_graph.entry_points".to_string(),
                    message: format!("`{entry}` is not a qualified name of the form Namespace.Name"),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GraphConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GraphConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it sets a value.
    fn merge(base: &mut GraphConfig, other: &GraphConfig) {
        if !other.call_graph.entry_points.is_empty() {
            base.call_graph.entry_points = other.call_graph.entry_points.clone();
        }
        if other.call_graph.max_nodes.is_some() {
            base.call_graph.max_nodes = other.call_graph.max_nodes;
        }
        if other.call_graph.trace_edges.is_some() {
            base.call_graph.trace_edges = other.call_graph.trace_edges;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CALLGRAPH_ENTRY_POINTS`, `CALLGRAPH_MAX_NODES`, `CALLGRAPH_TRACE_EDGES`.
    fn apply_env_overrides(config: &mut GraphConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("CALLGRAPH_ENTRY_POINTS") {
            let entries: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !entries.is_empty() {
                config.call_graph.entry_points = entries;
            }
        }
        if let Ok(val) = std::env::var("CALLGRAPH_MAX_NODES") {
            let v = val.parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                field: "CALLGRAPH_MAX_NODES".to_string(),
                message: e.to_string(),
            })?;
            config.call_graph.max_nodes = Some(v);
        }
        if let Ok(val) = std::env::var("CALLGRAPH_TRACE_EDGES") {
            if let Ok(v) = val.parse::<bool>() {
                config.call_graph.trace_edges = Some(v);
            }
        }
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut GraphConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.entry_points {
            config.call_graph.entry_points = v.clone();
        }
        if let Some(v) = overrides.max_nodes {
            config.call_graph.max_nodes = Some(v);
        }
        if let Some(v) = overrides.trace_edges {
            config.call_graph.trace_edges = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
