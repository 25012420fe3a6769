//! ErrorCode trait for stable, machine-readable error identifiers.

/// Every error enum implements this to expose a structured code string
/// that downstream pipeline stages can match on without parsing messages.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "UNDECLARED_CALLABLE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNDECLARED_CALLABLE: &str = "UNDECLARED_CALLABLE";
pub const SPECIALIZATION_NOT_FOUND: &str = "SPECIALIZATION_NOT_FOUND";
pub const AMBIGUOUS_SPECIALIZATION: &str = "AMBIGUOUS_SPECIALIZATION";
pub const TYPE_ARGUMENT_ARITY: &str = "TYPE_ARGUMENT_ARITY";
pub const UNRESOLVED_TYPE_PARAMETER: &str = "UNRESOLVED_TYPE_PARAMETER";
pub const RESOLUTION_CONFLICT: &str = "RESOLUTION_CONFLICT";
pub const NODE_LIMIT_EXCEEDED: &str = "NODE_LIMIT_EXCEEDED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
