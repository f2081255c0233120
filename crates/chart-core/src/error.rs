// File: crates/chart-core/src/error.rs
// Summary: Error types. Layout itself never fails; only configuration and input parsing do.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("step width must be finite and positive, got {0}")]
    StepWidth(f64),
    #[error("visible column count must be at least 1")]
    VisibleColumns,
    #[error("`{field}` must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("grid dash intervals must be positive")]
    GridDash,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid layout config: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to parse {what}: {reason}")]
    Parse { what: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
