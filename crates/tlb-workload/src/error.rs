//! Workload error types.
//!
//! Every generator validates its parameters up front; nothing fails once a
//! generator has been constructed.

use thiserror::Error;

/// Errors raised while configuring or constructing a workload.
#[derive(Debug, Error)]
pub enum WorkloadError {
    /// A segment size of zero was supplied.
    #[error("{workload}: segment size must be non-zero")]
    ZeroSegmentSize { workload: &'static str },

    /// The address space leaves no room past the four reserved segments.
    #[error("address space of {space_size:#x} bytes does not extend past the reserved region ({reserved})")]
    AddressSpaceTooSmall { space_size: u64, reserved: String },

    /// The games workload was given no segment sizes to pick from.
    #[error("at least one segment size is required")]
    EmptySegmentSizes,

    /// A probability was not a finite value in [0, 1].
    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    /// The microservice workload needs at least one service.
    #[error("service count must be non-zero")]
    ZeroServiceCount,

    /// The address formula can exceed the 64-bit address range.
    #[error("{workload}: parameters produce addresses beyond u64::MAX")]
    AddressOverflow { workload: &'static str },

    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for WorkloadError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for workload operations.
pub type WorkloadResult<T> = Result<T, WorkloadError>;

/// Reject probabilities that are NaN, infinite, or outside [0, 1].
pub(crate) fn check_probability(name: &'static str, value: f64) -> WorkloadResult<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(WorkloadError::ProbabilityOutOfRange { name, value })
    }
}
