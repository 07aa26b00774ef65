//! Error types for the layout generator

use thiserror::Error;

/// Errors that can occur during blueprint generation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Plot dimensions or area are not strictly positive and finite
    #[error("invalid plot: {reason}")]
    InvalidPlot { reason: String },

    /// Room program that cannot be laid out at all
    #[error("invalid requirements: {reason}")]
    InvalidRequirements { reason: String },

    /// Layout setting outside its allowed range
    #[error("invalid layout config: {reason}")]
    InvalidConfig { reason: String },
}

impl LayoutError {
    /// Create an invalid plot error
    pub fn invalid_plot(reason: impl Into<String>) -> Self {
        Self::InvalidPlot {
            reason: reason.into(),
        }
    }

    /// Create an invalid requirements error
    pub fn invalid_requirements(reason: impl Into<String>) -> Self {
        Self::InvalidRequirements {
            reason: reason.into(),
        }
    }

    /// Create an invalid layout config error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_plot_display() {
        let err = LayoutError::invalid_plot("width must be positive, got -4");
        assert_eq!(err.to_string(), "invalid plot: width must be positive, got -4");
    }

    #[test]
    fn test_invalid_requirements_display() {
        let err = LayoutError::invalid_requirements("at least one floor is required");
        assert!(err.to_string().contains("invalid requirements"));
    }
}
