//! Error types.
//!
//! [`ValidationError`] covers donor input problems. They are recovered on the
//! same view by re-rendering the form with a notice and never escape it.
//! [`ConfigError`] is raised while reading the environment at startup.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name, email or phone was left empty.
    #[error("missing required field")]
    MissingRequiredField,

    /// A funds donation without an amount.
    #[error("missing amount")]
    MissingAmount,

    /// A resources donation with nothing selected.
    #[error("missing resource selection")]
    MissingResourceSelection,
}

impl ValidationError {
    /// Short heading shown in the notice.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "Missing Information",
            Self::MissingAmount => "Amount Required",
            Self::MissingResourceSelection => "Resources Required",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "Please fill required fields",
            Self::MissingAmount => "Please enter donation amount",
            Self::MissingResourceSelection => "Please select at least one resource type",
        }
    }

    /// Stable identifier used in JSON responses.
    #[must_use]
    pub fn kind(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "MissingRequiredField",
            Self::MissingAmount => "MissingAmount",
            Self::MissingResourceSelection => "MissingResourceSelection",
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("{0}")]
    Origins(&'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_titles() {
        assert_eq!(ValidationError::MissingRequiredField.title(), "Missing Information");
        assert_eq!(ValidationError::MissingAmount.title(), "Amount Required");
        assert_eq!(ValidationError::MissingResourceSelection.title(), "Resources Required");
    }

    #[test]
    fn validation_display() {
        assert_eq!(ValidationError::MissingAmount.to_string(), "missing amount");
        assert_eq!(ValidationError::MissingAmount.kind(), "MissingAmount");
    }

    #[test]
    fn bind_addr_error_display() {
        let source = "nope".parse::<std::net::SocketAddr>().unwrap_err();
        let err = ConfigError::BindAddr { value: "nope".to_string(), source };
        assert!(err.to_string().contains("nope"));
    }
}
