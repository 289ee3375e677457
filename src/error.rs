//! Error type shared by configuration and terminal I/O.

use std::io;

/// Errors produced by the crate.
///
/// Measurement never fails; only configuration and the terminal host do.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is out of range.
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Terminal setup or output failed.
    #[error("terminal I/O: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = Error::InvalidConfig {
            field: "scroll_speed",
            reason: "must be greater than zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config `scroll_speed`: must be greater than zero"
        );
    }

    #[test]
    fn test_io_from() {
        let err: Error = io::Error::other("boom").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
