use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExposureError {
    #[error("Failed to read input: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid page URL '{url}': {reason}")]
    InvalidPageUrl { url: String, reason: String },

    #[error("Failed to parse cookie records: {path}")]
    RecordsParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write output: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, ExposureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_read_error() {
        let err = ExposureError::ReadError {
            path: "/path/to/cookies.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read input: /path/to/cookies.txt");
    }

    #[test]
    fn test_error_display_invalid_page_url() {
        let err = ExposureError::InvalidPageUrl {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid page URL 'nope': relative URL without a base"
        );
    }

    #[test]
    fn test_error_display_write_error() {
        let err = ExposureError::WriteError {
            path: "/readonly/report.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write output: /readonly/report.txt");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: ExposureError =
            ConfigError::UnsupportedFormat("cfg.ini".to_string(), "ini".to_string()).into();
        assert_eq!(err.to_string(), "Unsupported config format for cfg.ini: .ini");
    }
}
