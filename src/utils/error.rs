use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    DecodeError {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Invalid substitution pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，僅用於日誌
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Decode,
    Pattern,
    Config,
}

impl RewriteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RewriteError::ReadError { .. }
            | RewriteError::WriteError { .. }
            | RewriteError::IoError(_) => ErrorCategory::Io,
            RewriteError::DecodeError { .. } => ErrorCategory::Decode,
            RewriteError::PatternError(_) => ErrorCategory::Pattern,
            RewriteError::ConfigError { .. } | RewriteError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RewriteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_message_names_path() {
        let err = RewriteError::ReadError {
            path: "Frontend/src/data/courses.ts".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };

        let message = err.to_string();
        assert!(message.contains("Frontend/src/data/courses.ts"));
        assert!(message.contains("No such file or directory"));
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_pattern_error_category() {
        let err: RewriteError = regex::Regex::new("(").unwrap_err().into();
        assert_eq!(err.category(), ErrorCategory::Pattern);
    }
}
