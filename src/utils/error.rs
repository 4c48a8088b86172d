use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for mrkdwn plumbing
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for mrkdwn operations
#[derive(Debug)]
pub enum MrkdwnError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Page template error
    Template(String),
    /// Server error
    Server(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for MrkdwnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MrkdwnError::Io(err) => write!(f, "IO error: {}", err),
            MrkdwnError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MrkdwnError::Template(msg) => write!(f, "Template error: {}", msg),
            MrkdwnError::Server(msg) => write!(f, "Server error: {}", msg),
            MrkdwnError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for MrkdwnError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MrkdwnError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MrkdwnError {
    fn from(err: io::Error) -> Self {
        MrkdwnError::Io(err)
    }
}

impl From<String> for MrkdwnError {
    fn from(msg: String) -> Self {
        MrkdwnError::Generic(msg)
    }
}

impl From<&str> for MrkdwnError {
    fn from(msg: &str) -> Self {
        MrkdwnError::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = MrkdwnError::Config("port must not be zero".to_string());
        assert_eq!(err.to_string(), "Configuration error: port must not be zero");

        let err: MrkdwnError = "plain".into();
        assert_eq!(err.to_string(), "plain");
    }

    #[test]
    fn test_io_source_is_kept() {
        let err = MrkdwnError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("IO error:"));
    }
}
