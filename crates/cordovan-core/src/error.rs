//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Cordova CLI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Cordova CLI not found. Ensure 'cordova' is in your PATH.")]
    ToolNotFound,

    #[error("Failed to spawn Cordova process: {reason}")]
    Spawn { reason: String },

    #[error("No Cordova project found in: {path} (missing config.xml)")]
    NotAProject { path: PathBuf },

    #[error("Project creation failed with exit code {code:?}:\n{output}")]
    CreationFailed { code: Option<i32>, output: String },

    #[error("Cordova process timed out after {elapsed:?}")]
    Timeout { elapsed: std::time::Duration },

    // ─────────────────────────────────────────────────────────────
    // API Contract Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Operation not implemented: {operation}")]
    NotImplemented { operation: &'static str },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn spawn(reason: impl Into<String>) -> Self {
        Self::Spawn {
            reason: reason.into(),
        }
    }

    pub fn not_a_project(path: impl Into<PathBuf>) -> Self {
        Self::NotAProject { path: path.into() }
    }

    pub fn not_implemented(operation: &'static str) -> Self {
        Self::NotImplemented { operation }
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ToolNotFound | Error::Spawn { .. })
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::NotAProject { .. }
                | Error::CreationFailed { .. }
                | Error::Timeout { .. }
                | Error::NotImplemented { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::spawn("permission denied");
        assert_eq!(
            err.to_string(),
            "Failed to spawn Cordova process: permission denied"
        );

        let err = Error::ToolNotFound;
        assert!(err.to_string().contains("Cordova CLI not found"));
    }

    #[test]
    fn test_not_a_project_mentions_descriptor() {
        let err = Error::not_a_project("/tmp/somewhere");
        assert!(err.to_string().contains("/tmp/somewhere"));
        assert!(err.to_string().contains("config.xml"));
    }

    #[test]
    fn test_creation_failed_carries_output() {
        let err = Error::CreationFailed {
            code: Some(1),
            output: "Error: directory already exists".to_string(),
        };
        assert!(err.to_string().contains("exit code Some(1)"));
        assert!(err.to_string().contains("directory already exists"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::ToolNotFound.is_fatal());
        assert!(Error::spawn("boom").is_fatal());
        assert!(!Error::not_a_project("/test").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::not_a_project("/test").is_recoverable());
        assert!(Error::not_implemented("checkForUpdates").is_recoverable());
        assert!(!Error::ToolNotFound.is_recoverable());
    }
}
