/// Core error types for the lexivid generator.
use std::path::PathBuf;

/// A specialized Result type for lexivid operations.
pub type LexividResult<T> = Result<T, LexividError>;

/// Top-level error type encompassing all lexivid subsystems.
///
/// Severity is two-tier: manifest and session errors abort the whole run,
/// while `AssetMissing` for a single record's image or audio is recoverable
/// (the record is skipped and the batch continues).
#[derive(Debug, thiserror::Error)]
pub enum LexividError {
    #[error("manifest file not found: {path:?}")]
    ManifestNotFound { path: PathBuf },

    #[error("manifest parse error: {message} ({path:?})")]
    ManifestParse { message: String, path: PathBuf },

    #[error("asset missing: {message} ({path:?})")]
    AssetMissing { message: String, path: PathBuf },

    #[error("asset probe error: {message} ({path:?})")]
    Probe { message: String, path: PathBuf },

    #[error("plan validation error: {0}")]
    PlanValidation(String),

    #[error("session error: {0}")]
    Session(String),

    #[error("host error: {0}")]
    Host(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LexividError {
    /// Create a manifest parse error.
    pub fn manifest_parse(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        LexividError::ManifestParse {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create an asset-missing error.
    pub fn asset_missing(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        LexividError::AssetMissing {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create an asset probe error.
    pub fn probe(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        LexividError::Probe {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Whether this error is recoverable at the record level (skip and
    /// continue) rather than fatal for the whole run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LexividError::AssetMissing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_not_found_display() {
        let err = LexividError::ManifestNotFound {
            path: "JSON/oneitem.json".into(),
        };
        assert!(err.to_string().contains("manifest file not found"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_asset_missing_is_recoverable() {
        let err = LexividError::asset_missing("audio file not found", "Assets/Audio/cat.wav");
        assert!(err.to_string().contains("audio file not found"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_parse_error_not_recoverable() {
        let err = LexividError::manifest_parse("expected a JSON array", "items.json");
        assert!(!err.is_recoverable());
    }
}
