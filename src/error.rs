/// Error types for layman-catalog
///
/// Filtering and view-state transitions never fail. Everything in here comes
/// from the edges: reading files, parsing them, and interpreting CLI input.

use thiserror::Error;

/// Main error type for layman-catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON or has the wrong shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Config file is not valid TOML
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Two records share the same key
    #[error("Duplicate {kind} key: {key}")]
    DuplicateKey { kind: &'static str, key: String },

    /// Permission name that doesn't match any known level
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),

    /// Command id not present in the catalog
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad command-line usage
    #[error("{0}")]
    Usage(String),
}

/// Result type alias for layman-catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Convert CatalogError to a user-friendly error message
impl CatalogError {
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Io(e) => {
                format!("File system error. Check the catalog path. Details: {}", e)
            }
            CatalogError::Serialization(e) => {
                format!("Catalog file is malformed: {}", e)
            }
            CatalogError::ConfigParse(e) => {
                format!("Config file is malformed: {}", e)
            }
            CatalogError::DuplicateKey { kind, key } => {
                format!("The catalog lists {} '{}' more than once", kind, key)
            }
            CatalogError::UnknownPermission(name) => {
                format!(
                    "Unknown permission '{}'. Expected one of: user, moderator, admin, owner",
                    name
                )
            }
            CatalogError::CommandNotFound(id) => {
                format!("Command '{}' not found in the catalog", id)
            }
            CatalogError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            CatalogError::Usage(msg) => msg.clone(),
        }
    }
}
