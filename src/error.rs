use thiserror::Error;

/// Errors that can occur during recipe extraction
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to fetch a page or image (unreachable host, timeout, non-2xx status)
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The page has no JSON-LD object typed "Recipe"
    #[error("no JSON-LD Recipe found on page.")]
    NoRecipeFound,

    /// A URL could not be parsed or resolved
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// An inline `data:` image reference is not base64 image data
    #[error("Invalid image data URI: {0}")]
    InvalidDataUri(String),

    /// Inline image payload is not valid base64
    #[error("Failed to decode image data: {0}")]
    DecodeError(#[from] base64::DecodeError),

    /// Filesystem error while writing images or the index page
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to serialize the recipe record
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl ImportError {
    /// Process exit status for this error when surfaced by a binary.
    ///
    /// A page without a recipe exits with `1`; every other failure exits with `2`.
    pub fn exit_code(&self) -> u8 {
        match self {
            ImportError::NoRecipeFound => 1,
            _ => 2,
        }
    }
}
