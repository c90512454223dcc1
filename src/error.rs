//! Page Errors
//!
//! Failures while reading the server-rendered page. None of them are fatal:
//! callers log and fall back to an empty or unmounted directory.

/// Common result type for page bootstrap
pub type PageResult<T> = Result<T, PageError>;

#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    /// No element with this id, or it is not an HTML element
    MissingElement(String),
    /// The embedded JSON payload did not parse
    InvalidPayload(String),
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageError::MissingElement(id) => write!(f, "Missing element: #{}", id),
            PageError::InvalidPayload(msg) => write!(f, "Invalid page payload: {}", msg),
        }
    }
}

impl std::error::Error for PageError {}
