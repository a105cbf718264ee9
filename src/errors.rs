// errors.rs
use std::fmt;

/// Errors originating from either the request layer
/// (routing, bad parameters) or the listing store underneath it.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    /// A slug that does not decode to a locality. Rendered as "not found"
    /// at the edge, never as a crash.
    InvalidSlug(String),
    /// The listing store could not be reached or a query failed. Kept
    /// distinct from empty results so callers can tell "no data" from
    /// "data inaccessible".
    StoreUnavailable(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::InvalidSlug(slug) => write!(f, "Invalid slug: {slug}"),
            ServerError::StoreUnavailable(msg) => write!(f, "Listing store unavailable: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
