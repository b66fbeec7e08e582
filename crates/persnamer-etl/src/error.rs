//! Lookup error types.

use thiserror::Error;

/// Errors that end a lookup run.
///
/// Every variant is terminal: nothing is retried, and no XML is produced.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The identifier was rejected before any request was made.
    #[error(transparent)]
    InvalidIdentifier(#[from] persnamer_core::Error),

    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The response body could not be read as RDF/XML.
    #[error("could not parse record as RDF/XML: {message}")]
    Parse { message: String },

    /// The record parsed, but none of the name predicates carried a value.
    #[error("no usable name found in VIAF record {id}")]
    MissingName { id: String },

    /// The HTTP client could not be constructed.
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl LookupError {
    /// The pipeline stage the error came from, for the error report.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier(_) => "input",
            Self::Network { .. } | Self::Http { .. } | Self::Client(_) => "fetch",
            Self::Parse { .. } => "parse",
            Self::MissingName { .. } => "extract",
        }
    }

    /// Returns `true` when the server reported that the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}

impl From<crate::rdf::Error> for LookupError {
    fn from(err: crate::rdf::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

/// Convenience alias for lookup results.
pub type LookupResult<T> = std::result::Result<T, LookupError>;
