//! Minimal RDF support.
//!
//! Reads RDF/XML into an in-memory list of triples and answers the one kind
//! of question the extractor asks: which literals does a subject carry for a
//! given predicate. There is no query language and no inference.

pub mod graph;
pub mod vocab;
mod xml;

pub use graph::{Graph, Literal, Term, Triple};

use thiserror::Error;

/// Errors raised while reading an RDF/XML document.
#[derive(Debug, Error)]
pub enum Error {
    /// The bytes are not valid UTF-8.
    #[error("record is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The document is not well-formed XML.
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The document is XML, but its root is not RDF.
    #[error("document root <{0}> is not an RDF/XML element")]
    NotRdf(String),
}

pub type Result<T> = std::result::Result<T, Error>;
