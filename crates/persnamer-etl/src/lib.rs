//! Fetch and extraction stages for persnamer.
//!
//! Retrieves a VIAF cluster record as RDF/XML, loads it into a small
//! triple graph, pulls out the person fields, and hands them to
//! `persnamer-core` for slug derivation and TEI rendering.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod rdf;
pub mod viaf;

pub use config::Config;
pub use error::{LookupError, LookupResult};
pub use extract::ExtractOptions;
pub use pipeline::{lookup, Lookup};
pub use viaf::ViafClient;
