//! Core domain model for persnamer.
//!
//! This crate defines the identifiers (VIAF numbers and TEI slugs), the
//! person fields extracted from an authority record, and the rendering of
//! the two TEI fragments: the `<person>` authority entry and the
//! `<persName>` annotation that points back at it.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod tei;

pub use error::{Error, Result};
pub use model::{PersonFields, Slug, ViafId};
pub use tei::{render, AnnotationTag, AuthorityEntry};
