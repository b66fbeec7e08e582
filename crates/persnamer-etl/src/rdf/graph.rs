use std::fmt;

use super::{xml, Result};

/// An RDF literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub value: String,
    pub lang: Option<String>,
    pub datatype: Option<String>,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            lang: None,
            datatype: None,
        }
    }
}

/// A node in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Iri(String),
    Blank(String),
    Literal(Literal),
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// The literal's lexical value, or `None` for IRIs and blank nodes.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(literal) => Some(&literal.value),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{}>", iri),
            Self::Blank(id) => write!(f, "_:{}", id),
            Self::Literal(literal) => {
                write!(f, "{:?}", literal.value)?;
                if let Some(lang) = &literal.lang {
                    write!(f, "@{}", lang)?;
                } else if let Some(datatype) = &literal.datatype {
                    write!(f, "^^<{}>", datatype)?;
                }
                Ok(())
            }
        }
    }
}

/// A subject-predicate-object statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: Term,
    pub predicate: String,
    pub object: Term,
}

/// Triples in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: Vec<Triple>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an RDF/XML document.
    ///
    /// # Errors
    /// Fails when the bytes are not UTF-8, not well-formed XML, or the root
    /// element is neither `rdf:RDF` nor a node element with a subject.
    pub fn from_rdf_xml(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        xml::read(text).map(|triples| Self { triples })
    }

    pub fn insert(&mut self, subject: Term, predicate: impl Into<String>, object: Term) {
        self.triples.push(Triple {
            subject,
            predicate: predicate.into(),
            object,
        });
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Literal values for `predicate`, in document order.
    ///
    /// When `subjects` is given, only statements about one of those subjects
    /// are considered; otherwise the whole graph is searched.
    pub fn literals<'a>(
        &'a self,
        subjects: Option<&'a [Term]>,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.predicate == predicate)
            .filter(move |t| subjects.map_or(true, |s| s.contains(&t.subject)))
            .filter_map(|t| t.object.as_literal())
    }

    /// Returns `true` when any statement has `subject` as its subject.
    pub fn describes(&self, subject: &Term) -> bool {
        self.triples.iter().any(|t| &t.subject == subject)
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
