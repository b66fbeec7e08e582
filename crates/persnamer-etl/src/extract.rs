//! Person field extraction.
//!
//! Each field has an ordered list of candidate predicates. The extractor
//! looks at statements about the record's primary entity first and only
//! falls back to the whole graph when the primary entity says nothing about
//! that field. Within a scope the highest-priority predicate that carries a
//! non-empty literal wins.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use persnamer_core::{PersonFields, ViafId};

use crate::error::{LookupError, LookupResult};
use crate::rdf::{vocab, Graph, Term};

/// Name predicates, highest priority first.
pub const NAME_PREDICATES: &[&str] = &[
    vocab::RDFS_LABEL,
    vocab::SCHEMA_NAME,
    vocab::VIAF_MAIN_HEAD,
    vocab::MADSRDF_AUTHORITATIVE_LABEL,
    vocab::SKOS_PREF_LABEL,
];

/// Birth date predicates, highest priority first.
pub const BIRTH_PREDICATES: &[&str] = &[vocab::VIAF_BIRTH_DATE, vocab::SCHEMA_BIRTH_DATE];

/// Death date predicates, highest priority first.
pub const DEATH_PREDICATES: &[&str] = &[vocab::VIAF_DEATH_DATE, vocab::SCHEMA_DEATH_DATE];

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel-case pattern"));
static UNKNOWN_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-\d{2}-00$").expect("valid unknown-day pattern"));

/// Optional clean-ups applied to extracted values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Split "GaleazzoSanseverino" into "Galeazzo Sanseverino".
    pub split_camel_case: bool,
    /// Reduce `YYYY-MM-00` to `YYYY`.
    pub truncate_unknown_day: bool,
}

/// The IRIs VIAF uses for a cluster's primary entity.
pub fn primary_subjects(id: &ViafId) -> [Term; 4] {
    [
        Term::Iri(format!("http://viaf.org/viaf/{id}")),
        Term::Iri(format!("http://viaf.org/viaf/{id}/")),
        Term::Iri(format!("https://viaf.org/viaf/{id}")),
        Term::Iri(format!("https://viaf.org/viaf/{id}/")),
    ]
}

/// Extract name, birth and death date for the person described by `graph`.
///
/// # Errors
/// Returns [`LookupError::MissingName`] when no name predicate carries a
/// value anywhere in the graph.
pub fn extract(graph: &Graph, id: &ViafId, options: ExtractOptions) -> LookupResult<PersonFields> {
    let primary = primary_subjects(id);
    if !primary.iter().any(|subject| graph.describes(subject)) {
        log::debug!("Record has no statements about the primary entity of {}", id);
    }

    let name = select(graph, &primary, NAME_PREDICATES)
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::MissingName { id: id.to_string() })?;
    let name = if options.split_camel_case {
        split_camel_case(&name)
    } else {
        name
    };

    let mut fields = PersonFields::new(name);

    let births = select(graph, &primary, BIRTH_PREDICATES);
    if let Some(note) = conflict_note("birth", &births) {
        fields = fields.with_note(note);
    }
    if let Some(birth) = births.into_iter().next() {
        fields = fields.with_birth(normalize_date(birth, options));
    }

    let deaths = select(graph, &primary, DEATH_PREDICATES);
    if let Some(note) = conflict_note("death", &deaths) {
        fields = fields.with_note(note);
    }
    if let Some(death) = deaths.into_iter().next() {
        fields = fields.with_death(normalize_date(death, options));
    }

    Ok(fields)
}

/// Candidate values for one field: primary entity first, whole graph second.
///
/// Values are trimmed, empty ones dropped, and ordered by predicate priority
/// then document order.
fn select(graph: &Graph, primary: &[Term], predicates: &[&str]) -> Vec<String> {
    let scoped = candidates(graph, Some(primary), predicates);
    if scoped.is_empty() {
        candidates(graph, None, predicates)
    } else {
        scoped
    }
}

fn candidates(graph: &Graph, subjects: Option<&[Term]>, predicates: &[&str]) -> Vec<String> {
    predicates
        .iter()
        .copied()
        .flat_map(|predicate| graph.literals(subjects, predicate))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

fn conflict_note(kind: &str, values: &[String]) -> Option<String> {
    let distinct: BTreeSet<&str> = values.iter().map(String::as_str).collect();
    if distinct.len() < 2 {
        return None;
    }
    let listed: Vec<&str> = distinct.into_iter().collect();
    Some(format!("Multiple {kind} dates: {}", listed.join("; ")))
}

fn normalize_date(date: String, options: ExtractOptions) -> String {
    if !options.truncate_unknown_day {
        return date;
    }
    match UNKNOWN_DAY.captures(&date) {
        Some(caps) => caps[1].to_string(),
        None => date,
    }
}

/// Insert a space wherever a lower-case ASCII letter runs into an upper-case one.
pub fn split_camel_case(name: &str) -> String {
    CAMEL_BOUNDARY.replace_all(name, "$1 $2").into_owned()
}
