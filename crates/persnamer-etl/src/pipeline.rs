//! The lookup pipeline: identifier → record → fields → slug → TEI.

use persnamer_core::{render, PersonFields, Slug, ViafId};

use crate::config::Config;
use crate::error::{LookupError, LookupResult};
use crate::extract::{self, ExtractOptions};
use crate::rdf::Graph;
use crate::viaf::ViafClient;

/// How much of an unparseable body is echoed to the debug log.
const PREVIEW_BYTES: usize = 2000;

/// Everything one lookup produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub id: ViafId,
    pub fields: PersonFields,
    pub slug: Slug,
    /// The `<person>` entry for the authority file.
    pub authority_xml: String,
    /// The `<persName ref="#...">` tag for the running text.
    pub annotation_xml: String,
}

/// Fetch the VIAF record for `raw_id` and build both TEI fragments.
///
/// # Errors
/// Fails on an invalid identifier, a transport or HTTP error, a record that
/// is not RDF/XML, or a record without a usable name. Nothing is retried.
pub async fn lookup(config: &Config, raw_id: &str) -> LookupResult<Lookup> {
    let id = ViafId::parse(raw_id)?;
    log::info!("Processing VIAF number: {}", id);

    let client = ViafClient::new(config)?;
    let record = client.fetch(&id).await?;

    build_lookup(id, &record, config.extract_options())
}

/// Run the offline part of the pipeline on an already fetched record.
pub fn build_lookup(id: ViafId, record: &[u8], options: ExtractOptions) -> LookupResult<Lookup> {
    let graph = Graph::from_rdf_xml(record).map_err(|e| {
        let preview = &record[..record.len().min(PREVIEW_BYTES)];
        log::debug!(
            "Raw response (truncated):\n{}",
            String::from_utf8_lossy(preview)
        );
        LookupError::from(e)
    })?;
    log::info!("Parsed RDF record: {} triples", graph.len());

    let fields = extract::extract(&graph, &id, options)?;
    log::info!("Name found: {}", fields.name);
    log::info!(
        "Birth date found: {}",
        fields.birth.as_deref().unwrap_or("(none)")
    );
    log::info!(
        "Death date found: {}",
        fields.death.as_deref().unwrap_or("(none)")
    );
    for note in &fields.notes {
        log::warn!("{}", note);
    }

    let slug = fields.slug();
    log::info!("Derived xml:id: {}", slug);

    let (authority_xml, annotation_xml) = render(&id, &slug, &fields);

    Ok(Lookup {
        id,
        fields,
        slug,
        authority_xml,
        annotation_xml,
    })
}
