//! Namespace and term IRIs used when reading VIAF records.

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDF Schema namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// XML namespace (bound to the `xml:` prefix).
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";

/// VIAF ontology namespace.
pub const VIAF: &str = "http://viaf.org/ontology/1.1#";

/// schema.org namespace.
pub const SCHEMA: &str = "http://schema.org/";

/// MADS/RDF namespace (Metadata Authority Description Schema).
pub const MADSRDF: &str = "http://www.loc.gov/mads/rdf/v1#";

/// SKOS core namespace.
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDF_XML_LITERAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#XMLLiteral";

pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const SCHEMA_NAME: &str = "http://schema.org/name";
pub const VIAF_MAIN_HEAD: &str = "http://viaf.org/ontology/1.1#mainHead";
pub const MADSRDF_AUTHORITATIVE_LABEL: &str = "http://www.loc.gov/mads/rdf/v1#authoritativeLabel";
pub const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";

pub const VIAF_BIRTH_DATE: &str = "http://viaf.org/ontology/1.1#birthDate";
pub const SCHEMA_BIRTH_DATE: &str = "http://schema.org/birthDate";
pub const VIAF_DEATH_DATE: &str = "http://viaf.org/ontology/1.1#deathDate";
pub const SCHEMA_DEATH_DATE: &str = "http://schema.org/deathDate";
