//! RDF/XML reader built on `roxmltree`.
//!
//! Covers the striped syntax VIAF and most linked-data services emit:
//! node elements with `rdf:about`/`rdf:ID`/`rdf:nodeID`, typed node
//! elements, property attributes, `rdf:resource`, nested node elements,
//! and `rdf:parseType` `Resource` and `Literal`. Collections and
//! reification are not interpreted.

use roxmltree::{Document, Node, ParsingOptions};

use super::graph::{Literal, Term, Triple};
use super::vocab::{RDF, RDF_TYPE, RDF_XML_LITERAL, XML};
use super::{Error, Result};

pub(super) fn read(text: &str) -> Result<Vec<Triple>> {
    let doc = Document::parse_with_options(
        text,
        ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        },
    )?;

    let root = doc.root_element();
    let mut reader = Reader {
        input: text,
        triples: Vec::new(),
        next_blank: 0,
    };

    if is_rdf(root, "RDF") {
        for child in root.children().filter(Node::is_element) {
            reader.node_element(child);
        }
    } else if has_subject_attribute(root) {
        reader.node_element(root);
    } else {
        return Err(Error::NotRdf(root.tag_name().name().to_string()));
    }

    Ok(reader.triples)
}

struct Reader<'input> {
    input: &'input str,
    triples: Vec<Triple>,
    next_blank: usize,
}

impl Reader<'_> {
    /// Read a node element and its properties; returns the node's subject.
    fn node_element(&mut self, node: Node) -> Term {
        let subject = self.subject_of(node);

        if !is_rdf(node, "Description") {
            self.push(subject.clone(), RDF_TYPE, Term::Iri(expanded_name(node)));
        }
        self.property_attributes(node, &subject);

        for child in node.children().filter(Node::is_element) {
            self.property_element(&subject, child);
        }

        subject
    }

    fn subject_of(&mut self, node: Node) -> Term {
        if let Some(about) = node.attribute((RDF, "about")) {
            return Term::Iri(resolve(node, about));
        }
        if let Some(id) = node.attribute((RDF, "ID")) {
            return Term::Iri(resolve(node, &format!("#{id}")));
        }
        if let Some(node_id) = node.attribute((RDF, "nodeID")) {
            return Term::Blank(node_id.to_string());
        }
        self.fresh_blank()
    }

    fn property_attributes(&mut self, node: Node, subject: &Term) {
        for attr in node.attributes() {
            match attr.namespace() {
                Some(RDF) if attr.name() == "type" => {
                    self.push(
                        subject.clone(),
                        RDF_TYPE,
                        Term::Iri(resolve(node, attr.value())),
                    );
                }
                Some(RDF | XML) | None => {}
                Some(ns) => {
                    let literal = Literal {
                        value: attr.value().to_string(),
                        lang: language(node),
                        datatype: None,
                    };
                    self.push(
                        subject.clone(),
                        format!("{ns}{}", attr.name()),
                        Term::Literal(literal),
                    );
                }
            }
        }
    }

    fn property_element(&mut self, subject: &Term, node: Node) {
        let predicate = expanded_name(node);

        if let Some(resource) = node.attribute((RDF, "resource")) {
            let object = Term::Iri(resolve(node, resource));
            self.property_attributes(node, &object);
            self.push(subject.clone(), predicate, object);
            return;
        }
        if let Some(node_id) = node.attribute((RDF, "nodeID")) {
            let object = Term::Blank(node_id.to_string());
            self.property_attributes(node, &object);
            self.push(subject.clone(), predicate, object);
            return;
        }

        match node.attribute((RDF, "parseType")) {
            Some("Resource") => {
                let object = self.fresh_blank();
                self.push(subject.clone(), predicate, object.clone());
                for child in node.children().filter(Node::is_element) {
                    self.property_element(&object, child);
                }
                return;
            }
            Some("Literal") => {
                let literal = Literal {
                    value: self.inner_xml(node),
                    lang: None,
                    datatype: Some(RDF_XML_LITERAL.to_string()),
                };
                self.push(subject.clone(), predicate, Term::Literal(literal));
                return;
            }
            Some(other) => {
                log::debug!("Skipping <{}> with rdf:parseType=\"{}\"", predicate, other);
                return;
            }
            None => {}
        }

        if let Some(child) = node.children().find(Node::is_element) {
            let object = self.node_element(child);
            self.push(subject.clone(), predicate, object);
            return;
        }

        let text = text_content(node);
        if text.is_empty() && has_property_attributes(node) {
            let object = self.fresh_blank();
            self.property_attributes(node, &object);
            self.push(subject.clone(), predicate, object);
            return;
        }

        let literal = Literal {
            value: text,
            lang: language(node),
            datatype: node
                .attribute((RDF, "datatype"))
                .map(|datatype| resolve(node, datatype)),
        };
        self.push(subject.clone(), predicate, Term::Literal(literal));
    }

    /// The element's content as written in the source document.
    ///
    /// Children expanded from a DTD entity carry ranges inside the DTD, so
    /// the source slice is only taken when every child lies within the
    /// element. Otherwise only the descendant text is kept.
    fn inner_xml(&self, node: Node) -> String {
        let outer = node.range();
        let in_place = node
            .children()
            .all(|child| child.range().start >= outer.start && child.range().end <= outer.end);

        let source = match (node.first_child(), node.last_child()) {
            (Some(first), Some(last)) if in_place => {
                self.input.get(first.range().start..last.range().end)
            }
            (None, _) | (_, None) => return String::new(),
            _ => None,
        };

        source.map_or_else(
            || {
                node.descendants()
                    .filter(Node::is_text)
                    .filter_map(|n| n.text())
                    .collect()
            },
            str::to_string,
        )
    }

    fn fresh_blank(&mut self) -> Term {
        let id = format!("genid{}", self.next_blank);
        self.next_blank += 1;
        Term::Blank(id)
    }

    fn push(&mut self, subject: Term, predicate: impl Into<String>, object: Term) {
        self.triples.push(Triple {
            subject,
            predicate: predicate.into(),
            object,
        });
    }
}

fn is_rdf(node: Node, local_name: &str) -> bool {
    node.tag_name().namespace() == Some(RDF) && node.tag_name().name() == local_name
}

fn has_subject_attribute(node: Node) -> bool {
    ["about", "ID", "nodeID"]
        .iter()
        .any(|name| node.has_attribute((RDF, *name)))
}

fn has_property_attributes(node: Node) -> bool {
    node.attributes().any(|attr| match attr.namespace() {
        Some(RDF) => attr.name() == "type",
        Some(XML) | None => false,
        Some(_) => true,
    })
}

fn expanded_name(node: Node) -> String {
    let tag = node.tag_name();
    format!("{}{}", tag.namespace().unwrap_or_default(), tag.name())
}

fn text_content(node: Node) -> String {
    node.children()
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .collect()
}

/// The in-scope `xml:lang`, if any.
fn language(node: Node) -> Option<String> {
    node.ancestors()
        .find_map(|n| n.attribute((XML, "lang")))
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
}

/// Resolve `reference` against the in-scope `xml:base`.
fn resolve(node: Node, reference: &str) -> String {
    if is_absolute(reference) {
        return reference.to_string();
    }
    match node.ancestors().find_map(|n| n.attribute((XML, "base"))) {
        Some(base) => join(base, reference),
        None => reference.to_string(),
    }
}

fn is_absolute(reference: &str) -> bool {
    reference.split_once(':').is_some_and(|(scheme, _)| {
        scheme
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

fn join(base: &str, reference: &str) -> String {
    let base = base.split_once('#').map_or(base, |(head, _)| head);
    if reference.is_empty() {
        return base.to_string();
    }
    if reference.starts_with('#') {
        return format!("{base}{reference}");
    }
    if reference.starts_with('/') {
        let authority_end = base
            .find("://")
            .and_then(|scheme_end| {
                base[scheme_end + 3..]
                    .find('/')
                    .map(|offset| scheme_end + 3 + offset)
            })
            .unwrap_or(base.len());
        return format!("{}{}", &base[..authority_end], reference);
    }
    match base.rfind('/') {
        Some(slash) => format!("{}{}", &base[..=slash], reference),
        None => reference.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::vocab;

    fn literal_of<'a>(triples: &'a [Triple], predicate: &str) -> Option<&'a Literal> {
        triples
            .iter()
            .filter(|t| t.predicate == predicate)
            .find_map(|t| match &t.object {
                Term::Literal(literal) => Some(literal),
                _ => None,
            })
    }

    #[test]
    fn test_read_description_with_literals() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:schema="http://schema.org/">
  <rdf:Description rdf:about="http://viaf.org/viaf/314802260">
    <rdf:type rdf:resource="http://schema.org/Person"/>
    <schema:name xml:lang="fr">Charles deTéligny</schema:name>
    <schema:birthDate>1535</schema:birthDate>
  </rdf:Description>
</rdf:RDF>"#;

        let triples = read(xml).unwrap();
        assert_eq!(triples.len(), 3);

        let subject = Term::iri("http://viaf.org/viaf/314802260");
        assert!(triples.iter().all(|t| t.subject == subject));
        assert_eq!(triples[0].predicate, vocab::RDF_TYPE);
        assert_eq!(triples[0].object, Term::iri("http://schema.org/Person"));

        let name = literal_of(&triples, vocab::SCHEMA_NAME).unwrap();
        assert_eq!(name.value, "Charles deTéligny");
        assert_eq!(name.lang.as_deref(), Some("fr"));
    }

    #[test]
    fn test_read_typed_node_element() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:schema="http://schema.org/">
  <schema:Person rdf:about="http://viaf.org/viaf/1">
    <schema:name>Someone</schema:name>
  </schema:Person>
</rdf:RDF>"#;

        let triples = read(xml).unwrap();
        assert_eq!(triples[0].predicate, vocab::RDF_TYPE);
        assert_eq!(triples[0].object, Term::iri("http://schema.org/Person"));
        assert_eq!(
            literal_of(&triples, vocab::SCHEMA_NAME).unwrap().value,
            "Someone"
        );
    }

    #[test]
    fn test_read_property_attributes() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:schema="http://schema.org/">
  <rdf:Description rdf:about="http://viaf.org/viaf/1" schema:name="Attr Name"/>
</rdf:RDF>"#;

        let triples = read(xml).unwrap();
        assert_eq!(triples.len(), 1);
        assert_eq!(
            literal_of(&triples, vocab::SCHEMA_NAME).unwrap().value,
            "Attr Name"
        );
    }

    #[test]
    fn test_read_nested_node_element() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:schema="http://schema.org/"
         xmlns:skos="http://www.w3.org/2004/02/skos/core#">
  <rdf:Description rdf:about="http://viaf.org/viaf/1">
    <schema:sameAs>
      <rdf:Description rdf:about="http://id.loc.gov/authorities/names/n1">
        <skos:prefLabel>Nested Label</skos:prefLabel>
      </rdf:Description>
    </schema:sameAs>
  </rdf:Description>
</rdf:RDF>"#;

        let triples = read(xml).unwrap();
        let link = triples
            .iter()
            .find(|t| t.predicate == "http://schema.org/sameAs")
            .unwrap();
        assert_eq!(link.subject, Term::iri("http://viaf.org/viaf/1"));
        assert_eq!(
            link.object,
            Term::iri("http://id.loc.gov/authorities/names/n1")
        );

        let label = triples
            .iter()
            .find(|t| t.predicate == vocab::SKOS_PREF_LABEL)
            .unwrap();
        assert_eq!(
            label.subject,
            Term::iri("http://id.loc.gov/authorities/names/n1")
        );
    }

    #[test]
    fn test_read_parse_type_resource() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:ex="http://example.org/">
  <rdf:Description rdf:about="http://example.org/a">
    <ex:detail rdf:parseType="Resource">
      <ex:value>inner</ex:value>
    </ex:detail>
  </rdf:Description>
</rdf:RDF>"#;

        let triples = read(xml).unwrap();
        assert_eq!(triples.len(), 2);
        let Term::Blank(blank) = &triples[0].object else {
            panic!("expected blank node, got {:?}", triples[0].object);
        };
        assert_eq!(triples[1].subject, Term::Blank(blank.clone()));
        assert_eq!(triples[1].object.as_literal(), Some("inner"));
    }

    #[test]
    fn test_read_parse_type_literal_keeps_markup() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:ex="http://example.org/">
  <rdf:Description rdf:about="http://example.org/a">
    <ex:note rdf:parseType="Literal"><b>bold</b> text</ex:note>
  </rdf:Description>
</rdf:RDF>"#;

        let triples = read(xml).unwrap();
        let literal = literal_of(&triples, "http://example.org/note").unwrap();
        assert_eq!(literal.value, "<b>bold</b> text");
        assert_eq!(literal.datatype.as_deref(), Some(vocab::RDF_XML_LITERAL));
    }

    #[test]
    fn test_read_parse_type_literal_with_entity_markup() {
        let xml = r#"<?xml version="1.0"?>
<!DOCTYPE rdf:RDF [<!ENTITY e "<b>x</b>">]>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:ex="http://example.org/">
  <rdf:Description rdf:about="http://example.org/a">
    <ex:note rdf:parseType="Literal">a&e;</ex:note>
  </rdf:Description>
</rdf:RDF>"#;

        let triples = read(xml).unwrap();
        let literal = literal_of(&triples, "http://example.org/note").unwrap();
        assert!(literal.value.starts_with('a'));
        assert!(literal.value.contains('x'));
        assert_eq!(literal.datatype.as_deref(), Some(vocab::RDF_XML_LITERAL));
    }

    #[test]
    fn test_read_skips_collections() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:ex="http://example.org/">
  <rdf:Description rdf:about="http://example.org/a">
    <ex:list rdf:parseType="Collection">
      <rdf:Description rdf:about="http://example.org/b"/>
    </ex:list>
    <ex:name>kept</ex:name>
  </rdf:Description>
</rdf:RDF>"#;

        let triples = read(xml).unwrap();
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].object.as_literal(), Some("kept"));
    }

    #[test]
    fn test_read_inherits_language_and_resolves_base() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xml:base="http://viaf.org/viaf/" xml:lang="de">
  <rdf:Description rdf:ID="me">
    <rdfs:label>Beschriftung</rdfs:label>
    <rdfs:seeAlso rdf:resource="42"/>
  </rdf:Description>
</rdf:RDF>"#;

        let triples = read(xml).unwrap();
        assert_eq!(triples[0].subject, Term::iri("http://viaf.org/viaf/#me"));

        let label = literal_of(&triples, vocab::RDFS_LABEL).unwrap();
        assert_eq!(label.lang.as_deref(), Some("de"));

        assert_eq!(triples[1].object, Term::iri("http://viaf.org/viaf/42"));
    }

    #[test]
    fn test_read_datatype() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:schema="http://schema.org/">
  <rdf:Description rdf:about="http://viaf.org/viaf/1">
    <schema:birthDate rdf:datatype="http://www.w3.org/2001/XMLSchema#gYear">1535</schema:birthDate>
  </rdf:Description>
</rdf:RDF>"#;

        let triples = read(xml).unwrap();
        let birth = literal_of(&triples, vocab::SCHEMA_BIRTH_DATE).unwrap();
        assert_eq!(birth.value, "1535");
        assert_eq!(
            birth.datatype.as_deref(),
            Some("http://www.w3.org/2001/XMLSchema#gYear")
        );
    }

    #[test]
    fn test_read_single_node_element_root() {
        let xml = r#"<schema:Person xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:schema="http://schema.org/" rdf:about="http://viaf.org/viaf/7">
  <schema:name>Solo</schema:name>
</schema:Person>"#;

        let triples = read(xml).unwrap();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[1].object.as_literal(), Some("Solo"));
    }

    #[test]
    fn test_read_rejects_html() {
        let html = "<html><head><title>VIAF</title></head><body>Not found</body></html>";
        let err = read(html).unwrap_err();
        assert!(matches!(err, Error::NotRdf(ref root) if root == "html"));
    }

    #[test]
    fn test_read_rejects_malformed_xml() {
        let unclosed = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">"#;
        let err = read(unclosed).unwrap_err();
        assert!(matches!(err, Error::Xml(_)));
    }

    #[test]
    fn test_join_relative_references() {
        assert_eq!(join("http://a.org/x/y", "z"), "http://a.org/x/z");
        assert_eq!(join("http://a.org/x/y#frag", "#id"), "http://a.org/x/y#id");
        assert_eq!(join("http://a.org/x/y", "/root"), "http://a.org/root");
        assert_eq!(join("http://a.org/x/y", ""), "http://a.org/x/y");
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("http://viaf.org/viaf/1"));
        assert!(is_absolute("urn:isbn:123"));
        assert!(!is_absolute("42"));
        assert!(!is_absolute("#me"));
        assert!(!is_absolute("1:2"));
    }
}
