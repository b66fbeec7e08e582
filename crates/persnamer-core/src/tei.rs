//! TEI fragment rendering.
//!
//! Produces the two fragments a TEI edition needs for one person: the
//! `<person>` entry that lives in the authority file (the personography)
//! and the `<persName ref="#...">` tag used inline in the transcription.
//! The annotation's `ref` is built from the same [`Slug`] as the entry's
//! `xml:id`, so the pair always points at each other.

use crate::model::{PersonFields, Slug, ViafId};

const INDENT: &str = "  ";

/// A `<person>` element for the authority file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityEntry<'a> {
    pub id: &'a ViafId,
    pub slug: &'a Slug,
    pub fields: &'a PersonFields,
}

impl<'a> AuthorityEntry<'a> {
    #[must_use]
    pub fn new(id: &'a ViafId, slug: &'a Slug, fields: &'a PersonFields) -> Self {
        Self { id, slug, fields }
    }

    /// Serialize as an indented XML element.
    ///
    /// `birth` and `death` are only written when present; each note becomes
    /// a `<note type="warning">` after the `idno`.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut lines = vec![format!(
            r#"<person xml:id="{}">"#,
            escape(self.slug.as_str())
        )];
        lines.push(child("persName", "", &self.fields.name));
        if let Some(birth) = &self.fields.birth {
            lines.push(child("birth", "", birth));
        }
        if let Some(death) = &self.fields.death {
            lines.push(child("death", "", death));
        }
        lines.push(child("idno", r#" type="VIAF""#, self.id.as_str()));
        for note in &self.fields.notes {
            lines.push(child("note", r#" type="warning""#, note));
        }
        lines.push("</person>".to_string());
        lines.join("\n")
    }
}

/// An inline `<persName>` pointing at an [`AuthorityEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationTag<'a> {
    pub slug: &'a Slug,
    pub name: &'a str,
}

impl<'a> AnnotationTag<'a> {
    #[must_use]
    pub fn new(slug: &'a Slug, name: &'a str) -> Self {
        Self { slug, name }
    }

    #[must_use]
    pub fn to_xml(&self) -> String {
        format!(
            r#"<persName ref="{}">{}</persName>"#,
            escape(&self.slug.fragment_ref()),
            escape(self.name)
        )
    }
}

/// Render the authority entry and the annotation tag for one person.
#[must_use]
pub fn render(id: &ViafId, slug: &Slug, fields: &PersonFields) -> (String, String) {
    let authority = AuthorityEntry::new(id, slug, fields).to_xml();
    let annotation = AnnotationTag::new(slug, &fields.name).to_xml();
    (authority, annotation)
}

fn child(tag: &str, attrs: &str, text: &str) -> String {
    format!("{INDENT}<{tag}{attrs}>{}</{tag}>", escape(text))
}

/// Escape character data and attribute values.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teligny() -> (ViafId, PersonFields) {
        let id = ViafId::parse("314802260").unwrap();
        let fields = PersonFields::new("Charles deTéligny")
            .with_birth("1535")
            .with_death("1572-08-24");
        (id, fields)
    }

    #[test]
    fn test_render_authority_entry() {
        let (id, fields) = teligny();
        let slug = fields.slug();
        let (authority, _) = render(&id, &slug, &fields);

        let expected = "<person xml:id=\"pers-deteligny-c\">\n  \
                        <persName>Charles deTéligny</persName>\n  \
                        <birth>1535</birth>\n  \
                        <death>1572-08-24</death>\n  \
                        <idno type=\"VIAF\">314802260</idno>\n\
                        </person>";
        assert_eq!(authority, expected);
    }

    #[test]
    fn test_render_annotation_tag() {
        let (id, fields) = teligny();
        let slug = fields.slug();
        let (_, annotation) = render(&id, &slug, &fields);
        assert_eq!(
            annotation,
            r##"<persName ref="#pers-deteligny-c">Charles deTéligny</persName>"##
        );
    }

    #[test]
    fn test_annotation_ref_matches_authority_id() {
        let (id, fields) = teligny();
        let slug = fields.slug();
        let (authority, annotation) = render(&id, &slug, &fields);

        let xml_id = authority
            .split("xml:id=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        let reference = annotation
            .split("ref=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();

        assert_eq!(reference.strip_prefix('#'), Some(xml_id));
    }

    #[test]
    fn test_render_emits_exactly_one_element_each() {
        let (id, fields) = teligny();
        let slug = fields.slug();
        let (authority, annotation) = render(&id, &slug, &fields);

        assert_eq!(authority.matches("<person ").count(), 1);
        assert_eq!(authority.matches("</person>").count(), 1);
        assert_eq!(annotation.matches("<persName ").count(), 1);
        assert_eq!(annotation.matches("</persName>").count(), 1);
    }

    #[test]
    fn test_render_omits_absent_dates() {
        let id = ViafId::parse("12345").unwrap();
        let fields = PersonFields::new("Anonymous Scribe");
        let slug = fields.slug();
        let (authority, _) = render(&id, &slug, &fields);

        assert!(!authority.contains("<birth"));
        assert!(!authority.contains("<death"));
        assert!(authority.contains(r#"<idno type="VIAF">12345</idno>"#));
    }

    #[test]
    fn test_render_only_death_date() {
        let id = ViafId::parse("12345").unwrap();
        let fields = PersonFields::new("Gaspard de Coligny").with_death("1572");
        let slug = fields.slug();
        let (authority, _) = render(&id, &slug, &fields);

        assert!(!authority.contains("<birth"));
        assert!(authority.contains("  <death>1572</death>\n"));
    }

    #[test]
    fn test_render_notes_after_idno() {
        let (id, fields) = teligny();
        let fields = fields.with_note("Multiple birth dates: 1535; 1536");
        let slug = fields.slug();
        let (authority, _) = render(&id, &slug, &fields);

        let idno = authority.find("<idno").unwrap();
        let note = authority
            .find(r#"<note type="warning">Multiple birth dates: 1535; 1536</note>"#)
            .unwrap();
        assert!(note > idno);
    }

    #[test]
    fn test_render_escapes_markup() {
        let id = ViafId::parse("1").unwrap();
        let fields = PersonFields::new("Tom & \"Jerry\" <Cat>");
        let slug = fields.slug();
        let (authority, annotation) = render(&id, &slug, &fields);

        assert!(authority.contains("<persName>Tom &amp; &quot;Jerry&quot; &lt;Cat&gt;</persName>"));
        assert!(annotation.ends_with(">Tom &amp; &quot;Jerry&quot; &lt;Cat&gt;</persName>"));
    }
}
