use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// Prefix shared by every person slug.
const SLUG_PREFIX: &str = "pers";

/// Placeholder used when a slug component normalizes to nothing.
const EMPTY_COMPONENT: &str = "x";

/// A VIAF authority number, e.g. `314802260`.
///
/// The value is used verbatim in the record URL and in the `<idno>` of the
/// authority entry, so it is restricted to ASCII alphanumerics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViafId(String);

impl ViafId {
    /// Parse an identifier, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIdentifier`] when the trimmed value is empty or
    /// contains anything other than ASCII letters and digits.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidIdentifier(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ViafId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ViafId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ViafId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A TEI `xml:id` for a person, shaped `pers-<family>-<initial>`.
///
/// Derived from the display name alone: the last whitespace-separated token
/// is the family name, the first token supplies the given-name initial.
/// Both parts are lower-cased and folded to ASCII (diacritics dropped, only
/// letters, digits and hyphens kept).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let tokens: Vec<&str> = name.split_whitespace().collect();
        let (given, family) = match tokens.as_slice() {
            [] => ("", ""),
            [only] => (*only, *only),
            [first, .., last] => (*first, *last),
        };

        let family = fold_component(family);
        let initial = given
            .chars()
            .next()
            .and_then(|c| first_alphanumeric(&fold_component(&c.to_string())))
            .or_else(|| first_alphanumeric(&family))
            .map_or_else(|| EMPTY_COMPONENT.to_string(), |c| c.to_string());
        let family = if family.is_empty() {
            EMPTY_COMPONENT.to_string()
        } else {
            family
        };

        Self(format!("{SLUG_PREFIX}-{family}-{initial}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The same-document reference to this slug, i.e. `#` followed by the id.
    #[must_use]
    pub fn fragment_ref(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn fold_component(token: &str) -> String {
    let folded: String = token
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    folded.trim_matches('-').to_string()
}

fn first_alphanumeric(s: &str) -> Option<char> {
    s.chars().find(char::is_ascii_alphanumeric)
}
