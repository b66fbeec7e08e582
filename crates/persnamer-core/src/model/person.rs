use serde::{Deserialize, Serialize};

use crate::model::ids::Slug;

/// The person attributes pulled out of an authority record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFields {
    /// Preferred display name.
    pub name: String,

    /// Birth date exactly as the record states it.
    pub birth: Option<String>,

    /// Death date exactly as the record states it.
    pub death: Option<String>,

    /// Data-quality warnings, e.g. conflicting dates.
    #[serde(default)]
    pub notes: Vec<String>,
}

impl PersonFields {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth: None,
            death: None,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_birth(mut self, birth: impl Into<String>) -> Self {
        self.birth = Some(birth.into());
        self
    }

    #[must_use]
    pub fn with_death(mut self, death: impl Into<String>) -> Self {
        self.death = Some(death.into());
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[must_use]
    pub fn slug(&self) -> Slug {
        Slug::from_name(&self.name)
    }
}
