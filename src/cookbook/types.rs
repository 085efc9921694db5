//! # Cookbook Types
//!
//! The validated [`Entry`] record and the raw [`EntryRecord`] it is built
//! from when read out of a source document.

use crate::errors::CookbookError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Required fields of an entry, named as they appear in source documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Name,
    Rationale,
    BeforeCode,
    AfterCode,
    Benefits,
}

impl EntryField {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryField::Name => "name",
            EntryField::Rationale => "rationale",
            EntryField::BeforeCode => "beforeCode",
            EntryField::AfterCode => "afterCode",
            EntryField::Benefits => "benefits",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documented refactoring technique.
///
/// Only constructible through [`Entry::new`] (or [`EntryRecord::into_entry`]),
/// so every value holds a non-blank name, rationale and code pair and at
/// least one non-blank benefit. Code is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    name: String,
    rationale: String,
    before_code: String,
    after_code: String,
    benefits: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        rationale: impl Into<String>,
        before_code: impl Into<String>,
        after_code: impl Into<String>,
        benefits: Vec<String>,
    ) -> Result<Self, CookbookError> {
        EntryRecord {
            name: Some(name.into()),
            rationale: Some(rationale.into()),
            before_code: Some(before_code.into()),
            after_code: Some(after_code.into()),
            benefits: Some(benefits),
            language: None,
        }
        .into_entry(1)
    }

    /// Set the code language tag, overriding the renderer default
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        self.language = (!language.trim().is_empty()).then(|| language.trim().to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    pub fn before_code(&self) -> &str {
        &self.before_code
    }

    pub fn after_code(&self) -> &str {
        &self.after_code
    }

    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// A technique record as written in a source document.
///
/// Every field is optional here so that a missing field surfaces as
/// [`CookbookError::MalformedEntry`] naming it, rather than as a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub rationale: Option<String>,

    #[serde(default, alias = "before_code")]
    pub before_code: Option<String>,

    #[serde(default, alias = "after_code")]
    pub after_code: Option<String>,

    #[serde(default)]
    pub benefits: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl EntryRecord {
    /// Validate the record; `position` is its 1-based index in the source,
    /// used to identify it when the name itself is unusable.
    pub fn into_entry(self, position: usize) -> Result<Entry, CookbookError> {
        let label = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("record #{position}"));
        let malformed = |field| CookbookError::MalformedEntry {
            entry: label.clone(),
            field,
        };

        // The name must yield a non-empty anchor.
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| n.chars().any(char::is_alphanumeric))
            .ok_or_else(|| malformed(EntryField::Name))?;
        let rationale = self
            .rationale
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .ok_or_else(|| malformed(EntryField::Rationale))?;
        let before_code = self
            .before_code
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| malformed(EntryField::BeforeCode))?;
        let after_code = self
            .after_code
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| malformed(EntryField::AfterCode))?;
        let benefits = self
            .benefits
            .filter(|b| !b.is_empty() && b.iter().all(|item| !item.trim().is_empty()))
            .ok_or_else(|| malformed(EntryField::Benefits))?
            .into_iter()
            .map(|b| b.trim().to_string())
            .collect();

        let entry = Entry {
            name,
            rationale,
            before_code,
            after_code,
            benefits,
            language: None,
        };
        Ok(match self.language {
            Some(language) => entry.with_language(language),
            None => entry,
        })
    }
}
