//! # Cookbook Catalog
//!
//! Ordered, name-unique collection of refactoring entries.

use super::types::Entry;
use crate::errors::CookbookError;
use std::collections::HashMap;
use tracing::debug;

/// Manages the entries of a cookbook in presentation order.
///
/// Populated through [`Catalog::add`] and then only read; rendering takes
/// `&Catalog`, so a built catalog is effectively frozen.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Entries in insertion order
    entries: Vec<Entry>,
    /// Map of technique name to position in `entries`
    index: HashMap<String, usize>,
    /// Title carried by the source document, if any
    title: Option<String>,
    /// Introduction carried by the source document, if any
    introduction: Option<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, rejecting a name that is already present.
    ///
    /// On error the catalog is left unchanged.
    pub fn add(&mut self, entry: Entry) -> Result<(), CookbookError> {
        if self.index.contains_key(entry.name()) {
            return Err(CookbookError::DuplicateName(entry.name().to_string()));
        }

        debug!("Added technique '{}' at position {}", entry.name(), self.entries.len());
        self.index.insert(entry.name().to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Get an entry by technique name
    pub fn get(&self, name: &str) -> Result<&Entry, CookbookError> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| CookbookError::NotFound(name.to_string()))
    }

    /// Entries in insertion order. Call again to restart.
    pub fn all(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Technique names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(Entry::name).collect()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn introduction(&self) -> Option<&str> {
        self.introduction.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_introduction(&mut self, introduction: impl Into<String>) {
        self.introduction = Some(introduction.into());
    }

    /// Get a plain-text summary of the catalog for display
    pub fn summary(&self) -> String {
        let mut summary = format!("Refactoring Cookbook: {} techniques\n", self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            summary.push_str(&format!(
                "  {}. {} ({} benefits)\n",
                i + 1,
                entry.name(),
                entry.benefits().len()
            ));
        }
        summary
    }
}
