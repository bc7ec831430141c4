//! Spoken-form list lookup
//!
//! A spoken-form list maps what the user says to an identifier. The cheatsheet
//! shows each spoken form next to a description of its identifier.

mod readable;
mod registry;

pub use readable::make_readable;
pub use registry::ListRegistry;

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

/// Spoken form -> identifier
pub type SpokenFormList = BTreeMap<String, String>;

/// Spoken form -> display label
pub type LabelMap = BTreeMap<String, String>;

/// Error type for list lookups
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ListError {
    #[error("Unknown list: {0}")]
    UnknownList(String),
}

/// Source of named spoken-form lists.
///
/// Implementors only have to resolve raw lists; label derivation is shared.
pub trait ListSource {
    /// Get the raw spoken-form list registered under `name`
    fn get_raw_list(&self, name: &str) -> Result<&SpokenFormList, ListError>;

    /// Label every spoken form in one list.
    ///
    /// Identifiers found in `descriptions` use that text; all others fall back
    /// to [`make_readable`].
    fn get_list(
        &self,
        name: &str,
        descriptions: &HashMap<&str, &str>,
    ) -> Result<LabelMap, ListError> {
        let raw = self.get_raw_list(name)?;
        Ok(raw
            .iter()
            .map(|(spoken_form, id)| {
                let description = descriptions
                    .get(id.as_str())
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| make_readable(id));
                (spoken_form.clone(), description)
            })
            .collect())
    }

    /// Label several lists and merge them, later lists winning on duplicate spoken forms
    fn get_lists(
        &self,
        names: &[&str],
        descriptions: &HashMap<&str, &str>,
    ) -> Result<LabelMap, ListError> {
        let mut labels = LabelMap::new();
        for name in names {
            let list = self.get_list(name, descriptions)?;
            debug!(list = %name, entries = list.len(), "Resolved spoken-form list");
            labels.extend(list);
        }
        Ok(labels)
    }
}
