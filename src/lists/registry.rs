//! In-memory list registry

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use super::{ListError, ListSource, SpokenFormList};
use crate::config::ListsConfig;
use crate::modifiers::containing_scope;

static BUILTIN: Lazy<ListRegistry> = Lazy::new(|| {
    let mut registry = ListRegistry::default();
    for (name, entries) in containing_scope::default_lists() {
        registry.insert(
            name,
            entries
                .iter()
                .map(|(spoken, id)| (spoken.to_string(), id.to_string()))
                .collect(),
        );
    }
    registry
});

/// Spoken-form lists keyed by list name
#[derive(Debug, Clone, Default)]
pub struct ListRegistry {
    lists: HashMap<String, SpokenFormList>,
}

impl ListRegistry {
    /// The built-in lists, shared process-wide
    pub fn builtin() -> &'static ListRegistry {
        &BUILTIN
    }

    /// Built-in lists with the user's lists layered on top.
    ///
    /// A configured list replaces the built-in list of the same name entirely,
    /// so a user can retire a spoken form as well as rename it.
    pub fn from_config(config: &ListsConfig) -> Self {
        let mut registry = Self::builtin().clone();
        for (name, list) in &config.lists {
            debug!(list = %name, entries = list.len(), "Overriding list from config");
            registry.insert(name, list.clone());
        }
        registry
    }

    /// Register or replace a list
    pub fn insert(&mut self, name: &str, list: SpokenFormList) -> Option<SpokenFormList> {
        self.lists.insert(name.to_string(), list)
    }

    /// Names of all registered lists, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.lists.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ListSource for ListRegistry {
    fn get_raw_list(&self, name: &str) -> Result<&SpokenFormList, ListError> {
        self.lists
            .get(name)
            .ok_or_else(|| ListError::UnknownList(name.to_string()))
    }
}
