//! Scopes section
//!
//! Lists every containing scope a user can select, plus the paired-delimiter
//! pseudo-scope which has no spoken-form list of its own.

use std::collections::HashMap;

use crate::lists::{LabelMap, ListError, ListRegistry, ListSource};
use crate::modifiers::containing_scope::SCOPE_LIST_NAMES;

/// Selector token -> display label
pub type ScopeLabels = LabelMap;

/// Token standing in for any paired delimiter in the cheatsheet
pub const PAIRED_DELIMITER_TOKEN: &str = "<P>";

const PAIRED_DELIMITER_LABEL: &str = "Paired delimiter";

/// Scope labels from the built-in lists
pub fn get_scopes() -> Result<ScopeLabels, ListError> {
    get_scopes_from(ListRegistry::builtin())
}

/// Scope labels from any list source. Lookup errors are returned unchanged.
pub fn get_scopes_from(lists: &impl ListSource) -> Result<ScopeLabels, ListError> {
    let descriptions = HashMap::from([("argumentOrParameter", "Argument")]);

    let mut scopes = lists.get_lists(SCOPE_LIST_NAMES, &descriptions)?;
    scopes.insert(
        PAIRED_DELIMITER_TOKEN.to_string(),
        PAIRED_DELIMITER_LABEL.to_string(),
    );
    Ok(scopes)
}
