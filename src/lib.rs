//! Scope Cheatsheet
//!
//! Builds the "Scopes" section of a voice-command cheatsheet: every spoken form
//! a user can say to select a containing scope, paired with a human-readable
//! description.
//!
//! ## Layers
//!
//! 1. **Lists**: named spoken-form lists (`"funk"` -> `namedFunction`), built in
//!    or overridden from a TOML file.
//! 2. **Sections**: accessors such as [`cheatsheet::sections::scopes::get_scopes`]
//!    that turn lists into display labels.
//! 3. **Rendering**: Markdown or JSON output of the assembled cheatsheet.

pub mod cheatsheet;
pub mod config;
pub mod lists;
pub mod modifiers;

pub use cheatsheet::sections::scopes::{ScopeLabels, get_scopes, get_scopes_from};
pub use lists::{ListError, ListRegistry, ListSource};
