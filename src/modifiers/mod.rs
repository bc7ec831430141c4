//! Modifier vocabularies referenced by the cheatsheet

pub mod containing_scope;
