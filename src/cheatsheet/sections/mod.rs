//! Cheatsheet section accessors

pub mod scopes;
