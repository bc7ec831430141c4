//! Containing scope vocabulary
//!
//! A containing scope is the syntactic region around the cursor that a command
//! expands to ("funk" selects the enclosing named function). Each list maps a
//! spoken form to a scope identifier.

/// Names of the spoken-form lists that together make up the scope vocabulary.
pub const SCOPE_LIST_NAMES: &[&str] = &["scope_type", "subtoken_scope_type"];

/// Default spoken forms for syntactic scopes: spoken form -> scope identifier
pub const DEFAULT_SCOPE_TYPES: &[(&str, &str)] = &[
    ("arg", "argumentOrParameter"),
    ("attribute", "attribute"),
    ("block", "paragraph"),
    ("call", "functionCall"),
    ("class", "class"),
    ("class name", "className"),
    ("comment", "comment"),
    ("condition", "condition"),
    ("element", "xmlElement"),
    ("end tag", "xmlEndTag"),
    ("file", "document"),
    ("funk", "namedFunction"),
    ("funk name", "functionName"),
    ("if state", "ifStatement"),
    ("item", "collectionItem"),
    ("key", "collectionKey"),
    ("lambda", "anonymousFunction"),
    ("line", "line"),
    ("link", "url"),
    ("list", "list"),
    ("map", "dictionary"),
    ("name", "name"),
    ("paint", "nonWhitespaceSequence"),
    ("regex", "regularExpression"),
    ("section", "section"),
    ("selector", "selector"),
    ("start tag", "xmlStartTag"),
    ("state", "statement"),
    ("string", "string"),
    ("tags", "xmlBothTags"),
    ("token", "token"),
    ("type", "type"),
    ("value", "value"),
];

/// Default spoken forms for scopes smaller than a token
pub const DEFAULT_SUBTOKEN_SCOPE_TYPES: &[(&str, &str)] =
    &[("char", "character"), ("word", "word")];

/// Built-in lists keyed by list name
pub fn default_lists() -> impl Iterator<Item = (&'static str, &'static [(&'static str, &'static str)])> {
    [
        ("scope_type", DEFAULT_SCOPE_TYPES),
        ("subtoken_scope_type", DEFAULT_SUBTOKEN_SCOPE_TYPES),
    ]
    .into_iter()
}
