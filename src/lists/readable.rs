//! Default display labels for identifiers

use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel case regex"));

const PRIVATE_PREFIX: &str = "private.";

/// Turn an identifier into sentence-case text.
///
/// `namedFunction` becomes `Named function`, dots become spaces, and a
/// `private.` prefix is dropped in favour of a ` (private)` suffix.
pub fn make_readable(id: &str) -> String {
    let (id, is_private) = match id.strip_prefix(PRIVATE_PREFIX) {
        Some(rest) => (rest, true),
        None => (id, false),
    };

    let spaced = id.replace('.', " ");
    let words = CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2").to_lowercase();

    let mut chars = words.chars();
    let mut readable = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    if is_private {
        readable.push_str(" (private)");
    }
    readable
}
