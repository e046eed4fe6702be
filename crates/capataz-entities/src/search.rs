//! Helpers for the server's scoped-search query syntax

/// Quote a term for embedding in a scoped-search query.
///
/// Backslashes and double quotes inside the term are escaped, and the whole
/// term is wrapped in double quotes, so arbitrary names survive the trip
/// through `search=name=...`.
pub fn escape_search(term: &str) -> String {
    let escaped = term.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Build a `field=value` scoped-search expression with the value quoted
pub fn search_eq(field: &str, value: &str) -> String {
    format!("{}={}", field, escape_search(value))
}
