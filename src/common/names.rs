use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("static pattern"));

/// Placeholder used when an enum's owning name sanitizes to nothing.
pub const FALLBACK_ENUM_NAME: &str = "EnumType";

/// Convert a display name into an Avro record name.
///
/// Every character outside `[A-Za-z0-9]` is stripped and the first
/// remaining character upper-cased. An empty input is returned as is.
pub fn record_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    let cleaned = NON_ALPHANUMERIC.replace_all(name, "");
    capitalize(&cleaned)
}

/// Name for an enum owned by the field (or array item) `owner`.
pub fn enum_name(owner: &str) -> String {
    let name = record_name(owner);
    if name.is_empty() {
        FALLBACK_ENUM_NAME.to_string()
    } else {
        name
    }
}

/// Capitalize first letter
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
