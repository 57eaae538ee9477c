use serde_json::Value;
use xxhash_rust::xxh64::xxh64;

/// Fingerprint a JSON document: xxh64 over its compact serialization,
/// as 16 lowercase hex digits.
///
/// Whitespace in the original text does not affect the result; key order does.
pub fn fingerprint(document: &Value) -> String {
    let compact = document.to_string();
    format!("{:016x}", xxh64(compact.as_bytes(), 0))
}
