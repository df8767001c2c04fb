//! Object key generation
//!
//! Keys are `<uuid-v4>.<ext>` where the extension is carried over from the
//! original filename. Uniqueness comes from UUID entropy, not from content:
//! uploading the same bytes twice yields two distinct objects.

use uuid::Uuid;

/// Generate a unique storage key, preserving the extension of the original
/// filename. A filename without an extension (or no filename at all) yields
/// a bare UUID with no trailing dot.
pub fn object_key(original_filename: Option<&str>) -> String {
    let id = Uuid::new_v4();

    match original_filename.and_then(extension) {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

/// Substring after the last `.`, if any. Leading-dot names like `.env` count
/// as having the extension `env`, matching plain rsplit semantics.
fn extension(filename: &str) -> Option<&str> {
    match filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}
