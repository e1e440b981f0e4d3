//! Lexical path canonicalization for font identity.
//!
//! Nothing here touches the filesystem: symlinks are not resolved and paths
//! are not required to exist.

/// Canonicalize a font path lexically.
///
/// - Backslashes become forward slashes.
/// - Repeated separators collapse to one.
/// - `.` segments and trailing separators are dropped (the root is kept).
/// - `..` segments are preserved, since folding them needs the filesystem.
pub fn canonicalize(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');
    let joined = unified
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/");

    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Case-insensitive identity key for a font path.
///
/// Two records whose keys are equal are the same font file.
pub fn identity_key(path: &str) -> String {
    canonicalize(path).to_lowercase()
}
