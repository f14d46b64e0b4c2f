//! Path planning: relative paths and URL-safe path strings.
//!
//! Markers embed computed paths into generated markup, so the output must be
//! forward-slash separated and percent-encoded regardless of the host path
//! separator convention. Both helpers are pure.

use std::path::{Component, Path, PathBuf};

/// Compute `target` relative to `from_dir`.
///
/// Both paths are compared component-wise; the shared prefix is dropped and
/// every remaining `from_dir` component becomes a `..` hop. Neither path is
/// touched on disk. Paths that share no prefix (e.g. different roots) fall
/// back to climbing all the way out of `from_dir`.
pub fn relative_to(target: &Path, from_dir: &Path) -> PathBuf {
    let target_parts: Vec<Component<'_>> = target.components().collect();
    let from_parts: Vec<Component<'_>> = from_dir.components().collect();

    let shared = target_parts
        .iter()
        .zip(&from_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in shared..from_parts.len() {
        rel.push("..");
    }
    for part in &target_parts[shared..] {
        rel.push(part);
    }

    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}

/// Render a path as a URL-style string: forward slashes between components,
/// each component percent-encoded where necessary.
pub fn url_path(path: &Path) -> String {
    let segments: Vec<String> = path
        .components()
        .map(|c| match c {
            Component::ParentDir => "..".to_owned(),
            Component::CurDir => ".".to_owned(),
            other => encode_segment(&other.as_os_str().to_string_lossy()),
        })
        .collect();
    segments.join("/")
}

/// Percent-encode one path segment.
///
/// Unreserved characters (RFC 3986) pass through; everything else becomes
/// `%XX` per UTF-8 byte. The separator never appears inside a segment, so
/// it needs no special casing here.
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
