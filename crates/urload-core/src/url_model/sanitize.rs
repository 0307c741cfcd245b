//! Traversal-safe relative paths.

/// Makes a rendered filename safe to join under the session directory.
///
/// - Backslashes become `/`
/// - Every `..` substring is removed, repeatedly, until none is left
/// - Leading `/` characters are stripped
///
/// The `..` removal is a plain substring rule, not a path normalizer:
/// `a....b` becomes `ab`. Stripping leading slashes last keeps the result
/// stable under repeated application.
pub fn sanitize_relative_path(raw: &str) -> String {
    let mut out = raw.replace('\\', "/");
    while out.contains("..") {
        out = out.replace("..", "");
    }
    out.trim_start_matches('/').to_string()
}

/// Cleans the directory part of a URL path: decoded, separators normalized,
/// empty, `.` and `..` segments dropped, no leading slash.
pub fn sanitize_dirname(decoded: &str) -> String {
    decoded
        .replace('\\', "/")
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != "." && *seg != "..")
        .collect::<Vec<_>>()
        .join("/")
}
