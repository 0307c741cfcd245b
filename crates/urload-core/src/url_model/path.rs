//! Host, directory and filename extraction from a URL.

use url::{Host, Url};

/// Host used when the URL has none (or cannot be parsed).
pub const FALLBACK_HOST: &str = "localhost";

/// Filename used when the URL path has no final segment.
pub const DEFAULT_FILENAME: &str = "index.html";

/// The raw pieces of a URL that filename templates draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub host: String,
    /// Directory portion of the path, still percent-encoded, no trailing `/`.
    pub dir: String,
    /// Final path segment, still percent-encoded; empty when the path ends in `/`.
    pub last_segment: String,
}

/// Splits `url` into host, directory and final segment.
///
/// The host comes from the parsed URL. The path is taken from the raw text,
/// so `.` and `..` segments are kept as written for the caller to drop.
/// Strings that do not parse as absolute URLs are treated as a bare path on
/// [`FALLBACK_HOST`].
pub fn split_url(url: &str) -> UrlParts {
    let (host, path) = match Url::parse(url) {
        Ok(parsed) => {
            let host = match parsed.host() {
                Some(Host::Domain(d)) if !d.is_empty() => d.to_string(),
                Some(Host::Ipv4(addr)) => addr.to_string(),
                Some(Host::Ipv6(addr)) => addr.to_string(),
                _ => FALLBACK_HOST.to_string(),
            };
            (host, raw_path(url))
        }
        Err(_) => (FALLBACK_HOST.to_string(), strip_query(url)),
    };
    let path = if path.is_empty() { "/".to_string() } else { path };
    let (dir, last) = match path.rsplit_once('/') {
        Some((dir, last)) => (dir.to_string(), last.to_string()),
        None => (String::new(), path),
    };
    UrlParts {
        host,
        dir,
        last_segment: last,
    }
}

/// Path text of an absolute URL exactly as written: scheme and authority
/// removed, query and fragment cut.
fn raw_path(url: &str) -> String {
    let rest = match url.split_once("://") {
        Some((_, rest)) => {
            let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
            &rest[end..]
        }
        None => url.split_once(':').map_or(url, |(_, rest)| rest),
    };
    strip_query(rest)
}

fn strip_query(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].to_string()
}

/// Final path component of an already-decoded name, ignoring empty and `.`
/// components (a decoded `%2F` can smuggle a separator into a segment).
pub(super) fn last_component(name: &str) -> &str {
    name.split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .last()
        .unwrap_or("")
}

/// Percent-decodes `input`, replacing invalid UTF-8 sequences.
pub(super) fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            let high = bytes.get(i + 1).copied().and_then(hex_digit);
            let low = bytes.get(i + 2).copied().and_then(hex_digit);
            if let (Some(high), Some(low)) = (high, low) {
                out.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        out.push(b);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_host_dir_and_segment() {
        let parts = split_url("http://Example.com/a/b/file.deb?x=1");
        assert_eq!(parts.host, "example.com");
        assert_eq!(parts.dir, "/a/b");
        assert_eq!(parts.last_segment, "file.deb");
    }

    #[test]
    fn trailing_slash_has_empty_segment() {
        assert_eq!(split_url("http://example.com/foo/").last_segment, "");
        assert_eq!(split_url("http://example.com").last_segment, "");
    }

    #[test]
    fn dot_segments_are_kept_as_written() {
        assert_eq!(split_url("http://h/foo/../../evil.txt").dir, "/foo/../..");
        assert_eq!(split_url("http://h/a/%2E%2E/b/c.txt").dir, "/a/%2E%2E/b");
        assert_eq!(split_url("http://h/a/%2E%2E/b/c.txt").last_segment, "c.txt");
    }

    #[test]
    fn raw_path_cuts_authority_and_query() {
        assert_eq!(raw_path("http://user@h:80/a/b?x=/y#z"), "/a/b");
        assert_eq!(raw_path("http://h?x=1"), "");
        assert_eq!(raw_path("https://h/a#frag/x"), "/a");
        assert_eq!(raw_path("mailto:someone@x"), "someone@x");
    }

    #[test]
    fn ip_hosts() {
        assert_eq!(split_url("http://127.0.0.1:8080/x").host, "127.0.0.1");
        assert_eq!(split_url("http://[::1]/x").host, "::1");
    }

    #[test]
    fn unparseable_input_falls_back_to_localhost() {
        let parts = split_url("just/a/path.txt?q=1");
        assert_eq!(parts.host, FALLBACK_HOST);
        assert_eq!(parts.dir, "just/a");
        assert_eq!(parts.last_segment, "path.txt");
    }

    #[test]
    fn decode_handles_bad_escapes() {
        assert_eq!(percent_decode("foo%20space.txt"), "foo space.txt");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("caf%C3%A9"), "café");
    }

    #[test]
    fn last_component_skips_separators() {
        assert_eq!(last_component("/bar.txt"), "bar.txt");
        assert_eq!(last_component("a/."), "a");
        assert_eq!(last_component("/"), "");
        assert_eq!(last_component(".."), "..");
    }
}
