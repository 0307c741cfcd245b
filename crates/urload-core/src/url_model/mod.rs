//! URL modeling and filename derivation.
//!
//! Turns a URL plus a user filename template into a relative path that is
//! safe to create under the session directory: never absolute, never
//! containing `..`.

mod path;
mod sanitize;
mod template;

pub use path::{split_url, UrlParts, DEFAULT_FILENAME, FALLBACK_HOST};
pub use sanitize::{sanitize_dirname, sanitize_relative_path};
pub use template::{FilenameTemplate, Placeholder, TemplateContext, TemplateError};

/// Template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "{index:04d}_{filename}";

impl TemplateContext {
    /// Derives the per-URL placeholder values.
    ///
    /// - `filename`: last path segment without query text, decoded, reduced
    ///   to its final component; `index.html` when the path ends in `/`
    /// - `basename` / `ext`: `filename` split at the first `.`
    /// - `dirname`: decoded directory with `.`/`..`/empty segments dropped
    pub fn from_url(url: &str, timestamp: &str, index: u64) -> Self {
        let parts = split_url(url);

        let raw_name = if parts.last_segment.is_empty() {
            DEFAULT_FILENAME
        } else {
            parts.last_segment.as_str()
        };
        let raw_name = raw_name.split('?').next().unwrap_or_default();
        let decoded = path::percent_decode(raw_name);
        let filename = path::last_component(&decoded).to_string();

        let (basename, ext) = match filename.split_once('.') {
            Some((base, ext)) => (base.to_string(), ext.split('?').next().unwrap_or_default().to_string()),
            None => (filename.clone(), String::new()),
        };

        let dirname = sanitize_dirname(&path::percent_decode(&parts.dir));

        TemplateContext {
            timestamp: timestamp.to_string(),
            host: parts.host,
            dirname,
            filename,
            basename,
            ext,
            index,
        }
    }
}

/// Renders `template` for `url` and sanitizes the result into a safe
/// relative path.
///
/// # Examples
///
/// - `{filename}` + `http://example.com/foo/bar.txt?query=1` → `bar.txt`
/// - `{dirname}/{filename}` + `http://example.com/foo/%2E%2E/bar.txt` → `foo/bar.txt`
/// - `{index:04d}_{filename}` + `http://example.com/` (index 3) → `0003_index.html`
pub fn build_filename(template: &FilenameTemplate, timestamp: &str, url: &str, index: u64) -> String {
    let ctx = TemplateContext::from_url(url, timestamp, index);
    sanitize_relative_path(&template.render(&ctx))
}
