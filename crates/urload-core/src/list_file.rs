//! Line-oriented persistence for the URL list.
//!
//! One record per line: the URL alone, or the URL followed by a single space
//! and a JSON object mapping header names to values.

use crate::record::UrlRecord;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read file: {0}")]
    Io(#[from] io::Error),
    #[error("Error parsing line {line}: {message}")]
    Line { line: usize, message: String },
}

/// Serializes a record into its list-file line (no trailing newline).
pub fn to_line(record: &UrlRecord) -> Result<String, serde_json::Error> {
    if record.headers.is_empty() {
        return Ok(record.url.clone());
    }
    let headers = serde_json::to_string(&record.headers)?;
    Ok(format!("{} {}", record.url, headers))
}

/// Parses one non-empty list-file line.
pub fn from_line(line: &str) -> Result<UrlRecord, serde_json::Error> {
    match line.split_once(' ') {
        None => Ok(UrlRecord::new(line)),
        Some((url, rest)) => {
            let headers: BTreeMap<String, String> = serde_json::from_str(rest)?;
            Ok(UrlRecord::with_headers(url, headers))
        }
    }
}

/// Writes `records` to `path`, replacing any existing file.
pub fn save_list(path: &Path, records: &[UrlRecord]) -> io::Result<()> {
    let mut out = io::BufWriter::new(fs::File::create(path)?);
    for record in records {
        let line = to_line(record).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    tracing::debug!(path = %path.display(), count = records.len(), "saved url list");
    Ok(())
}

/// Reads every record from `path`. Blank lines are skipped; the first line
/// that fails to parse aborts the load with its 1-based line number.
pub fn load_list(path: &Path) -> Result<Vec<UrlRecord>, LoadError> {
    let data = fs::read_to_string(path)?;
    let mut records = Vec::new();
    for (i, raw) in data.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let record = from_line(line).map_err(|e| LoadError::Line {
            line: i + 1,
            message: e.to_string(),
        })?;
        records.push(record);
    }
    tracing::debug!(path = %path.display(), count = records.len(), "loaded url list");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<UrlRecord> {
        let mut headers = BTreeMap::new();
        headers.insert("X-Test".to_string(), "abc 123".to_string());
        headers.insert("Referer".to_string(), "http://ref.com".to_string());
        let mut unicode = BTreeMap::new();
        unicode.insert("X-Ü".to_string(), "\u{ff}\u{80}\u{e9}".to_string());
        vec![
            UrlRecord::new("http://example.com"),
            UrlRecord::with_headers("https://foo.com/bar", headers),
            UrlRecord::with_headers("https://üñîçødë.com", unicode),
        ]
    }

    #[test]
    fn save_then_load_is_lossless() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        let records = sample();
        save_list(&path, &records).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);

        let loaded = load_list(&path).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn bare_url_is_written_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bare.txt");
        save_list(&path, &[UrlRecord::new("http://bare.com")]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "http://bare.com\n");
    }

    #[test]
    fn header_line_format() {
        let r = UrlRecord::with_referer("http://a/x.png", "http://a/");
        assert_eq!(to_line(&r).unwrap(), r#"http://a/x.png {"Referer":"http://a/"}"#);
        assert_eq!(from_line(&to_line(&r).unwrap()).unwrap(), r);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gaps.txt");
        fs::write(&path, "http://a\n\n   \nhttp://b\n").unwrap();
        let loaded = load_list(&path).unwrap();
        assert_eq!(loaded, vec![UrlRecord::new("http://a"), UrlRecord::new("http://b")]);
    }

    #[test]
    fn bad_json_names_the_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "http://ok\nnot a url {bad json}\n").unwrap();
        match load_list(&path) {
            Err(LoadError::Line { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected line error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_list(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert!(err.to_string().starts_with("Could not read file"));
    }
}
