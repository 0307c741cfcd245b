//! Per-run session directory and download counter.
//!
//! Each run downloads into a fresh four-digit numbered directory under the
//! working directory (`0000`, `0001`, ...). The directory is only created
//! when the first file is written.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Session {
    base_dir: PathBuf,
    dir_num: u32,
    next_index: u64,
}

impl Session {
    /// Picks the next session number under `base_dir`: one more than the
    /// largest existing directory named by exactly four ASCII digits, or 0.
    pub fn start(base_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let base_dir = base_dir.into();
        let dir_num = next_dir_num(&base_dir)?;
        tracing::debug!("session directory {:04} under {}", dir_num, base_dir.display());
        Ok(Self {
            base_dir,
            dir_num,
            next_index: 0,
        })
    }

    pub fn dir_num(&self) -> u32 {
        self.dir_num
    }

    /// Directory downloads land in.
    pub fn dir(&self) -> PathBuf {
        self.base_dir.join(format!("{:04}", self.dir_num))
    }

    /// Index the next download will get.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Returns the current download index and advances the counter.
    pub fn take_index(&mut self) -> u64 {
        let idx = self.next_index;
        self.next_index += 1;
        idx
    }
}

fn next_dir_num(base_dir: &Path) -> io::Result<u32> {
    let entries = match fs::read_dir(base_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };
    let mut max: Option<u32> = None;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(num) = entry.file_name().to_str().and_then(parse_session_name) {
            max = Some(max.map_or(num, |m| m.max(num)));
        }
    }
    Ok(max.map_or(0, |m| m + 1))
}

fn parse_session_name(name: &str) -> Option<u32> {
    if name.len() == 4 && name.bytes().all(|b| b.is_ascii_digit()) {
        name.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_dir_starts_at_zero() {
        let dir = tempdir().unwrap();
        let s = Session::start(dir.path()).unwrap();
        assert_eq!(s.dir_num(), 0);
        assert_eq!(s.dir(), dir.path().join("0000"));
        assert!(!s.dir().exists());
    }

    #[test]
    fn picks_one_past_highest_numbered_dir() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("0000")).unwrap();
        fs::create_dir(dir.path().join("0007")).unwrap();
        fs::create_dir(dir.path().join("12345")).unwrap();
        fs::create_dir(dir.path().join("abcd")).unwrap();
        fs::write(dir.path().join("0099"), b"file, not dir").unwrap();
        let s = Session::start(dir.path()).unwrap();
        assert_eq!(s.dir_num(), 8);
        assert_eq!(s.dir(), dir.path().join("0008"));
    }

    #[test]
    fn index_counter_advances() {
        let dir = tempdir().unwrap();
        let mut s = Session::start(dir.path()).unwrap();
        assert_eq!(s.next_index(), 0);
        assert_eq!(s.take_index(), 0);
        assert_eq!(s.take_index(), 1);
        assert_eq!(s.next_index(), 2);
    }

    #[test]
    fn session_names() {
        assert_eq!(parse_session_name("0042"), Some(42));
        assert_eq!(parse_session_name("42"), None);
        assert_eq!(parse_session_name("00042"), None);
        assert_eq!(parse_session_name("+042"), None);
    }
}
