//! Fakes for command tests: canned HTTP responses and a captured output sink.

use super::{Command, CommandResult, Env};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use tempfile::TempDir;
use urload_core::config::Settings;
use urload_core::fetch::{FetchError, Fetcher, Response};
use urload_core::session::Session;
use urload_core::UrlRecord;

/// Serves registered pages; anything else is a 404.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    pages: HashMap<String, (u32, Vec<u8>)>,
    /// Every request as `(url, headers)`, in order.
    pub calls: RefCell<Vec<(String, BTreeMap<String, String>)>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), (200, body.as_bytes().to_vec()));
        self
    }

    pub fn status(mut self, url: &str, status: u32) -> Self {
        self.pages.insert(url.to_string(), (status, Vec::new()));
        self
    }

    pub fn called_urls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(u, _)| u.clone()).collect()
    }
}

impl Fetcher for FakeFetcher {
    fn get(&self, url: &str, headers: &BTreeMap<String, String>) -> Result<Response, FetchError> {
        self.calls
            .borrow_mut()
            .push((url.to_string(), headers.clone()));
        let (status, body) = self
            .pages
            .get(url)
            .cloned()
            .unwrap_or((404, b"not found".to_vec()));
        Ok(Response {
            url: url.to_string(),
            status,
            body,
        })
    }
}

/// Owns everything a command needs and runs it against captured output.
pub struct Harness {
    pub settings: Settings,
    pub session: Session,
    pub fetcher: FakeFetcher,
    pub out: Vec<u8>,
    pub dir: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_fetcher(FakeFetcher::new())
    }

    pub fn with_fetcher(fetcher: FakeFetcher) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::start(dir.path()).unwrap();
        Self {
            settings: Settings::default(),
            session,
            fetcher,
            out: Vec::new(),
            dir,
        }
    }

    pub fn run(&mut self, cmd: &dyn Command, args: &[&str], records: &[UrlRecord]) -> CommandResult {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let mut env = Env {
            settings: &mut self.settings,
            session: &mut self.session,
            fetcher: &self.fetcher,
            out: &mut self.out,
        };
        cmd.run(&args, records, &mut env)
    }

    /// Output written so far; clears the buffer.
    pub fn take_output(&mut self) -> String {
        String::from_utf8(std::mem::take(&mut self.out)).unwrap()
    }
}

pub fn records(urls: &[&str]) -> Vec<UrlRecord> {
    urls.iter().map(|u| UrlRecord::new(*u)).collect()
}

pub fn urls(records: &[UrlRecord]) -> Vec<&str> {
    records.iter().map(|r| r.url.as_str()).collect()
}

/// Asserts the command failed with a user-facing message.
pub fn assert_usage(result: CommandResult, expected: &str) {
    match result {
        Err(super::CommandError::Usage(msg)) => assert_eq!(msg, expected),
        other => panic!("expected usage error {:?}, got {:?}", expected, other),
    }
}
