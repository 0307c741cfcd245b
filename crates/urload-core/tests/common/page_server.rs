//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of pages by path, answers 404 for anything else, and
//! records the raw request head of every request so tests can check what
//! the client sent.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Page {
    Ok { content_type: &'static str, body: Vec<u8> },
    Redirect(String),
    Status(u16),
}

impl Page {
    pub fn html(body: &str) -> Self {
        Page::Ok {
            content_type: "text/html; charset=utf-8",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn bytes(body: Vec<u8>) -> Self {
        Page::Ok {
            content_type: "application/octet-stream",
            body,
        }
    }
}

pub struct PageServer {
    /// Base URL with trailing slash, e.g. `http://127.0.0.1:12345/`.
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl PageServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    /// Request heads received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Paths are matched exactly
/// (leading `/` included, query ignored). Runs until the process exits.
pub fn start(pages: Vec<(&str, Page)>) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let pages: Arc<HashMap<String, Page>> = Arc::new(
        pages
            .into_iter()
            .map(|(path, page)| (path.to_string(), page))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let pages = Arc::clone(&pages);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &pages, &log));
        }
    });
    PageServer {
        base: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, pages: &HashMap<String, Page>, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]).into_owned();
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .split('?')
        .next()
        .unwrap_or("/")
        .to_string();
    log.lock().unwrap().push(request);

    let (status, extra, body): (&str, String, &[u8]) = match pages.get(&path) {
        Some(Page::Ok { content_type, body }) => {
            ("200 OK", format!("Content-Type: {}\r\n", content_type), body.as_slice())
        }
        Some(Page::Redirect(to)) => ("302 Found", format!("Location: {}\r\n", to), &[][..]),
        Some(Page::Status(404)) | None => ("404 Not Found", String::new(), &b"not found"[..]),
        Some(Page::Status(500)) => ("500 Internal Server Error", String::new(), &b"boom"[..]),
        Some(Page::Status(_)) => ("400 Bad Request", String::new(), &[][..]),
    };
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        status,
        body.len(),
        extra
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
