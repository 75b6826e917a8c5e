//! Minimal HTTP/1.1 server that serves a single file tree document.
//!
//! Answers GET on the configured path with the document and counts how many
//! times it was requested. Every other path returns 404.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

pub struct ManifestServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl ManifestServer {
    /// Number of requests that reached the manifest path.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread answering `path` with `body` and a
/// 200 status. The server runs until the process exits.
pub fn start(path: &'static str, body: &str) -> ManifestServer {
    start_with_status(path, body, "200 OK")
}

/// Like `start` but answers the manifest path with `status` (e.g. "503 Service Unavailable").
pub fn start_with_status(path: &'static str, body: &str, status: &'static str) -> ManifestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let body = Arc::new(body.to_string());
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let body = Arc::clone(&body);
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                let mut buf = [0u8; 4096];
                let n = stream.read(&mut buf).unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let target = request_target(&request);
                if target == path {
                    counter.fetch_add(1, Ordering::SeqCst);
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                        status,
                        body.len()
                    );
                    let _ = stream.write_all(response.as_bytes());
                    let _ = stream.write_all(body.as_bytes());
                } else {
                    let _ = stream.write_all(
                        b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    );
                }
            });
        }
    });
    ManifestServer {
        base_url: format!("http://127.0.0.1:{port}"),
        hits,
    }
}

/// Returns the path of the request line, e.g. "/Filetree.json".
fn request_target(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("")
}
