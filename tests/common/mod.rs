#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the lang-stats binary.
///
/// The token variable is cleared so tests never pick up a real credential.
#[macro_export]
macro_rules! lang_stats {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("lang-stats"));
        cmd.env_remove("GITHUB_TOKEN").env_remove("RUST_LOG");
        cmd
    }};
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.lang-stats.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".lang-stats.toml", content);
    }

    /// Reads a file relative to the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

/// One request received by [`StubApi`].
#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    pub target: String,
    pub authorization: Option<String>,
    pub accept: Option<String>,
}

/// Minimal HTTP/1.1 server answering GET requests from a fixed route table.
///
/// Unknown routes get a 404. Every request target and its `Authorization`
/// and `Accept` headers are recorded. The server stops when dropped.
pub struct StubApi {
    base_url: String,
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl StubApi {
    pub fn start(routes: &[(&str, u16, &str)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let addr = listener.local_addr().unwrap();
        let routes: HashMap<String, (u16, String)> = routes
            .iter()
            .map(|(path, status, body)| ((*path).to_string(), (*status, (*body).to_string())))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let stop = Arc::new(AtomicBool::new(false));
        let recorded = Arc::clone(&requests);
        let stopping = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            for stream in listener.incoming() {
                if stopping.load(Ordering::SeqCst) {
                    break;
                }
                let Ok(mut stream) = stream else { continue };
                let Some(request) = read_request(&stream) else {
                    continue;
                };

                let (status, body) = routes
                    .get(&request.target)
                    .cloned()
                    .unwrap_or((404, r#"{"message":"Not Found"}"#.to_string()));
                recorded.lock().unwrap().push(request);

                let response = format!(
                    "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            addr,
            requests,
            stop,
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Requests in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Request targets in arrival order.
    pub fn targets(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.target).collect()
    }

    /// `Authorization` header of every request.
    pub fn authorizations(&self) -> Vec<Option<String>> {
        self.requests().into_iter().map(|r| r.authorization).collect()
    }

    /// `Accept` header of every request.
    pub fn accepts(&self) -> Vec<Option<String>> {
        self.requests().into_iter().map(|r| r.accept).collect()
    }

    /// Config file pointing the client at this server.
    pub fn config(&self, extra: &str) -> String {
        format!("[api]\nbase_url = \"{}\"\n\n{extra}", self.base_url)
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        // Wake the blocking accept so the loop sees the flag.
        let _ = TcpStream::connect(self.addr);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn read_request(stream: &TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut request = RecordedRequest {
        target: request_line.split_whitespace().nth(1)?.to_string(),
        ..RecordedRequest::default()
    };

    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).unwrap_or(0) == 0 || header == "\r\n" {
            break;
        }
        let Some((name, value)) = header.split_once(':') else {
            continue;
        };
        let value = Some(value.trim().to_string());
        if name.eq_ignore_ascii_case("authorization") {
            request.authorization = value;
        } else if name.eq_ignore_ascii_case("accept") {
            request.accept = value;
        }
    }

    Some(request)
}
