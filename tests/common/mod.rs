//! Shared fixtures: an isolated base directory and a one-shot stub of the
//! Gemini HTTP service.
#![allow(dead_code)]

use std::fs;
use std::io::{ErrorKind, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use assert_cmd::Command;
use tempfile::TempDir;

/// Maximum header section size (32 KiB)
const MAX_HEADER_SIZE: usize = 32 * 1024;

/// Request captured by the stub service
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

/// A local TCP listener standing in for the Gemini service
pub struct StubService {
    listener: TcpListener,
}

impl StubService {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub service");
        Self { listener }
    }

    pub fn base_url(&self) -> String {
        let addr = self.listener.local_addr().expect("stub address");
        format!("http://{}/v1beta", addr)
    }

    /// Answer exactly one request with `status` and `body`, returning it.
    pub fn respond_once(&self, status: u16, body: &str) -> JoinHandle<CapturedRequest> {
        let listener = self.listener.try_clone().expect("clone listener");
        let body = body.to_string();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let request = read_request(&mut stream);
            write_response(&mut stream, status, &body);
            request
        })
    }

    /// True if nobody has connected so far
    pub fn untouched(&self) -> bool {
        self.listener
            .set_nonblocking(true)
            .expect("set nonblocking");
        matches!(self.listener.accept(), Err(e) if e.kind() == ErrorKind::WouldBlock)
    }
}

fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut header_buf = Vec::with_capacity(4096);
    let mut byte = [0u8; 1];
    while !header_buf.ends_with(b"\r\n\r\n") {
        let n = stream.read(&mut byte).expect("read request headers");
        assert!(n > 0, "connection closed mid-request");
        header_buf.push(byte[0]);
        assert!(header_buf.len() <= MAX_HEADER_SIZE, "headers too large");
    }

    let mut parsed_headers = [httparse::EMPTY_HEADER; 64];
    let mut req = httparse::Request::new(&mut parsed_headers);
    let status = req.parse(&header_buf).expect("parse request");
    assert!(status.is_complete(), "incomplete request");

    let headers: Vec<(String, String)> = req
        .headers
        .iter()
        .map(|h| {
            (
                h.name.to_string(),
                String::from_utf8_lossy(h.value).to_string(),
            )
        })
        .collect();

    let content_length: usize = headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case("Content-Length"))
        .and_then(|(_, v)| v.trim().parse().ok())
        .unwrap_or(0);

    let mut body = vec![0u8; content_length];
    stream.read_exact(&mut body).expect("read request body");

    CapturedRequest {
        method: req.method.unwrap_or("").to_string(),
        path: req.path.unwrap_or("/").to_string(),
        headers,
        body,
    }
}

fn write_response(stream: &mut TcpStream, status: u16, body: &str) {
    let head = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body.as_bytes());
    let _ = stream.flush();
}

/// A successful `generateContent` body carrying `text`
pub fn candidate_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": text}]}, "finishReason": "STOP"}
        ]
    })
    .to_string()
}

/// Isolated `REPHRASE_HOME` with optional credentials
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("rephrase");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    /// Environment with a valid `credentials/gemini.json`
    pub fn with_key(key: &str) -> Self {
        let env = Self::new();
        env.write_credentials(&serde_json::json!({ "api_key": key }).to_string());
        env
    }

    pub fn write_credentials(&self, body: &str) {
        let dir = self.home.join("credentials");
        fs::create_dir_all(&dir).expect("create credentials dir");
        fs::write(dir.join("gemini.json"), body).expect("write credentials");
    }

    pub fn log_dir(&self) -> PathBuf {
        self.home.join("log")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join("log.txt")
    }

    pub fn read_log(&self) -> String {
        fs::read_to_string(self.log_file()).expect("read log file")
    }

    pub fn cmd(&self, api_base: &str) -> Command {
        let mut cmd = Command::cargo_bin("rephrase").expect("rephrase binary");
        cmd.env("REPHRASE_HOME", &self.home)
            .env("REPHRASE_API_BASE", api_base)
            .env_remove("REPHRASE_LOG");
        // The stub lives on loopback; keep proxies out of the way
        for var in ["HTTP_PROXY", "http_proxy", "ALL_PROXY", "all_proxy"] {
            cmd.env_remove(var);
        }
        cmd
    }
}
