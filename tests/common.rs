#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

/// Binary under test with a fresh private config file and plain output.
pub fn rat(name: &str) -> Command {
    rat_cfg(&config_path(name))
}

/// Same, with an existing config file.
pub fn rat_cfg(cfg: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("RATTENDANCE_CONFIG")
        .env_remove("RATTENDANCE_PASSWORD")
        .args(["--config", cfg, "--tz", "UTC"]);
    cmd
}

/// Config path unique to a test; any previous file is removed.
pub fn config_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_rattendance.conf"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp file and return its path.
pub fn fixture(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_fixture.{ext}"));
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Activity dump covering 2026-01-05..06 for two employees, plus one
/// record without an employee.
pub const ACTIVITY_JSON: &str = r#"{
  "data": [
    { "id": 1, "employeeId": 7, "checkInAt": "2026-01-05T09:20:00Z", "checkOutAt": "2026-01-05T18:00:00Z", "note": "traffic" },
    { "id": 2, "employeeId": 7, "checkInAt": "2026-01-06T08:55:00Z", "checkOutAt": "2026-01-06T18:05:00Z" },
    { "id": 3, "user": { "id": 9 }, "check_in_at": "2026-01-05T09:00:00Z", "latitude": 45.46, "longitude": 9.19, "locationName": "HQ Milano" },
    { "id": 4, "checkInAt": "2026-01-05T09:00:00Z" }
  ]
}"#;

pub const EMPLOYEES_JSON: &str = r#"[
  { "id": 7, "firstName": "Alice", "lastName": "Rossi", "department": { "name": "Sales" } },
  { "id": 9, "name": "Bruno Verdi", "department": "Ops" },
  { "id": 11, "name": "Carla Neri" }
]"#;

pub const REPORT_CSV: &str = "\u{feff}Employee,Department,Date,Check In,Check Out,Notes\r\n\
Alice Rossi,Sales,2026-01-05,2026-01-05T09:20:00Z,2026-01-05T18:00:00Z,\"late, traffic\"\r\n\
Bruno Verdi,Ops,2026-01-05,2026-01-05T09:00:00Z,,\r\n\
\r\n\
Alice Rossi,Sales,2026-01-06,2026-01-06T08:55:00Z,2026-01-06T18:05:00Z,\"said \"\"hi\"\"\"\r\n";

/// One-shot HTTP server: answers the first request with `status` and
/// `body`, then returns the raw request text from the join handle.
pub fn serve_once(status: u16, content_type: &str, body: &str) -> (String, JoinHandle<String>) {
    serve_raw(format!(
        "HTTP/1.1 {status} X\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    ))
}

/// Answer one request with `response` written verbatim, status line included.
pub fn serve_raw(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone"));

        let mut request = String::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).expect("read") == 0 {
                break;
            }
            if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                content_length = v.trim().parse().unwrap_or(0);
            }
            request.push_str(&line);
            if line == "\r\n" {
                break;
            }
        }
        let mut payload = vec![0u8; content_length];
        reader.read_exact(&mut payload).expect("read body");
        request.push_str(&String::from_utf8_lossy(&payload));

        stream.write_all(response.as_bytes()).expect("write");
        stream.flush().ok();
        request
    });

    (format!("http://{addr}/api"), handle)
}

/// Config file pointing at `base_url` with a stored token.
pub fn write_config(path: &str, base_url: &str, token: Option<&str>) {
    let token = token
        .map(|t| format!("api_token: {t}\n"))
        .unwrap_or_default();
    fs::write(
        path,
        format!("api_base_url: {base_url}\n{token}expected_in: \"09:00\"\nexpected_out: \"18:00\"\n"),
    )
    .expect("write config");
}
