use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

/// One request as seen by the test storage server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub file_name: Option<String>,
    pub body_len: usize,
}

type Log = Arc<Mutex<Vec<RecordedRequest>>>;

pub struct StorageServer {
    pub host: String,
    pub port: u16,
    log: Log,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl StorageServer {
    pub fn requests(&self) -> Result<Vec<RecordedRequest>, String> {
        self.log
            .lock()
            .map(|log| log.clone())
            .map_err(|err| format!("request log poisoned: {}", err))
    }
}

impl Drop for StorageServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a storage server answering every request with `status`.
///
/// `POST /upload` records the multipart file name; `GET /files/{name}`
/// answers with `payload:{name}`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_storage_server(status: u16) -> Result<StorageServer, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let server_log = Arc::clone(&log);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let log = Arc::clone(&server_log);
                    thread::spawn(move || handle_client(stream, &log, status));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok(StorageServer {
        host: addr.ip().to_string(),
        port: addr.port(),
        log,
        shutdown: shutdown_tx,
        thread: Some(handle),
    })
}

/// A port nothing listens on.
pub fn unused_port() -> Result<u16, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe failed: {}", err))?;
    let port = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?
        .port();
    drop(listener);
    Ok(port)
}

fn handle_client(mut stream: TcpStream, log: &Log, status: u16) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some((head, body)) = read_request(&mut stream) else {
        return;
    };
    let mut parts = head.lines().next().unwrap_or_default().split_whitespace();
    let method = parts.next().unwrap_or_default().to_owned();
    let path = parts.next().unwrap_or_default().to_owned();

    let response_body = match path.strip_prefix("/files/") {
        Some(name) if method == "GET" => format!("payload:{}", name),
        _ => "ok".to_owned(),
    };
    if let Ok(mut log) = log.lock() {
        log.push(RecordedRequest {
            method,
            path,
            file_name: multipart_file_name(&body),
            body_len: body.len(),
        });
    }

    let reason = if status < 300 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        response_body.len(),
        response_body
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn read_request(stream: &mut TcpStream) -> Option<(String, Vec<u8>)> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 8192];
    let head_end = loop {
        if let Some(pos) = find(&buffer, b"\r\n\r\n") {
            break pos;
        }
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(chunk.get(..read)?);
    };
    let head = String::from_utf8_lossy(buffer.get(..head_end)?).into_owned();
    let mut body = buffer.get(head_end + 4..)?.to_vec();

    let lower = head.to_ascii_lowercase();
    let content_length = lower
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok());
    let chunked = lower.contains("transfer-encoding: chunked");

    loop {
        let complete = match content_length {
            Some(length) => body.len() >= length,
            None if chunked => body.ends_with(b"0\r\n\r\n"),
            None => true,
        };
        if complete {
            break;
        }
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            break;
        }
        body.extend_from_slice(chunk.get(..read)?);
    }
    Some((head, body))
}

fn multipart_file_name(body: &[u8]) -> Option<String> {
    let marker = b"filename=\"";
    let start = find(body, marker)? + marker.len();
    let rest = body.get(start..)?;
    let end = rest.iter().position(|&byte| byte == b'"')?;
    Some(String::from_utf8_lossy(rest.get(..end)?).into_owned())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Run the `httpfs-bench` binary inside `dir` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_bench<I, S>(dir: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = bench_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "error")
        .env_remove("HTTPFS_BENCH_LOG")
        .output()
        .map_err(|err| format!("run httpfs-bench failed: {}", err))
}

fn bench_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_httpfs-bench").map_or_else(
        || Err("CARGO_BIN_EXE_httpfs-bench missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
