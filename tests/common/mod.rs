//! Shared test infrastructure: raw TCP mock endpoints and recording sinks.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use traffic_poller::DiagnosticSink;

/// Starts a mock endpoint that answers every request with a fixed status
/// and body. Returns once the listener is bound.
#[allow(dead_code)]
pub async fn start_mock_endpoint(addr: SocketAddr, status: u16, body: &'static str) {
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind mock endpoint on {}: {}", addr, e));

    tokio::spawn(async move {
        loop {
            if let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let _ = read_request_head(&mut socket).await;
                    write_response(&mut socket, status, body).await;
                });
            }
        }
    });
}

/// Starts a mock endpoint that sleeps before answering. Used to hold a
/// fetch in flight while the caller does something else.
#[allow(dead_code)]
pub async fn start_slow_endpoint(addr: SocketAddr, delay: Duration, body: &'static str) {
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind slow endpoint on {}: {}", addr, e));

    tokio::spawn(async move {
        loop {
            if let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let _ = read_request_head(&mut socket).await;
                    tokio::time::sleep(delay).await;
                    write_response(&mut socket, 200, body).await;
                });
            }
        }
    });
}

/// Starts a mock endpoint that records each request path as a `hit:{path}`
/// event and answers from a static route table. Unknown paths get a 404.
#[allow(dead_code)]
pub async fn start_recording_endpoint(
    addr: SocketAddr,
    events: Arc<Mutex<Vec<String>>>,
    routes: &'static [(&'static str, &'static str)],
) {
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind recording endpoint on {}: {}", addr, e));

    tokio::spawn(async move {
        loop {
            if let Ok((mut socket, _)) = listener.accept().await {
                let events = Arc::clone(&events);
                tokio::spawn(async move {
                    let head = read_request_head(&mut socket).await;
                    let path = request_path(&head);
                    events
                        .lock()
                        .unwrap()
                        .push(format!("hit:{}", path));
                    match routes.iter().find(|(route, _)| *route == path) {
                        Some((_, body)) => write_response(&mut socket, 200, body).await,
                        None => write_response(&mut socket, 404, "not found").await,
                    }
                });
            }
        }
    });
}

/// Starts a mock endpoint that stores every raw request head, so tests can
/// assert on the exact headers the poller sends. Always answers 200 "ok".
#[allow(dead_code)]
pub async fn start_head_capture_endpoint(addr: SocketAddr, heads: Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind head-capture endpoint on {}: {}", addr, e));

    tokio::spawn(async move {
        loop {
            if let Ok((mut socket, _)) = listener.accept().await {
                let heads = Arc::clone(&heads);
                tokio::spawn(async move {
                    let head = read_request_head(&mut socket).await;
                    heads.lock().unwrap().push(head);
                    write_response(&mut socket, 200, "ok").await;
                });
            }
        }
    });
}

async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                head.extend_from_slice(&chunk[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

fn request_path(head: &str) -> String {
    head.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string()
}

async fn write_response(socket: &mut TcpStream, status: u16, body: &str) {
    let status_line = match status {
        200 => "200 OK",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Sink that captures every diagnostic line for later assertions.
#[derive(Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl DiagnosticSink for CaptureSink {
    fn line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Sink that pushes `log:{line}` events into a shared timeline, so request
/// hits and diagnostic lines can be interleaved in a single ordered record.
#[derive(Clone)]
pub struct TimelineSink {
    events: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl TimelineSink {
    pub fn new(events: Arc<Mutex<Vec<String>>>) -> Self {
        Self { events }
    }
}

impl DiagnosticSink for TimelineSink {
    fn line(&self, line: &str) {
        self.events.lock().unwrap().push(format!("log:{}", line));
    }
}
