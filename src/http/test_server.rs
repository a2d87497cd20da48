use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

const MAX_REQUEST_HEAD: usize = 16 * 1024;
const DEFAULT_CHUNK: usize = 64 * 1024;

/// How the mock endpoint answers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MockBehavior {
    /// Body length of a request without a `Range` header.
    pub whole_file_len: u64,
    /// Requests answered with `failure` before any succeeds.
    pub fail_first: usize,
    pub failure: MockFailure,
    pub chunk_size: usize,
    /// Pause between body chunks.
    pub chunk_delay: Duration,
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self {
            whole_file_len: 1024,
            fail_first: 0,
            failure: MockFailure::Status(503),
            chunk_size: DEFAULT_CHUNK,
            chunk_delay: Duration::ZERO,
        }
    }
}

/// How a failing request is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MockFailure {
    /// Empty response with this status.
    Status(u16),
    /// Full `Content-Length` advertised, connection closed after `sent` bytes.
    TruncatedBody { sent: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SeenRequest {
    pub target: String,
    pub range: Option<String>,
}

/// Blocking HTTP/1.1 server honouring `Range: bytes=start-end`.
pub(crate) struct MockServer {
    url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for MockServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

impl MockServer {
    pub(crate) fn spawn(behavior: MockBehavior) -> Result<Self, String> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .map_err(|err| format!("bind test server failed: {}", err))?;
        let addr = listener
            .local_addr()
            .map_err(|err| format!("server addr failed: {}", err))?;
        listener
            .set_nonblocking(true)
            .map_err(|err| format!("set_nonblocking failed: {}", err))?;

        let (shutdown_tx, shutdown_rx) = mpsc::channel();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let counter = Arc::new(AtomicUsize::new(0));
        let seen_by_server = Arc::clone(&seen);

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                match listener.accept() {
                    Ok((stream, _)) => {
                        let seen = Arc::clone(&seen_by_server);
                        let counter = Arc::clone(&counter);
                        thread::spawn(move || handle_client(stream, behavior, &seen, &counter));
                    }
                    Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            url: format!("http://{}", addr),
            seen,
            shutdown: shutdown_tx,
            thread: Some(handle),
        })
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn requests(&self) -> Vec<SeenRequest> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

fn handle_client(
    mut stream: TcpStream,
    behavior: MockBehavior,
    seen: &Mutex<Vec<SeenRequest>>,
    counter: &AtomicUsize,
) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some(head) = read_request_head(&mut stream) else {
        return;
    };
    let request = parse_request_head(&head);
    if let Ok(mut seen) = seen.lock() {
        seen.push(request.clone());
    }

    let index = counter.fetch_add(1, Ordering::SeqCst);
    let mut truncate_at = None;
    if index < behavior.fail_first {
        match behavior.failure {
            MockFailure::Status(status) => {
                let response = format!(
                    "HTTP/1.1 {} Failure\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    status
                );
                drop(stream.write_all(response.as_bytes()));
                drop(stream.shutdown(Shutdown::Both));
                return;
            }
            MockFailure::TruncatedBody { sent } => truncate_at = Some(sent),
        }
    }

    let (status_line, body_len, content_range) = match request.range.as_deref().and_then(parse_range)
    {
        Some((start, end)) => (
            "206 Partial Content",
            end.saturating_sub(start).saturating_add(1),
            Some(format!("Content-Range: bytes {}-{}/*\r\n", start, end)),
        ),
        None => ("200 OK", behavior.whole_file_len, None),
    };
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        status_line,
        body_len,
        content_range.unwrap_or_default()
    );
    if stream.write_all(head.as_bytes()).is_err() {
        return;
    }

    let chunk = vec![0_u8; behavior.chunk_size.max(1)];
    let mut remaining = truncate_at.map_or(body_len, |sent| sent.min(body_len));
    while remaining > 0 {
        let len = usize::try_from(remaining)
            .unwrap_or(usize::MAX)
            .min(chunk.len());
        let Some(slice) = chunk.get(..len) else {
            return;
        };
        if stream.write_all(slice).and_then(|()| stream.flush()).is_err() {
            return;
        }
        remaining = remaining.saturating_sub(u64::try_from(len).unwrap_or(u64::MAX));
        if remaining > 0 && !behavior.chunk_delay.is_zero() {
            thread::sleep(behavior.chunk_delay);
        }
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn read_request_head(stream: &mut TcpStream) -> Option<String> {
    let mut head = Vec::new();
    let mut buffer = [0_u8; 1024];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        if head.len() > MAX_REQUEST_HEAD {
            return None;
        }
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            return None;
        }
        head.extend_from_slice(buffer.get(..read)?);
    }
    String::from_utf8(head).ok()
}

fn parse_request_head(head: &str) -> SeenRequest {
    let mut lines = head.lines();
    let target = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_owned();
    let range = lines.find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.trim()
            .eq_ignore_ascii_case("range")
            .then(|| value.trim().to_owned())
    });
    SeenRequest { target, range }
}

fn parse_range(value: &str) -> Option<(u64, u64)> {
    let (start, end) = value.strip_prefix("bytes=")?.split_once('-')?;
    let start = start.trim().parse().ok()?;
    let end = end.trim().parse().ok()?;
    (start <= end).then_some((start, end))
}
