#![allow(dead_code)]

use std::{net::SocketAddr, thread, time::Duration};

use smol::{
    channel::{self, Receiver},
    io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader},
    net::{TcpListener, TcpStream},
};

#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Answers exactly one request with a canned status and body, recording what
/// it received.
pub struct MockServer {
    addr: SocketAddr,
    requests: Receiver<RecordedRequest>,
}

enum Reply {
    Complete {
        status: u16,
        reason: &'static str,
        body: &'static str,
    },
    /// Announces a 100 byte body, sends `{"ok"` and then goes quiet.
    Stall(Duration),
}

impl MockServer {
    pub fn start(status: u16, reason: &'static str, body: &'static str) -> Self {
        Self::spawn(Reply::Complete {
            status,
            reason,
            body,
        })
    }

    /// Sends the response headers and part of the body, then holds the
    /// connection open for `stall`.
    pub fn stalling(stall: Duration) -> Self {
        Self::spawn(Reply::Stall(stall))
    }

    fn spawn(reply: Reply) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, requests) = channel::bounded(1);

        thread::spawn(move || {
            smol::block_on(async move {
                let listener = TcpListener::try_from(listener).unwrap();
                let (stream, _) = listener.accept().await.unwrap();
                let recorded = serve(stream, reply).await;
                let _ = tx.send(recorded).await;
            })
        });

        Self { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}/api/v1/friends", self.addr)
    }

    pub fn received(&self) -> RecordedRequest {
        self.requests.recv_blocking().unwrap()
    }
}

async fn serve(mut stream: TcpStream, reply: Reply) -> RecordedRequest {
    let mut reader = BufReader::new(stream.clone());

    let mut line = String::new();
    reader.read_line(&mut line).await.unwrap();
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        line.clear();
        reader.read_line(&mut line).await.unwrap();
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some((key, value)) = trimmed.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let content_length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut request_body = vec![0; content_length];
    reader.read_exact(&mut request_body).await.unwrap();

    match reply {
        Reply::Complete {
            status,
            reason,
            body,
        } => {
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.flush().await.unwrap();
        }
        Reply::Stall(stall) => {
            stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{\"ok\"")
                .await
                .unwrap();
            stream.flush().await.unwrap();
            smol::Timer::after(stall).await;
        }
    }

    RecordedRequest {
        method,
        path,
        headers,
        body: request_body,
    }
}

/// An address nothing is listening on.
pub fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/v1/friends")
}
