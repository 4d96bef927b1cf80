#![allow(dead_code)]
use ferrous_doh_domain::DohProvider;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl MockResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub target: String,
    /// Header names are lowercased.
    pub headers: HashMap<String, String>,
}

/// Minimal HTTP/1.1 DoH JSON endpoint on 127.0.0.1.
///
/// Responses are keyed by the `type` query parameter (`TXT`, `A`); other
/// requests get a 404.
pub struct MockDohServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDohServer {
    pub async fn start(responses: Vec<(&str, MockResponse)>) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let responses: Arc<HashMap<String, MockResponse>> = Arc::new(
            responses
                .into_iter()
                .map(|(t, r)| (t.to_string(), r))
                .collect(),
        );

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let recorded = requests.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = listener.accept() => {
                        if let Ok((stream, _)) = result {
                            let responses = responses.clone();
                            let recorded = recorded.clone();
                            tokio::spawn(async move {
                                let _ = Self::serve(stream, &responses, &recorded).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> String {
        format!("http://{}/resolve", self.addr)
    }

    pub fn provider(&self) -> DohProvider {
        DohProvider::new(self.url()).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    async fn serve(
        mut stream: TcpStream,
        responses: &HashMap<String, MockResponse>,
        recorded: &Mutex<Vec<RecordedRequest>>,
    ) -> Result<(), std::io::Error> {
        let mut buf = Vec::with_capacity(1024);
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).await?;
            if n == 0 || buf.len() > 16 * 1024 {
                return Ok(());
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let head = String::from_utf8_lossy(&buf).to_string();
        let mut lines = head.split("\r\n");
        let target = lines
            .next()
            .and_then(|line| line.split_whitespace().nth(1))
            .unwrap_or_default()
            .to_string();
        let headers = lines
            .take_while(|l| !l.is_empty())
            .filter_map(|l| l.split_once(':'))
            .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_string()))
            .collect();

        let record_type = target
            .split_once('?')
            .map(|(_, query)| query)
            .unwrap_or_default()
            .split('&')
            .find_map(|pair| pair.strip_prefix("type="))
            .unwrap_or_default()
            .to_string();

        recorded
            .lock()
            .unwrap()
            .push(RecordedRequest { target, headers });

        let response = responses
            .get(&record_type)
            .cloned()
            .unwrap_or_else(|| MockResponse::status(404));

        if !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }

        let raw = format!(
            "HTTP/1.1 {} MOCK\r\ncontent-type: application/dns-json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            response.status,
            response.body.len(),
            response.body
        );
        stream.write_all(raw.as_bytes()).await?;
        stream.shutdown().await
    }
}

impl Drop for MockDohServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
