#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_application::ports::{Clock, HttpFetcher};
use ferrous_doh_domain::{DohProvider, DomainError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

#[derive(Clone)]
pub enum MockReply {
    Json(String),
    Fail(DomainError),
    /// Waits until every fetch sharing the barrier has started, then replies.
    AfterBarrier(Arc<Barrier>, String),
}

#[derive(Debug, Clone)]
pub struct FetchCall {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

/// Scripted fetcher keyed by provider URL (the part before `?`).
/// Unscripted providers fail as if the connection was refused.
#[derive(Clone, Default)]
pub struct MockHttpFetcher {
    replies: Arc<Mutex<HashMap<String, MockReply>>>,
    calls: Arc<Mutex<Vec<FetchCall>>>,
}

impl MockHttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, provider: &str, reply: MockReply) {
        self.replies
            .lock()
            .unwrap()
            .insert(provider.to_string(), reply);
    }

    pub fn reply_json(&self, provider: &str, body: &str) {
        self.reply(provider, MockReply::Json(body.to_string()));
    }

    pub fn fail(&self, provider: &str) {
        self.reply(
            provider,
            MockReply::Fail(DomainError::TransportTimeout {
                server: provider.to_string(),
            }),
        );
    }

    /// Makes every provider unreachable from now on.
    pub fn go_offline(&self) {
        self.replies.lock().unwrap().clear();
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn called_providers(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|c| provider_of(&c.url).to_string())
            .collect()
    }
}

fn provider_of(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

#[async_trait]
impl HttpFetcher for MockHttpFetcher {
    async fn fetch(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<Bytes, DomainError> {
        self.calls.lock().unwrap().push(FetchCall {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            timeout,
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(provider_of(url))
            .cloned();

        match reply {
            Some(MockReply::Json(body)) => Ok(Bytes::from(body)),
            Some(MockReply::Fail(e)) => Err(e),
            Some(MockReply::AfterBarrier(barrier, body)) => {
                barrier.wait().await;
                Ok(Bytes::from(body))
            }
            None => Err(DomainError::TransportFailed {
                server: provider_of(url).to_string(),
                reason: "connection refused".to_string(),
            }),
        }
    }
}

pub struct ManualClock {
    now_millis: AtomicU64,
}

impl ManualClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            now_millis: AtomicU64::new(start_millis),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now_millis
            .fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now_millis.load(Ordering::SeqCst)
    }
}

pub fn providers(urls: &[&str]) -> Vec<DohProvider> {
    urls.iter().map(|u| DohProvider::new(u).unwrap()).collect()
}

pub fn txt_body(data: &[&str]) -> String {
    let answers: Vec<String> = data
        .iter()
        .map(|d| {
            format!(
                r#"{{"name":"front.example.com.","type":16,"TTL":300,"data":{}}}"#,
                serde_json_string(d)
            )
        })
        .collect();
    format!(r#"{{"Status":0,"Answer":[{}]}}"#, answers.join(","))
}

pub fn a_body(ips: &[&str]) -> String {
    let answers: Vec<String> = ips
        .iter()
        .map(|ip| format!(r#"{{"name":"example.com.","type":1,"TTL":60,"data":"{}"}}"#, ip))
        .collect();
    format!(r#"{{"Status":0,"Answer":[{}]}}"#, answers.join(","))
}

pub fn empty_body() -> String {
    r#"{"Status":3}"#.to_string()
}

fn serde_json_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
