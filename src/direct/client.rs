use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiMethod, ReadTransport};
use crate::error::StoretypesError;
use crate::model::GlobalConfig;

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    action: &'a str,
    method: &'a str,
    data: Value,
    #[serde(rename = "type")]
    kind: &'static str,
    tid: u64,
}

#[derive(Debug, Deserialize)]
struct RpcReply {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    tid: Option<u64>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the console's remote-call endpoint.
///
/// Each `read` posts a single RPC envelope and hands back the call's `result`.
pub struct DirectClient {
    http: reqwest::Client,
    endpoint: Url,
    api: ApiMethod,
    credentials: Option<(String, Option<String>)>,
    next_tid: AtomicU64,
}

impl DirectClient {
    pub fn new(
        endpoint: &str,
        api: ApiMethod,
        timeout: Duration,
    ) -> Result<Self, StoretypesError> {
        let endpoint = Url::parse(endpoint).map_err(|e| StoretypesError::InvalidBaseUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(StoretypesError::InvalidBaseUrl {
                url: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", endpoint.scheme()),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("storetypes/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            api,
            credentials: None,
            next_tid: AtomicU64::new(1),
        })
    }

    pub fn from_config(
        config: &GlobalConfig,
        password: Option<String>,
    ) -> Result<Self, StoretypesError> {
        let api: ApiMethod = config.read_api.parse()?;
        let client = Self::new(
            &config.endpoint_url(),
            api,
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(match &config.username {
            Some(user) => client.with_basic_auth(user.clone(), password),
            None => client,
        })
    }

    pub fn with_basic_auth(mut self, username: String, password: Option<String>) -> Self {
        self.credentials = Some((username, password));
        self
    }

    pub fn api(&self) -> &ApiMethod {
        &self.api
    }

    async fn call(&self) -> Result<Value, StoretypesError> {
        let tid = self.next_tid.fetch_add(1, Ordering::Relaxed);
        let envelope = RpcRequest {
            action: &self.api.action,
            method: &self.api.method,
            data: Value::Null,
            kind: "rpc",
            tid,
        };

        debug!(endpoint = %self.endpoint, api = %self.api, tid, "invoking remote read");

        let mut request = self.http.post(self.endpoint.clone()).json(&envelope);
        if let Some((user, password)) = &self.credentials {
            request = request.basic_auth(user, password.as_deref());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), api = %self.api, "remote read rejected");
            return Err(StoretypesError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let reply = parse_reply(&body)?;

        if reply.kind == "exception" {
            return Err(StoretypesError::RemoteException {
                message: reply
                    .message
                    .unwrap_or_else(|| "no message provided".to_string()),
            });
        }
        if reply.tid != Some(tid) {
            return Err(StoretypesError::malformed(format!(
                "reply tid {:?} does not match request tid {tid}",
                reply.tid
            )));
        }

        reply
            .result
            .ok_or_else(|| StoretypesError::malformed("reply has no result"))
    }
}

impl ReadTransport for DirectClient {
    async fn read(&self) -> Result<Value, StoretypesError> {
        self.call().await
    }
}

/// Parse a reply body, accepting either a bare envelope or a batch of exactly one.
fn parse_reply(body: &str) -> Result<RpcReply, StoretypesError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| StoretypesError::malformed(format!("reply is not JSON: {e}")))?;

    let envelope = match value {
        Value::Array(mut batch) => {
            if batch.len() != 1 {
                return Err(StoretypesError::malformed(format!(
                    "expected one reply in batch, got {}",
                    batch.len()
                )));
            }
            batch.remove(0)
        }
        other => other,
    };

    serde_json::from_value(envelope)
        .map_err(|e| StoretypesError::malformed(format!("invalid reply envelope: {e}")))
}
