use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";
pub const DEFAULT_ENDPOINT_PATH: &str = "/service/extdirect";
pub const DEFAULT_READ_API: &str = "coreui_Datastore.readTypes";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlobalConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,
    #[serde(default = "default_read_api")]
    pub read_api: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_endpoint_path() -> String {
    DEFAULT_ENDPOINT_PATH.to_string()
}

fn default_read_api() -> String {
    DEFAULT_READ_API.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint_path: default_endpoint_path(),
            read_api: default_read_api(),
            timeout_secs: default_timeout(),
            username: None,
        }
    }
}

impl GlobalConfig {
    /// Full URL of the remote-call endpoint.
    pub fn endpoint_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.endpoint_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
