use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoretypesError {
    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory: {path}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to determine data directory; set XDG_DATA_HOME or --data-dir")]
    DataDirNotFound,

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid API name '{name}': expected <action>.<method>")]
    InvalidApiName { name: String },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request to remote endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("remote call raised an exception: {message}")]
    RemoteException { message: String },

    #[error("remote read reported failure{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    RemoteFailure { message: Option<String> },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },
}

impl StoretypesError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }
}
