pub mod client;

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use serde_json::Value;

use crate::error::StoretypesError;

pub use client::DirectClient;

/// Namespace prefix the console puts in front of remote-call names.
const DIRECT_NAMESPACE: &str = "NX.direct.";

/// A remote read operation taking no parameters.
///
/// Implementations return the raw `result` object of the call; shaping it into
/// records is the reader's job.
pub trait ReadTransport {
    fn read(&self) -> impl Future<Output = Result<Value, StoretypesError>> + Send;
}

/// Remote procedure name, `<action>.<method>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiMethod {
    pub action: String,
    pub method: String,
}

impl FromStr for ApiMethod {
    type Err = StoretypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed.strip_prefix(DIRECT_NAMESPACE).unwrap_or(trimmed);
        let invalid = || StoretypesError::InvalidApiName {
            name: s.to_string(),
        };

        let (action, method) = name.split_once('.').ok_or_else(invalid)?;
        let valid_part = |p: &str| {
            !p.is_empty() && p.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        };
        if !valid_part(action) || !valid_part(method) {
            return Err(invalid());
        }

        Ok(Self {
            action: action.to_string(),
            method: method.to_string(),
        })
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.action, self.method)
    }
}
