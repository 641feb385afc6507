//! Fetch key/value client for the stats mirror.
//!
//! Talks to a minimal remote store serving GET and PUT at
//! `{endpoint}/{key}` with JSON bodies; an optional `X-Api-Key` header
//! authenticates. A 404 on GET means no remote state yet, which is not an
//! error.

use gloo::net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug)]
pub enum NetError {
    Transport(gloo::net::Error),
    Status(u16),
}

impl std::fmt::Display for NetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "transport error: {err}"),
            Self::Status(code) => write!(f, "unexpected status {code}"),
        }
    }
}

impl From<gloo::net::Error> for NetError {
    fn from(err: gloo::net::Error) -> Self {
        Self::Transport(err)
    }
}

fn url_for(endpoint: &str, key: &str) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), key)
}

fn with_key(builder: RequestBuilder, api_key: Option<&str>) -> RequestBuilder {
    match api_key {
        Some(key) => builder.header("X-Api-Key", key),
        None => builder,
    }
}

/// Fetch and parse the remote value; `None` when the key does not exist.
pub async fn get_json<T: DeserializeOwned>(
    endpoint: &str,
    key: &str,
    api_key: Option<&str>,
) -> Result<Option<T>, NetError> {
    let response = with_key(Request::get(&url_for(endpoint, key)), api_key)
        .send()
        .await?;
    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(NetError::Status(response.status()));
    }
    Ok(Some(response.json::<T>().await?))
}

/// Overwrite the remote value.
pub async fn put_json<T: Serialize>(
    endpoint: &str,
    key: &str,
    api_key: Option<&str>,
    value: &T,
) -> Result<(), NetError> {
    let response = with_key(Request::put(&url_for(endpoint, key)), api_key)
        .json(value)?
        .send()
        .await?;
    if !response.ok() {
        return Err(NetError::Status(response.status()));
    }
    Ok(())
}
