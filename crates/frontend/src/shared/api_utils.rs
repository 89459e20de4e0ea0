//! API utilities for frontend-backend communication
//!
//! The console is served by the same host as the REST API, so every URL is
//! built from the current window location.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Get the base URL for API requests
///
/// # Returns
/// - Origin like "https://hv01.local:10080"
/// - Empty string if window is not available (relative URLs still work)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/instance");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request described independently of the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    fn builder(&self) -> RequestBuilder {
        let url = api_url(&self.path);
        match self.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
    }

    pub async fn send(&self) -> Result<gloo_net::http::Response, String> {
        let builder = self.builder().header("Accept", "application/json");
        let response = match &self.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| format!("Failed to serialize request: {}", e))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "{:?} {} failed: {}",
                self.method,
                self.path,
                response.status()
            ));
        }
        Ok(response)
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self) -> Result<T, String> {
        self.send()
            .await?
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

/// Sends every request in the background. Failures are logged and dropped.
pub fn fire_and_forget(requests: Vec<ApiRequest>) {
    if requests.is_empty() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        for request in requests {
            if let Err(e) = request.send().await {
                log::warn!("{}", e);
            }
        }
    });
}

/// `/api/{resource}/{id}` with the id escaped.
pub fn item_path(resource: &str, id: &str) -> String {
    format!("/api/{}/{}", resource, urlencoding::encode(id))
}
