//! HTTP Transport
//!
//! Sends the core's requests through `gloo-net` (the browser `fetch` API).

use activity_signup::{ApiRequest, ApiResponse, Method, Transport, TransportError};
use async_trait::async_trait;
use gloo_net::http::Request;

/// localStorage key holding an optional API base override
const API_BASE_KEY: &str = "activity_signup_api_url";

/// Get the API base URL from local storage; empty means same origin
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_default();
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// [`Transport`] over `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(header) = &request.authorization {
            builder = builder.header("Authorization", header);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
