//! Browser transport for the employee backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent to the same
//! origin so the server's `/api` proxy forwards them to the backend.
//! Server-side (SSR): every request fails with [`ApiError::Unavailable`];
//! data is only ever fetched after hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use roster::{ApiError, ApiRequest, Gateway, Transport};

use crate::util::session::BrowserTokens;

/// Gateway wired to the browser transport and `localStorage` token.
pub type BrowserGateway = Gateway<BrowserTransport, BrowserTokens>;

pub fn gateway() -> BrowserGateway {
    Gateway::new(BrowserTransport, BrowserTokens)
}

/// Same-origin `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::Status { status, body })
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: &ApiRequest) -> Result<String, ApiError> {
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};
    use roster::Method;

    let method = match request.method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Delete => HttpMethod::DELETE,
    };
    let url = request.path_and_query();
    let mut builder = RequestBuilder::new(&url).method(method);
    if let Some(authorization) = request.authorization() {
        builder = builder.header("Authorization", &authorization);
    }
    let outgoing = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Encode(e.to_string()))?;

    let resp = outgoing
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if status >= 400 {
        log::warn!("{} {url} -> {status}", request.method.as_str());
    }
    check_status(status, body)
}
