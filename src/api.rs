/// The authenticated REST invoker underneath every endpoint method.
///
/// One component does all of the HTTP work: join a path suffix onto the
/// configured origin, attach bearer auth, marshal an optional JSON body,
/// perform the call, and hand back either the raw response bytes or a
/// typed decode of them. The endpoint methods in [`crate::client`] are
/// thin façades over [`StApi::call`].
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::errors::StError;

/// Pagination parameters for list endpoints.
///
/// Upstream accepts `limit` (1–20) and `page` (≥ 1). A zero field is
/// unset and is omitted from the query string entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: u32,
    pub page: u32,
}

impl PageQuery {
    pub fn new(limit: u32, page: u32) -> Self {
        Self { limit, page }
    }

    /// Query pairs for the non-zero fields, as decimal integers.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.limit != 0 {
            params.push(("limit", self.limit.to_string()));
        }
        if self.page != 0 {
            params.push(("page", self.page.to_string()));
        }
        params
    }
}

/// The low-level REST invoker for the SpaceTraders API.
///
/// Stateless apart from the configured transport. Cheap to clone and safe
/// for concurrent use; the only shared state is reqwest's connection
/// pool, and no call orders or blocks another.
#[derive(Debug, Clone)]
pub struct StApi {
    http: Client,
    api_base: String,
}

impl StApi {
    /// Create an invoker from an explicit configuration.
    pub fn new(config: ApiConfig) -> Self {
        let http = match config.http {
            Some(client) => client,
            None => Client::builder()
                .timeout(config.timeout)
                .build()
                // builder only fails with a broken TLS backend
                .unwrap_or_else(|_| Client::new()),
        };
        Self {
            http,
            api_base: config.api_base,
        }
    }

    /// The configured origin, version prefix included.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Perform one call and return the status and raw 2xx body bytes.
    ///
    /// `token` is attached as `Authorization: Bearer <token>` when given;
    /// agent registration is the one endpoint that passes `None`. Query
    /// pairs are appended as supplied. A JSON `body` is sent with
    /// `Content-Type: application/json`.
    ///
    /// Non-2xx responses become [`StError::Api`] with the upstream
    /// payload attached verbatim. HTTP 204 is a success with empty bytes;
    /// callers that can legally receive it decode conditionally.
    pub async fn invoke(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        query: &[(&'static str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<(StatusCode, Vec<u8>), StError> {
        debug!(
            "api.invoke method={} path={} query_pairs={} has_body={}",
            method,
            path,
            query.len(),
            body.is_some()
        );
        let url = format!("{}{}", self.api_base, path);

        let mut req = self
            .http
            .request(method, &url)
            .header(ACCEPT, "application/json");
        if let Some(token) = token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.header(CONTENT_TYPE, "application/json").json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            debug!("api.invoke non_success path={} status={}", path, status);
            return Err(StError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        debug!(
            "api.invoke ok path={} status={} body_len={}",
            path,
            status,
            bytes.len()
        );
        Ok((status, bytes.to_vec()))
    }

    /// [`StApi::invoke`] plus a JSON decode of the body into `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        query: &[(&'static str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<T, StError> {
        let (_, bytes) = self.invoke(method, path, token, query, body).await?;
        decode(&bytes)
    }
}

/// Decode a response body, keeping a truncated preview on failure.
pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StError> {
    serde_json::from_slice(bytes).map_err(|e| {
        let preview: String = String::from_utf8_lossy(bytes).chars().take(500).collect();
        StError::Decode(format!("failed to decode response: {e}; body: {preview}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_omits_zero_fields() {
        assert!(PageQuery::default().params().is_empty());
        assert!(PageQuery::new(0, 0).params().is_empty());
    }

    #[test]
    fn page_query_formats_decimal() {
        let params = PageQuery::new(20, 3).params();
        assert_eq!(
            params,
            vec![("limit", "20".to_string()), ("page", "3".to_string())]
        );
    }

    #[test]
    fn page_query_partial() {
        assert_eq!(
            PageQuery::new(5, 0).params(),
            vec![("limit", "5".to_string())]
        );
        assert_eq!(
            PageQuery::new(0, 2).params(),
            vec![("page", "2".to_string())]
        );
    }
}
