//! # ApiClient: HTTP plumbing shared by every resource module
//!
//! One [`ApiClient`] is created at app startup and handed to components
//! through context. It owns three things: the [`reqwest::Client`], the
//! backend base URL, and the current bearer token. The token lives in an
//! `Arc<RwLock<…>>` so every clone sees a login or logout the moment the
//! auth provider applies it; the provider is the only writer.
//!
//! Resource modules ([`crate::auth`], [`crate::projects`], …) add one typed
//! async method per endpoint on top of the verb helpers here. All requests
//! and responses are JSON; non-success responses are reduced to a single
//! display string by [`error_message`].

use std::sync::{Arc, RwLock};

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Client talking to the backend the page was served from, under `/api`.
    #[cfg(target_arch = "wasm32")]
    pub fn same_origin() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        Self::new(format!("{origin}/api"))
    }

    /// Native fallback, used by tooling and tests.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn same_origin() -> Self {
        Self::new("http://localhost:8080/api")
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap() = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = self.apply_auth(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let request = self.client.get(self.build_url(path)).query(query);
        Self::decode(self.send(request).await?).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.client.post(self.build_url(path)).json(body);
        Self::decode(self.send(request).await?).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.client.put(self.build_url(path)).json(body);
        Self::decode(self.send(request).await?).await
    }

    /// POST with a body whose response body we discard.
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let request = self.client.post(self.build_url(path)).json(body);
        self.send(request).await?;
        Ok(())
    }

    /// Body-less POST for action endpoints (`…/block`, `…/approve`).
    pub async fn post_action(&self, path: &str) -> ApiResult<()> {
        let request = self.client.post(self.build_url(path));
        self.send(request).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let request = self.client.delete(self.build_url(path));
        self.send(request).await?;
        Ok(())
    }
}

/// Reduce an error response body to the one string the UI shows.
///
/// Backends in front of this client answer with `{"error": "…"}`, but other
/// layers (proxies, gateways) use `message` or `detail`, or plain text.
/// HTML error pages and huge bodies fall through to a generic message.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message", "detail"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                if !msg.is_empty() {
                    return msg.to_string();
                }
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() <= 300 && !trimmed.starts_with('<') {
        return trimmed.to_string();
    }
    format!("request failed with status {status}")
}

/// Query pairs for list endpoints that filter by object.
pub(crate) fn project_id_query(project_id: Option<i64>) -> Vec<(&'static str, String)> {
    match project_id {
        Some(id) => vec![("project_id", id.to_string())],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8080/api/");
        assert_eq!(
            client.build_url("/auth/me"),
            "http://localhost:8080/api/auth/me"
        );
    }

    #[test]
    fn test_clones_share_token() {
        let client = ApiClient::new("http://x");
        let clone = client.clone();

        client.set_token(Some("t0ken".to_string()));
        assert_eq!(clone.token().as_deref(), Some("t0ken"));

        clone.set_token(None);
        assert!(client.token().is_none());
    }

    #[test]
    fn test_error_message_prefers_json_error_field() {
        let msg = error_message(400, r#"{"error": "Name is required"}"#);
        assert_eq!(msg, "Name is required");
    }

    #[test]
    fn test_error_message_falls_back_to_message_and_detail() {
        assert_eq!(
            error_message(400, r#"{"message": "Bad input"}"#),
            "Bad input"
        );
        assert_eq!(
            error_message(401, r#"{"detail": "Token expired"}"#),
            "Token expired"
        );
    }

    #[test]
    fn test_error_message_uses_plain_text_body() {
        assert_eq!(error_message(500, "boom"), "boom");
    }

    #[test]
    fn test_error_message_generic_for_empty_or_html() {
        assert_eq!(error_message(502, ""), "request failed with status 502");
        assert_eq!(
            error_message(502, "<html><body>Bad Gateway</body></html>"),
            "request failed with status 502"
        );
    }

    #[test]
    fn test_project_id_query() {
        assert!(project_id_query(None).is_empty());
        assert_eq!(
            project_id_query(Some(5)),
            vec![("project_id", "5".to_string())]
        );
    }
}
