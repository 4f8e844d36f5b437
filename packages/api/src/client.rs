//! # Decorating API client
//!
//! Every request goes through [`ApiClient::send`], which
//!
//! 1. adds `Accept: application/json`,
//! 2. reads the bearer token from the [`CredentialStore`] (durable slot first,
//!    then session) and adds `Authorization: Bearer <token>` when one exists,
//! 3. on a `401` answer clears the token from both slots and returns
//!    [`ApiError::Unauthorized`], whatever endpoint was called.
//!
//! There is no retry, backoff or request queue.

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::CredentialStore;

use crate::error::ApiError;
use crate::models::Payload;
use crate::transport::{ApiRequest, ApiResponse, Body, FilePart, HttpTransport, Transport};
use crate::config::ApiConfig;

#[derive(Clone)]
pub struct ApiClient<N: Transport> {
    transport: N,
    credentials: CredentialStore,
}

impl ApiClient<HttpTransport> {
    /// Client over `reqwest` for the configured base URL.
    pub fn http(config: &ApiConfig, credentials: CredentialStore) -> Self {
        Self::new(HttpTransport::new(config), credentials)
    }
}

impl<N: Transport> ApiClient<N> {
    pub fn new(transport: N, credentials: CredentialStore) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn transport(&self) -> &N {
        &self.transport
    }

    /// Send a decorated request and return the successful response.
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        request
            .headers
            .push(("Accept".to_string(), "application/json".to_string()));
        if let Some(token) = self.credentials.get_token() {
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        tracing::debug!(method = ?request.method, path = %request.path, "api request");
        let path = request.path.clone();
        let response = self.transport.send(request).await?;

        if response.status == 401 {
            tracing::warn!(%path, "401 from api, clearing stored token");
            self.credentials.clear_token();
            return Err(ApiError::Unauthorized);
        }
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: error_message(&response.body),
            });
        }
        Ok(response)
    }

    /// `GET` and decode the body, with or without a `data` wrapper.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        let response = self.send(ApiRequest::get(path).with_query(query)).await?;
        decode(&response.body)
    }

    /// `POST` a JSON body and decode the answer.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        let response = self.send(ApiRequest::post(path, Body::Json(body))).await?;
        decode(&response.body)
    }

    /// `POST` a JSON body, ignoring whatever comes back.
    pub async fn post_json_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let body = serde_json::to_value(body)?;
        self.send(ApiRequest::post(path, Body::Json(body))).await?;
        Ok(())
    }

    /// `POST` one file as `multipart/form-data`.
    pub async fn post_file<T: DeserializeOwned>(
        &self,
        path: &str,
        file: FilePart,
    ) -> Result<T, ApiError> {
        let response = self
            .send(ApiRequest::post(path, Body::Multipart(file)))
            .await?;
        decode(&response.body)
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    let payload: Payload<T> = serde_json::from_str(body)?;
    Ok(payload.into_inner())
}

/// The `message` field of an error body, or the body itself.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(String::from))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;
    use store::Persistence;

    fn client() -> (ApiClient<RecordingTransport>, RecordingTransport) {
        let transport = RecordingTransport::new();
        let client = ApiClient::new(transport.clone(), CredentialStore::in_memory());
        (client, transport)
    }

    #[tokio::test]
    async fn test_durable_token_is_attached() {
        let (client, transport) = client();
        client.credentials().set_token("durable", Persistence::Durable);
        client.credentials().set_token("session", Persistence::Session);

        client.send(ApiRequest::get("/user")).await.unwrap();

        let request = transport.last().unwrap();
        assert_eq!(request.header("Authorization"), Some("Bearer durable"));
        assert_eq!(request.header("Accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_session_token_fallback() {
        let (client, transport) = client();
        client.credentials().set_token("tab", Persistence::Session);

        client.send(ApiRequest::get("/user")).await.unwrap();

        assert_eq!(
            transport.last().unwrap().header("Authorization"),
            Some("Bearer tab")
        );
    }

    #[tokio::test]
    async fn test_no_token_no_header() {
        let (client, transport) = client();

        client.send(ApiRequest::get("/servers")).await.unwrap();

        let request = transport.last().unwrap();
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(request.header("Accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_401_clears_both_slots() {
        for path in ["/user", "/servers/top", "/advertisements/banner"] {
            let (client, transport) = client();
            client.credentials().set_token("a", Persistence::Durable);
            client.credentials().set_token("b", Persistence::Session);
            transport.respond(401, r#"{"message":"Unauthenticated."}"#);

            let err = client.send(ApiRequest::get(path)).await.unwrap_err();

            assert_eq!(err, ApiError::Unauthorized);
            assert_eq!(client.credentials().get_token(), None, "{path}");
        }
    }

    #[tokio::test]
    async fn test_other_status_keeps_token() {
        let (client, transport) = client();
        client.credentials().set_token("a", Persistence::Durable);
        transport.respond(422, r#"{"message":"The given data was invalid."}"#);

        let err = client.send(ApiRequest::get("/servers")).await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                message: "The given data was invalid.".to_string()
            }
        );
        assert_eq!(client.credentials().get_token().as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let (client, transport) = client();
        transport.fail(ApiError::Transport("connection refused".to_string()));

        let err = client.send(ApiRequest::get("/servers")).await.unwrap_err();
        assert_eq!(err, ApiError::Transport("connection refused".to_string()));
    }

    #[tokio::test]
    async fn test_get_decodes_wrapped_and_bare() {
        let (client, transport) = client();
        transport.respond(200, r#"{"data":[1,2]}"#).respond(200, "[3]");

        let wrapped: Vec<u8> = client.get("/rates", Vec::new()).await.unwrap();
        let bare: Vec<u8> = client.get("/rates", Vec::new()).await.unwrap();
        assert_eq!(wrapped, vec![1, 2]);
        assert_eq!(bare, vec![3]);
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (client, transport) = client();
        transport.respond(200, "<html>");

        let err = client.get::<Vec<u8>>("/rates", Vec::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message(r#"{"message":"nope"}"#), "nope");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }
}
