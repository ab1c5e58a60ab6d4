//! Backend API client implementation.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use queueboard_core::{QueueRecord, ShopRecord, UserRecord};

use crate::backend::BackendError;
use crate::config::BackendConfig;

/// Client for the queue-platform backend API.
///
/// Cheap to clone; the underlying `reqwest::Client` is pooled.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

/// Wrapper for the backend's `data` envelope around list responses.
#[derive(Debug, Deserialize)]
struct ApiListResponse<T> {
    data: Vec<T>,
}

/// Wrapper for the backend's `data` envelope around the login response.
#[derive(Debug, Deserialize)]
struct ApiLoginResponse {
    data: LoginData,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
}

impl BackendClient {
    /// Create a new backend API client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        let base_url = config.base_url.as_str().trim_end_matches('/').to_string();

        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Api` when the backend rejects the credentials
    /// and `BackendError::Parse` when the body does not match the login
    /// envelope.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, BackendError> {
        let url = format!("{}/login", self.base_url);
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let login: ApiLoginResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        Ok(login.data.token)
    }

    /// Fetch all shops, including soft-deleted rows.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body
    /// that fails the `ShopRecord` schema.
    pub async fn shops_with_trashed(&self, token: &str) -> Result<Vec<ShopRecord>, BackendError> {
        self.get_list("/shops/withTrashed", token).await
    }

    /// Fetch all users, including soft-deleted rows.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body
    /// that fails the `UserRecord` schema.
    pub async fn users_with_trashed(&self, token: &str) -> Result<Vec<UserRecord>, BackendError> {
        self.get_list("/users/withTrashed", token).await
    }

    /// Fetch every queue across all shops.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body
    /// that fails the `QueueRecord` schema.
    pub async fn all_queues(&self, token: &str) -> Result<Vec<QueueRecord>, BackendError> {
        self.get_list("/queues/getAllQueuesAllShops", token).await
    }

    /// Issue an authenticated GET and unwrap the `data` envelope.
    #[instrument(skip(self, token))]
    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<Vec<T>, BackendError> {
        let url = format!("{}{path}", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .bearer_auth(token)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let list: ApiListResponse<T> = response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        Ok(list.data)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;

    fn client_for(server: &mockito::ServerGuard) -> BackendClient {
        let config = BackendConfig {
            base_url: url::Url::parse(&server.url()).unwrap(),
        };
        BackendClient::new(&config)
    }

    fn shop_json(id: i64, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "email": "owner@example.com",
            "address": "1 Road",
            "phone": "021111111",
            "is_verified": true,
            "image_url": "",
            "is_open": true,
            "latitude": 13.75,
            "longitude": 100.5,
            "description": "",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-02T00:00:00Z",
            "deleted_at": null
        })
    }

    #[tokio::test]
    async fn test_shops_with_trashed_unwraps_data_envelope() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/shops/withTrashed")
            .match_header("authorization", "Bearer token-1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({"data": [shop_json(1, "A"), shop_json(2, "B")]}).to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let shops = client.shops_with_trashed("token-1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(shops.len(), 2);
        assert_eq!(shops[0].name, "A");
    }

    #[tokio::test]
    async fn test_get_list_maps_non_2xx_to_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/withTrashed")
            .with_status(500)
            .with_body("server exploded")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.users_with_trashed("token-1").await.unwrap_err();

        match err {
            BackendError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "server exploded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_list_rejects_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/queues/getAllQueuesAllShops")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data": [{"id": "not-a-number"}]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.all_queues("token-1").await.unwrap_err();

        assert!(matches!(err, BackendError::Parse(_)));
    }

    #[tokio::test]
    async fn test_login_returns_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data": {"token": "bearer-xyz"}}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let token = client.login("admin@example.com", "secret").await.unwrap();
        assert_eq!(token, "bearer-xyz");
    }

    #[tokio::test]
    async fn test_login_maps_rejection_to_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/login")
            .with_status(401)
            .with_body("invalid credentials")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.login("admin@example.com", "wrong").await.unwrap_err();

        assert!(matches!(err, BackendError::Api { status: 401, .. }));
    }
}
