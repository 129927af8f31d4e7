//! Auth API wrapper.
//!
//! Required fields are validated locally before any request is made, so
//! callers always receive the same `{message}` shape for missing input and
//! for server-side failures.

use crate::client::ClientError;
use crate::client::properties::error_from_response;
use crate::dto::auth::SessionResponse;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            token: None,
        }
    }

    /// Token used for the authenticated endpoints.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    fn bearer(&self) -> Result<&str, ClientError> {
        self.token
            .as_deref()
            .ok_or_else(|| ClientError::new("Not logged in."))
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionResponse, ClientError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ClientError::new("Name, email, and password are required."));
        }

        let response = self
            .http
            .post(format!("{}/api/auth/register", self.base_url))
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let session = response.json::<SessionResponse>().await?;
        self.token = Some(session.token.clone());
        Ok(session)
    }

    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<SessionResponse, ClientError> {
        if email.is_empty() || password.is_empty() {
            return Err(ClientError::new("Email and password are required."));
        }

        let response = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let session = response.json::<SessionResponse>().await?;
        self.token = Some(session.token.clone());
        Ok(session)
    }

    pub async fn get_profile(&self) -> Result<User, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/auth/me", self.base_url))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json::<User>().await?)
    }

    pub async fn update_profile(&self, username: &str, email: &str) -> Result<User, ClientError> {
        if username.is_empty() || email.is_empty() {
            return Err(ClientError::new("Username and email are required."));
        }

        let response = self
            .http
            .put(format!("{}/api/auth/profile", self.base_url))
            .bearer_auth(self.bearer()?)
            .json(&serde_json::json!({
                "username": username,
                "email": email,
            }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json::<User>().await?)
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ClientError> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(ClientError::new("Current and new password are required."));
        }

        let response = self
            .http
            .put(format!("{}/api/auth/change-password", self.base_url))
            .bearer_auth(self.bearer()?)
            .json(&serde_json::json!({
                "currentPassword": current_password,
                "newPassword": new_password,
            }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }
}
