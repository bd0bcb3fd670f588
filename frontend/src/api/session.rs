use reqwest::StatusCode;

use super::{
    client::ApiClient,
    types::{ApiError, SessionResponse},
};

impl ApiClient {
    /// `Ok(None)` means the server answered but no session exists.
    pub async fn get_session(&self) -> Result<Option<SessionResponse>, ApiError> {
        let url = self.endpoint("/auth/session").await;
        let response = self.send(self.http_client().get(&url)).await?;
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => Ok(None),
            _ => Self::parse_json(response).await.map(Some),
        }
    }

    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/logout").await;
        let response = self
            .send(self.http_client().post(&url).json(&serde_json::json!({})))
            .await?;
        // An already expired session is as good as a revoked one.
        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(());
        }
        Self::expect_success(response).await
    }
}
