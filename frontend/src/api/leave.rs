use super::{
    client::ApiClient,
    types::{ApiError, CreateLeaveRequest, LeaveRequestResponse},
};

impl ApiClient {
    pub async fn create_leave_request(
        &self,
        request: &CreateLeaveRequest,
        idempotency_key: &str,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let url = self.endpoint("/leave-requests").await;
        let builder = self
            .http_client()
            .post(&url)
            .header("Idempotency-Key", idempotency_key)
            .json(request);
        let response = self.send(builder).await?;
        Self::parse_json(response).await
    }
}
