use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveAttachment, LeaveRequestResponse};
use std::rc::Rc;
use uuid::Uuid;

use super::workflow::{Attachment, LeaveSubmission, SubmissionOutcome};

#[derive(Clone)]
pub struct LeaveIntakeRepository {
    client: Rc<ApiClient>,
}

impl LeaveIntakeRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Hands the submission to the intake endpoint and folds the result into
    /// the outcome the workflow understands.
    pub async fn submit(&self, submission: LeaveSubmission) -> SubmissionOutcome {
        match self.create(submission).await {
            Ok(created) => {
                log::info!(
                    "leave request {} accepted with status {}",
                    created.id,
                    created.status
                );
                SubmissionOutcome::Success
            }
            Err(err) => {
                log::warn!("leave request rejected: {err}");
                SubmissionOutcome::Failure(err.error)
            }
        }
    }

    async fn create(&self, submission: LeaveSubmission) -> Result<LeaveRequestResponse, ApiError> {
        let attachment = match &submission.attachment {
            Some(attachment) => Some(encode_attachment(attachment).await?),
            None => None,
        };
        let payload = CreateLeaveRequest {
            employee_name: submission.employee_name,
            leave_type: submission.leave_type.as_str().to_string(),
            start_date: submission.start_date,
            end_date: submission.end_date,
            reason: submission.reason,
            attachment,
        };
        let idempotency_key = Uuid::new_v4().to_string();
        self.client
            .create_leave_request(&payload, &idempotency_key)
            .await
    }
}

async fn encode_attachment(attachment: &Attachment) -> Result<LeaveAttachment, ApiError> {
    let content_base64 = match attachment.file() {
        Some(file) => Some(read_file_base64(file).await?),
        None => None,
    };
    Ok(LeaveAttachment {
        file_name: attachment.name.clone(),
        content_type: attachment.content_type.clone(),
        size_bytes: attachment.size,
        content_base64,
    })
}

#[cfg(target_arch = "wasm32")]
async fn read_file_base64(file: &web_sys::File) -> Result<String, ApiError> {
    use base64::Engine as _;

    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::unknown(format!("Could not read {}", file.name())))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_file_base64(_file: &web_sys::File) -> Result<String, ApiError> {
    Err(ApiError::unknown("File contents can only be read in the browser"))
}
