use crate::model::{DetectionRecord, MedicineInfo, UpdateNameRequest, UpdateNameResponse};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to build request: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// The three calls the form makes against the detection service.
///
/// `Upload` is whatever handle the caller holds for the selected image; the
/// browser client uses a `gloo_file::File`.
#[allow(async_fn_in_trait)]
pub trait MedicineApi {
    type Upload;

    async fn detect(&self, upload: &Self::Upload) -> Result<DetectionRecord, ApiError>;

    async fn update_medicine_name(
        &self,
        request: &UpdateNameRequest,
    ) -> Result<UpdateNameResponse, ApiError>;

    async fn get_medicine_info(&self, medicine_name: &str) -> Result<MedicineInfo, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_code_and_body() {
        let error = ApiError::Status {
            status: 500,
            body: "Error processing image".into(),
        };
        assert_eq!(error.to_string(), "Server error: 500 - Error processing image");
    }

    #[test]
    fn network_error_display() {
        let error = ApiError::Network("connection refused".into());
        assert_eq!(error.to_string(), "Network error: connection refused");
    }
}
