use crate::api::{ApiError, MedicineApi};
use crate::model::{DetectionId, DetectionRecord, MedicineInfo, UpdateNameRequest, UpdateNameResponse};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Detect(String),
    UpdateName(UpdateNameRequest),
    GetInfo(String),
}

/// Canned-response client that records every call it receives.
pub struct MockApi {
    pub detect_response: Result<DetectionRecord, ApiError>,
    pub update_response: Result<UpdateNameResponse, ApiError>,
    pub info_response: Result<MedicineInfo, ApiError>,
    pub calls: RefCell<Vec<Call>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            detect_response: Err(ApiError::Network("no detect response configured".into())),
            update_response: Ok(UpdateNameResponse { success: true }),
            info_response: Ok(MedicineInfo::default()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl MedicineApi for MockApi {
    type Upload = String;

    async fn detect(&self, upload: &String) -> Result<DetectionRecord, ApiError> {
        self.calls.borrow_mut().push(Call::Detect(upload.clone()));
        self.detect_response.clone()
    }

    async fn update_medicine_name(
        &self,
        request: &UpdateNameRequest,
    ) -> Result<UpdateNameResponse, ApiError> {
        self.calls.borrow_mut().push(Call::UpdateName(request.clone()));
        self.update_response.clone()
    }

    async fn get_medicine_info(&self, medicine_name: &str) -> Result<MedicineInfo, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::GetInfo(medicine_name.to_string()));
        self.info_response.clone()
    }
}

pub fn record(detection_id: i64, medicine_name: &str) -> DetectionRecord {
    DetectionRecord {
        detection_id: Some(DetectionId::from(detection_id)),
        medicine_name: medicine_name.to_string(),
        composition: Some("Unknown".into()),
        side_effects: Some("Not Available".into()),
        is_authentic: true,
        confidence: None,
        image_url: None,
        extra: Default::default(),
    }
}
