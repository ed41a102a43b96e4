use crate::api::{ApiError, MedicineApi};
use crate::model::{DetectionId, DetectionRecord, MedicineInfo, UpdateNameRequest};

/// Uploads the selected image once. No retry.
pub async fn run_detection<A: MedicineApi>(
    api: &A,
    upload: &A::Upload,
) -> Result<DetectionRecord, ApiError> {
    log::info!("Submitting image for medicine detection");
    match api.detect(upload).await {
        Ok(record) => {
            log::info!(
                "Detection {} returned '{}'",
                record
                    .detection_id
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                record.medicine_name
            );
            Ok(record)
        }
        Err(e) => {
            log::error!("Medicine detection failed: {}", e);
            Err(e)
        }
    }
}

/// How far a rename got before it stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum RenameStage {
    /// Update accepted and the lookup returned details for the new name.
    Enriched(MedicineInfo),
    /// Update accepted; the follow-up lookup failed.
    EnrichmentFailed(ApiError),
    /// The service answered `success: false`.
    Rejected,
    UpdateFailed(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenameOutcome {
    pub detection_id: DetectionId,
    pub new_name: String,
    pub stage: RenameStage,
}

impl RenameOutcome {
    pub fn accepted(&self) -> bool {
        matches!(
            self.stage,
            RenameStage::Enriched(_) | RenameStage::EnrichmentFailed(_)
        )
    }
}

/// Renames a detection, then refetches details for the new name.
///
/// The lookup only runs once the update reported success. `on_accepted` fires
/// between the two calls so the caller can show the new name optimistically.
pub async fn rename_and_enrich<A, F>(
    api: &A,
    request: UpdateNameRequest,
    on_accepted: F,
) -> RenameOutcome
where
    A: MedicineApi,
    F: FnOnce(&DetectionId, &str),
{
    log::info!(
        "Renaming detection {} to '{}'",
        request.detection_id,
        request.new_name
    );

    let stage = match api.update_medicine_name(&request).await {
        Err(e) => {
            log::error!("Medicine name update failed: {}", e);
            RenameStage::UpdateFailed(e)
        }
        Ok(response) if !response.success => {
            log::warn!("Medicine name update rejected for {}", request.detection_id);
            RenameStage::Rejected
        }
        Ok(_) => {
            on_accepted(&request.detection_id, &request.new_name);
            match api.get_medicine_info(&request.new_name).await {
                Ok(info) => RenameStage::Enriched(info),
                Err(e) => {
                    log::error!(
                        "Fetching details for '{}' failed: {}",
                        request.new_name,
                        e
                    );
                    RenameStage::EnrichmentFailed(e)
                }
            }
        }
    };

    RenameOutcome {
        detection_id: request.detection_id,
        new_name: request.new_name,
        stage,
    }
}
