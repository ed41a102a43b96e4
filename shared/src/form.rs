//! State of the upload-and-display form.
//!
//! The component owns one [`FormState`] and swaps it for the value returned by
//! each transition. Transitions never perform I/O; the `begin_*` calls tell the
//! caller whether a request should go out.

use crate::api::ApiError;
use crate::model::{DetectionId, DetectionRecord, UpdateNameRequest};
use crate::pipeline::{RenameOutcome, RenameStage};
use crate::status::StatusMessage;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Name of the file currently held for upload.
    pub selected_file: Option<String>,
    pub detection: Option<DetectionRecord>,
    /// Contents of the rename input.
    pub new_name: String,
    pub status: Option<StatusMessage>,
    /// A detection request is outstanding.
    pub loading: bool,
    /// A rename request is outstanding.
    pub updating_name: bool,
}

/// New state plus the request to send, if the action may proceed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<R> {
    pub state: FormState,
    pub dispatch: Option<R>,
}

impl<R> Transition<R> {
    fn proceed(state: FormState, request: R) -> Self {
        Self {
            state,
            dispatch: Some(request),
        }
    }

    fn refuse(state: FormState) -> Self {
        Self {
            state,
            dispatch: None,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&self, file_name: impl Into<String>) -> Self {
        Self {
            selected_file: Some(file_name.into()),
            ..self.clone()
        }
    }

    pub fn set_new_name(&self, value: impl Into<String>) -> Self {
        Self {
            new_name: value.into(),
            ..self.clone()
        }
    }

    pub fn with_status(&self, status: StatusMessage) -> Self {
        Self {
            status: Some(status),
            ..self.clone()
        }
    }

    pub fn begin_detection(&self) -> Transition<()> {
        if self.selected_file.is_none() {
            return Transition::refuse(self.with_status(StatusMessage::NoFileSelected));
        }
        if self.loading {
            return Transition::refuse(self.with_status(StatusMessage::DetectionInProgress));
        }

        Transition::proceed(
            Self {
                loading: true,
                status: Some(StatusMessage::ProcessingImage),
                ..self.clone()
            },
            (),
        )
    }

    /// Applies the detection response. The loading flag is released whatever
    /// the outcome.
    pub fn finish_detection(&self, outcome: Result<DetectionRecord, ApiError>) -> Self {
        match outcome {
            Ok(record) => Self {
                detection: Some(record),
                status: Some(StatusMessage::DetectionComplete),
                loading: false,
                ..self.clone()
            },
            Err(_) => Self {
                status: Some(StatusMessage::DetectionFailed),
                loading: false,
                ..self.clone()
            },
        }
    }

    pub fn begin_name_update(&self) -> Transition<UpdateNameRequest> {
        if self.updating_name {
            return Transition::refuse(self.with_status(StatusMessage::UpdateInProgress));
        }

        let Some(detection_id) = self
            .detection
            .as_ref()
            .and_then(|record| record.detection_id.clone())
        else {
            return Transition::refuse(self.with_status(StatusMessage::NoDetection));
        };

        let new_name = self.new_name.trim();
        if new_name.is_empty() {
            return Transition::refuse(self.with_status(StatusMessage::MissingName));
        }

        let request = UpdateNameRequest {
            detection_id,
            new_name: new_name.to_string(),
        };
        Transition::proceed(
            Self {
                updating_name: true,
                status: Some(StatusMessage::UpdatingName),
                ..self.clone()
            },
            request,
        )
    }

    /// Optimistically shows the accepted name before details are refetched.
    /// Ignored once a different detection is on screen.
    pub fn name_accepted(&self, detection_id: &DetectionId, new_name: &str) -> Self {
        if !self.shows(detection_id) {
            return self.clone();
        }

        Self {
            detection: self.patch_record(detection_id, |record| record.with_name(new_name)),
            status: Some(StatusMessage::NameUpdated),
            ..self.clone()
        }
    }

    pub fn finish_name_update(&self, outcome: &RenameOutcome) -> Self {
        let id = &outcome.detection_id;
        let name = outcome.new_name.as_str();
        let done = Self {
            updating_name: false,
            ..self.clone()
        };

        match &outcome.stage {
            RenameStage::Enriched(info) => Self {
                detection: done.patch_record(id, |record| record.with_name(name).with_info(info)),
                new_name: String::new(),
                status: Some(StatusMessage::NameUpdated),
                ..done
            },
            RenameStage::EnrichmentFailed(_) => Self {
                detection: done.patch_record(id, |record| record.with_name(name)),
                status: Some(StatusMessage::DetailsUnavailable),
                ..done
            },
            RenameStage::Rejected => done.with_status(StatusMessage::NameRejected),
            RenameStage::UpdateFailed(_) => done.with_status(StatusMessage::NameUpdateFailed),
        }
    }

    fn shows(&self, detection_id: &DetectionId) -> bool {
        self.detection
            .as_ref()
            .and_then(|record| record.detection_id.as_ref())
            == Some(detection_id)
    }

    /// Applies `patch` only if the displayed record is the one the request
    /// was made for; a newer detection is left alone.
    fn patch_record<F>(&self, detection_id: &DetectionId, patch: F) -> Option<DetectionRecord>
    where
        F: FnOnce(&DetectionRecord) -> DetectionRecord,
    {
        self.detection.as_ref().map(|record| {
            if record.detection_id.as_ref() == Some(detection_id) {
                patch(record)
            } else {
                record.clone()
            }
        })
    }
}
