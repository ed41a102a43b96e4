use strum::Display;

/// User-facing status line shown under the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatusMessage {
    #[strum(to_string = "Please upload an image file.")]
    NoFileSelected,
    #[strum(to_string = "No valid image files selected.")]
    NoImageSelected,
    #[strum(to_string = "Processing image...")]
    ProcessingImage,
    #[strum(to_string = "Detection complete.")]
    DetectionComplete,
    #[strum(to_string = "Error occurred during medicine detection.")]
    DetectionFailed,
    #[strum(to_string = "A detection is already in progress.")]
    DetectionInProgress,
    #[strum(to_string = "Detect a medicine before updating its name.")]
    NoDetection,
    #[strum(to_string = "Please enter a new medicine name.")]
    MissingName,
    #[strum(to_string = "Updating medicine name...")]
    UpdatingName,
    #[strum(to_string = "A name update is already in progress.")]
    UpdateInProgress,
    #[strum(to_string = "Medicine name updated successfully.")]
    NameUpdated,
    #[strum(to_string = "The server rejected the new medicine name.")]
    NameRejected,
    #[strum(to_string = "Failed to update medicine name.")]
    NameUpdateFailed,
    #[strum(to_string = "Medicine name updated, but fetching medicine details failed.")]
    DetailsUnavailable,
}

impl StatusMessage {
    /// Whether the message reports a problem rather than progress.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            StatusMessage::NoFileSelected
                | StatusMessage::NoImageSelected
                | StatusMessage::DetectionFailed
                | StatusMessage::DetectionInProgress
                | StatusMessage::NoDetection
                | StatusMessage::MissingName
                | StatusMessage::UpdateInProgress
                | StatusMessage::NameRejected
                | StatusMessage::NameUpdateFailed
                | StatusMessage::DetailsUnavailable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_user_text() {
        assert_eq!(StatusMessage::NoFileSelected.to_string(), "Please upload an image file.");
        assert_eq!(StatusMessage::MissingName.to_string(), "Please enter a new medicine name.");
        assert_eq!(
            StatusMessage::DetectionFailed.to_string(),
            "Error occurred during medicine detection."
        );
    }

    #[test]
    fn progress_messages_are_not_errors() {
        assert!(!StatusMessage::ProcessingImage.is_error());
        assert!(!StatusMessage::DetectionComplete.is_error());
        assert!(!StatusMessage::NameUpdated.is_error());
        assert!(StatusMessage::NameUpdateFailed.is_error());
    }
}
