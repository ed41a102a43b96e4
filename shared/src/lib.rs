//! Client-side core of the MedScan drug authentication form.
//!
//! Everything here is target independent: the wire types exchanged with the
//! detection service, the [`MedicineApi`] seam the browser client implements,
//! the two request pipelines and the [`FormState`] transitions the Yew
//! component applies as results arrive.

pub mod api;
pub mod config;
pub mod form;
pub mod model;
pub mod pipeline;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiError, MedicineApi};
pub use config::{ApiConfig, DEFAULT_API_BASE_URL, DETECT_UPLOAD_FIELD};
pub use form::{FormState, Transition};
pub use model::{DetectionId, DetectionRecord, MedicineInfo, UpdateNameRequest, UpdateNameResponse};
pub use pipeline::{rename_and_enrich, run_detection, RenameOutcome, RenameStage};
pub use status::StatusMessage;
