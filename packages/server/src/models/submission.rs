use common::{FileObject, Firmware, Uid};
use serde::Serialize;

/// Response DTO for an accepted upload or re-analysis.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SubmissionResponse {
    /// Identifier of the firmware the analyses were scheduled for.
    pub uid: Uid,
    /// File name recorded for the firmware image.
    #[schema(example = "FRITZ.Box_7490.bin")]
    pub file_name: Option<String>,
    /// Analysis systems scheduled, in request order.
    #[schema(example = json!(["file_type", "crypto_material"]))]
    pub requested_analysis_systems: Vec<String>,
}

impl SubmissionResponse {
    pub fn new(fo: &FileObject, fw: &Firmware) -> Self {
        Self {
            uid: fw.uid.clone(),
            file_name: fo.file_name.clone(),
            requested_analysis_systems: fo.scheduled_analysis.clone(),
        }
    }
}

/// Response DTO for a stored firmware.
#[derive(Serialize, utoipa::ToSchema)]
pub struct FirmwareResponse {
    #[serde(flatten)]
    pub firmware: Firmware,
    /// Analysis systems most recently scheduled.
    pub scheduled_analysis: Vec<String>,
}
