//! Request-scoped analysis tasks: building them from a submitted form,
//! validating them and converting them into domain objects.

pub mod builder;
pub mod convert;
pub mod upload;
pub mod validation;

use common::Uid;
use thiserror::Error;

pub use builder::{create_analysis_task, create_re_analyze_task};
pub use convert::convert_analysis_task;
pub use validation::check_for_errors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskMode {
    /// A new firmware image was uploaded.
    Upload,
    /// New analyses for an already stored firmware.
    Reanalysis,
}

/// Everything needed to schedule one submission.
///
/// In upload mode `uid` is set exactly when `binary` holds a non-empty
/// payload. In re-analysis mode `uid` is the caller-supplied identifier and
/// there is no binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTask {
    pub mode: TaskMode,
    pub device_name: String,
    pub device_part: String,
    pub device_class: String,
    pub vendor: String,
    pub version: String,
    pub release_date: String,
    pub requested_analysis_systems: Vec<String>,
    /// Comma-separated.
    pub tags: String,
    pub file_name: Option<String>,
    pub binary: Option<Vec<u8>>,
    pub uid: Option<Uid>,
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task does not resolve to a firmware identifier")]
    MissingUid,
}
