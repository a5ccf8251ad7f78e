use common::Uid;

use super::upload::Upload;
use super::{AnalysisTask, TaskMode};
use crate::form::{Dropdowns, SubmissionForm};

/// Release date used when the form leaves the date empty.
pub const DEFAULT_RELEASE_DATE: &str = "1970-01-01";

/// Dropdown choice meaning "use the free-text field instead".
pub const NEW_ENTRY: &str = "new entry";

/// Build the task for a fresh upload.
///
/// `upload` is the `file` part of the request, if one was attached. Its name
/// replaces any `file_name` form field.
pub fn create_analysis_task(form: SubmissionForm, upload: Option<Upload>) -> AnalysisTask {
    let mut task = task_from_form(form, TaskMode::Upload);
    if let Some(upload) = upload {
        task.file_name = Some(upload.file_name);
        task.binary = upload.binary;
    }
    task.uid = uid_of_binary(task.binary.as_deref());
    if task.release_date.is_empty() {
        task.release_date = DEFAULT_RELEASE_DATE.to_string();
    }
    task
}

/// Build the task re-analyzing the already stored firmware `uid`.
pub fn create_re_analyze_task(form: SubmissionForm, uid: Uid) -> AnalysisTask {
    // An absent date counts as empty here, unlike for uploads.
    let date_missing = form.release_date.as_deref().is_none_or(str::is_empty);
    let mut task = task_from_form(form, TaskMode::Reanalysis);
    task.uid = Some(uid);
    if date_missing {
        task.release_date = DEFAULT_RELEASE_DATE.to_string();
    }
    task
}

/// Identifier of a payload, or `None` when there is no non-empty payload.
pub fn uid_of_binary(binary: Option<&[u8]>) -> Option<Uid> {
    binary.filter(|b| !b.is_empty()).map(Uid::compute)
}

fn task_from_form(form: SubmissionForm, mode: TaskMode) -> AnalysisTask {
    let SubmissionForm {
        device_name,
        device_part,
        device_class,
        vendor,
        version,
        release_date,
        tags,
        analysis_systems,
        file_name,
        dropdowns:
            Dropdowns {
                device_class: device_class_dropdown,
                vendor: vendor_dropdown,
                device_name: device_name_dropdown,
                device_part: device_part_dropdown,
            },
    } = form;

    AnalysisTask {
        mode,
        device_name: resolve_dropdown(device_name, device_name_dropdown),
        device_part: resolve_dropdown(device_part, device_part_dropdown),
        device_class: resolve_dropdown(device_class, device_class_dropdown),
        vendor: resolve_dropdown(vendor, vendor_dropdown),
        version,
        release_date: release_date.unwrap_or_default(),
        requested_analysis_systems: analysis_systems,
        tags,
        file_name,
        binary: None,
        uid: None,
    }
}

/// Fall back to the dropdown choice when the free-text value is empty.
pub fn resolve_dropdown(value: String, dropdown: Option<String>) -> String {
    if !value.is_empty() {
        return value;
    }
    match dropdown {
        Some(choice) if choice != NEW_ENTRY => choice,
        _ => value,
    }
}
