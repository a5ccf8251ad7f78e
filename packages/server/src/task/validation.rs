use std::collections::BTreeMap;

use super::{AnalysisTask, TaskMode};

/// Fields that may be left empty.
pub const OPTIONAL_FIELDS: [&str; 2] = ["tags", "device_part"];

/// Report every required field of `task` that is empty.
///
/// Maps the field name to a message for the submitter. An empty map means
/// the task can be converted.
pub fn check_for_errors(task: &AnalysisTask) -> BTreeMap<String, String> {
    carried_fields(task)
        .into_iter()
        .filter(|(field, empty)| *empty && !OPTIONAL_FIELDS.contains(field))
        .map(|(field, _)| {
            (
                field.to_string(),
                format!("Please specify the {}", field.replace('_', " ")),
            )
        })
        .collect()
}

/// The fields a task of this mode carries, with whether each one is empty.
fn carried_fields(task: &AnalysisTask) -> Vec<(&'static str, bool)> {
    let mut fields = vec![
        ("device_name", task.device_name.is_empty()),
        ("device_part", task.device_part.is_empty()),
        ("device_class", task.device_class.is_empty()),
        ("vendor", task.vendor.is_empty()),
        ("version", task.version.is_empty()),
        ("release_date", task.release_date.is_empty()),
        // A list of systems is never considered missing, even when empty.
        ("requested_analysis_systems", false),
        ("tags", task.tags.is_empty()),
    ];
    if let Some(file_name) = &task.file_name {
        fields.push(("file_name", file_name.is_empty()));
    }
    if task.mode == TaskMode::Upload {
        fields.push(("binary", task.binary.as_deref().is_none_or(<[u8]>::is_empty)));
    }
    fields.push((
        "uid",
        task.uid.as_ref().is_none_or(|uid| uid.as_str().is_empty()),
    ));
    fields
}
