//! Typed view of the firmware submission form.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Missing form field '{0}'")]
    MissingField(&'static str),
    #[error("Multipart error: {0}")]
    Multipart(String),
}

/// Raw text fields of a multipart submission, in arrival order.
///
/// Keys may repeat; single-valued lookups return the first value.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    values: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<String> {
        self.values
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .collect()
    }

    fn require(&self, name: &'static str) -> Result<String, FormError> {
        self.get(name)
            .map(str::to_string)
            .ok_or(FormError::MissingField(name))
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Which endpoint the form was submitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Upload,
    Reanalysis,
}

/// Companion `<field>_dropdown` values offered next to the free-text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dropdowns {
    pub device_class: Option<String>,
    pub vendor: Option<String>,
    pub device_name: Option<String>,
    pub device_part: Option<String>,
}

/// A parsed submission. Required fields are plain values, so a missing field
/// is reported while parsing rather than while building the task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionForm {
    pub device_name: String,
    pub device_part: String,
    pub device_class: String,
    pub vendor: String,
    pub version: String,
    /// Required for uploads; re-analysis treats an absent date like an empty one.
    pub release_date: Option<String>,
    pub tags: String,
    pub analysis_systems: Vec<String>,
    pub file_name: Option<String>,
    pub dropdowns: Dropdowns,
}

impl SubmissionForm {
    pub fn parse(fields: &FormFields, kind: FormKind) -> Result<Self, FormError> {
        let release_date = match kind {
            FormKind::Upload => Some(fields.require("release_date")?),
            FormKind::Reanalysis => fields.optional("release_date"),
        };

        Ok(Self {
            device_name: fields.require("device_name")?,
            device_part: fields.require("device_part")?,
            device_class: fields.require("device_class")?,
            vendor: fields.require("vendor")?,
            version: fields.require("version")?,
            release_date,
            tags: fields.require("tags")?,
            analysis_systems: fields.get_all("analysis_systems"),
            file_name: fields.optional("file_name"),
            dropdowns: Dropdowns {
                device_class: fields.optional("device_class_dropdown"),
                vendor: fields.optional("vendor_dropdown"),
                device_name: fields.optional("device_name_dropdown"),
                device_part: fields.optional("device_part_dropdown"),
            },
        })
    }
}
