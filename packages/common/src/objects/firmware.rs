use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::uid::Uid;

/// Descriptive metadata of a submitted firmware image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Firmware {
    /// Identifier of the root file object this metadata belongs to.
    pub uid: Uid,
    #[schema(example = "Router")]
    pub device_class: String,
    #[schema(example = "AVM")]
    pub vendor: String,
    #[schema(example = "FRITZ!Box 7490")]
    pub device_name: String,
    #[schema(example = "7.29")]
    pub version: String,
    #[schema(example = "2021-06-01")]
    pub release_date: String,
    #[schema(example = "kernel")]
    pub device_part: String,
    pub tags: BTreeSet<String>,
}

impl Firmware {
    pub fn new(
        uid: Uid,
        device_class: impl Into<String>,
        vendor: impl Into<String>,
        device_name: impl Into<String>,
        version: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        Self {
            uid,
            device_class: device_class.into(),
            vendor: vendor.into(),
            device_name: device_name.into(),
            version: version.into(),
            release_date: release_date.into(),
            device_part: String::new(),
            tags: BTreeSet::new(),
        }
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }
}
