use crate::uid::Uid;

/// A stored artifact and the analyses requested for it.
///
/// The identifier is derived from the binary unless one has been pinned with
/// [`FileObject::overwrite_uid`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileObject {
    pinned_uid: Option<Uid>,
    derived_uid: Option<Uid>,
    pub file_name: Option<String>,
    binary: Option<Vec<u8>>,
    size: Option<u64>,
    pub is_root: bool,
    pub scheduled_analysis: Vec<String>,
}

impl FileObject {
    pub fn new(scheduled_analysis: Vec<String>, is_root: bool) -> Self {
        Self {
            scheduled_analysis,
            is_root,
            ..Default::default()
        }
    }

    /// Attach a payload and hash it once. Any pinned identifier is dropped so
    /// that the identifier follows the new content.
    pub fn set_binary(&mut self, binary: Vec<u8>) {
        self.size = Some(binary.len() as u64);
        self.derived_uid = Some(Uid::compute(&binary));
        self.binary = Some(binary);
        self.pinned_uid = None;
    }

    /// Pin the identifier, e.g. to reattach to an already stored artifact.
    pub fn overwrite_uid(&mut self, uid: Uid) {
        self.pinned_uid = Some(uid);
    }

    /// The pinned identifier, or the one derived from the binary.
    pub fn uid(&self) -> Option<Uid> {
        self.pinned_uid.clone().or_else(|| self.derived_uid.clone())
    }

    pub fn binary(&self) -> Option<&[u8]> {
        self.binary.as_deref()
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }
}
