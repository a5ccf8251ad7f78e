use std::io;
use std::path::Path;

use axum::extract::multipart::Field;
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// File name recorded when the uploaded part does not carry one.
pub const NO_NAME: &str = "no name";

const UPLOAD_DIR_PREFIX: &str = "upload_";
const UPLOAD_FILE_NAME: &str = "upload.bin";

/// An uploaded file that can be written to disk.
pub trait UploadSource {
    /// Original name of the file as sent by the client.
    fn file_name(&self) -> Option<&str>;

    /// Write the whole payload to `path`.
    fn save_to(self, path: &Path) -> impl Future<Output = io::Result<()>> + Send;
}

/// The `file` part of a multipart request, limited to `max_size` bytes.
pub struct MultipartUpload<'a> {
    field: Field<'a>,
    max_size: u64,
}

impl<'a> MultipartUpload<'a> {
    pub fn new(field: Field<'a>, max_size: u64) -> Self {
        Self { field, max_size }
    }
}

impl UploadSource for MultipartUpload<'_> {
    fn file_name(&self) -> Option<&str> {
        self.field.file_name()
    }

    async fn save_to(mut self, path: &Path) -> io::Result<()> {
        let mut file = tokio::fs::File::create(path).await?;
        let mut total_size: u64 = 0;

        while let Some(chunk) = self
            .field
            .chunk()
            .await
            .map_err(|e| io::Error::other(e.to_string()))?
        {
            total_size += chunk.len() as u64;
            if total_size > self.max_size {
                return Err(io::Error::other(format!(
                    "file exceeds maximum size of {} bytes",
                    self.max_size
                )));
            }
            file.write_all(&chunk).await?;
        }

        file.flush().await
    }
}

/// Name and payload of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    /// `None` when the payload could not be saved or read back.
    pub binary: Option<Vec<u8>>,
}

/// Materialize an upload in a fresh directory below `tmp_root` and read it
/// back into memory.
///
/// The directory is removed before returning, whether saving succeeded or
/// not. Failures are logged and reported as a missing binary.
pub async fn read_upload<S: UploadSource>(source: S, tmp_root: &Path) -> Upload {
    let file_name = source
        .file_name()
        .map(str::to_string)
        .unwrap_or_else(|| NO_NAME.to_string());
    let binary = save_and_read(source, tmp_root).await;
    Upload { file_name, binary }
}

async fn save_and_read<S: UploadSource>(source: S, tmp_root: &Path) -> Option<Vec<u8>> {
    let root = tmp_root.to_path_buf();
    let created = tokio::task::spawn_blocking(move || {
        tempfile::Builder::new()
            .prefix(UPLOAD_DIR_PREFIX)
            .tempdir_in(root)
    })
    .await
    .map_err(io::Error::other)
    .and_then(|dir| dir);
    // The guard removes the directory on drop if close is never reached.
    let tmp_dir = match created {
        Ok(dir) => dir,
        Err(e) => {
            warn!(tmp_root = %tmp_root.display(), "Failed to create upload directory: {e}");
            return None;
        }
    };
    let tmp_path = tmp_dir.path().join(UPLOAD_FILE_NAME);

    let result = async {
        source.save_to(&tmp_path).await?;
        tokio::fs::read(&tmp_path).await
    }
    .await;

    let removed = tokio::task::spawn_blocking(move || tmp_dir.close())
        .await
        .map_err(io::Error::other)
        .and_then(|closed| closed);
    if let Err(e) = removed {
        warn!("Failed to remove upload directory: {e}");
    }

    match result {
        Ok(binary) => Some(binary),
        Err(e) => {
            warn!("Could not save uploaded file, continuing without binary: {e}");
            None
        }
    }
}
