use async_trait::async_trait;

/// Storage for uploaded media. Paths returned by uploads are public URLs
/// rooted at `/uploads/`.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Store arbitrary bytes under `folder` and return the public path.
    async fn upload_file(&self, bytes: &[u8], file_name: &str, folder: &str)
    -> Result<String, UploadError>;

    /// Like [`upload_file`](Self::upload_file) but only accepts images whose
    /// content matches their extension.
    async fn upload_image(&self, bytes: &[u8], file_name: &str, folder: &str)
    -> Result<String, UploadError>;

    /// Returns `false` when nothing existed at `path`.
    async fn delete_file(&self, path: &str) -> Result<bool, UploadError>;

    async fn file_exists(&self, path: &str) -> bool;

    async fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>, UploadError>;

    /// Size in bytes, zero when the file is missing.
    async fn file_size(&self, path: &str) -> u64;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Invalid image file type. Allowed types: jpg, jpeg, png, gif, webp, svg")]
    UnsupportedType,

    #[error("File content does not match the expected format for {0} files")]
    ContentMismatch(String),

    #[error("File exceeds the {max_mb} MB limit")]
    TooLarge { max_mb: u64 },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Storage failure: {0}")]
    Io(#[from] std::io::Error),
}
