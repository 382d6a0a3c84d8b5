use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;

use studio_core::ports::{FileStore, UploadError};

const PUBLIC_PREFIX: &str = "uploads";

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Leading bytes each raster format must start with. SVG is text and has no
/// signature to check.
fn signature(extension: &str) -> Option<&'static [u8]> {
    match extension {
        "jpg" | "jpeg" => Some(&[0xFF, 0xD8, 0xFF]),
        "png" => Some(&[0x89, 0x50, 0x4E, 0x47]),
        "gif" => Some(&[0x47, 0x49, 0x46, 0x38]),
        "webp" => Some(&[0x52, 0x49, 0x46, 0x46]),
        _ => None,
    }
}

/// Stores uploads on the local filesystem below `root`, which is served
/// publicly as `/uploads/`.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
    max_bytes: u64,
    max_mb: u64,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>, max_mb: u64) -> Self {
        Self {
            root: root.into(),
            max_bytes: max_mb.saturating_mul(1024 * 1024),
            max_mb,
        }
    }

    /// Maps a public `/uploads/...` path onto the filesystem, refusing
    /// anything that could escape the upload root.
    fn resolve(&self, public_path: &str) -> Result<PathBuf, UploadError> {
        let relative = public_path
            .trim_start_matches('/')
            .strip_prefix(PUBLIC_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(|| UploadError::InvalidPath(public_path.to_owned()))?;

        let mut resolved = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                _ => return Err(UploadError::InvalidPath(public_path.to_owned())),
            }
        }
        Ok(resolved)
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn upload_file(
        &self,
        bytes: &[u8],
        file_name: &str,
        folder: &str,
    ) -> Result<String, UploadError> {
        if bytes.len() as u64 > self.max_bytes {
            return Err(UploadError::TooLarge {
                max_mb: self.max_mb,
            });
        }
        let folder = validate_folder(folder)?;
        let unique = unique_file_name(&sanitize_file_name(file_name));

        let dir = self.root.join(folder);
        fs::create_dir_all(&dir).await?;
        fs::write(dir.join(&unique), bytes).await.inspect_err(|err| {
            tracing::error!(error = %err, file_name, "Error uploading file");
        })?;

        let public_path = format!("/{PUBLIC_PREFIX}/{folder}/{unique}");
        tracing::info!(path = %public_path, size = bytes.len(), "File uploaded");
        Ok(public_path)
    }

    async fn upload_image(
        &self,
        bytes: &[u8],
        file_name: &str,
        folder: &str,
    ) -> Result<String, UploadError> {
        let extension = extension_of(file_name).ok_or(UploadError::UnsupportedType)?;
        if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Err(UploadError::UnsupportedType);
        }

        if let Some(magic) = signature(&extension) {
            if bytes.len() < 4 || !bytes.starts_with(magic) {
                tracing::warn!(%extension, size = bytes.len(), "Image signature check failed");
                return Err(UploadError::ContentMismatch(format!(".{extension}")));
            }
        }

        self.upload_file(bytes, file_name, folder).await
    }

    async fn delete_file(&self, path: &str) -> Result<bool, UploadError> {
        let full = self.resolve(path)?;
        match fs::remove_file(&full).await {
            Ok(()) => {
                tracing::info!(path, "File deleted");
                Ok(true)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    async fn file_exists(&self, path: &str) -> bool {
        match self.resolve(path) {
            Ok(full) => fs::try_exists(full).await.unwrap_or(false),
            Err(_) => false,
        }
    }

    async fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>, UploadError> {
        let full = self.resolve(path)?;
        match fs::read(&full).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn file_size(&self, path: &str) -> u64 {
        let Ok(full) = self.resolve(path) else {
            return 0;
        };
        fs::metadata(full).await.map(|meta| meta.len()).unwrap_or(0)
    }
}

/// Folders are one or more `/`-separated segments of lowercase letters,
/// digits, `-` and `_`.
fn validate_folder(folder: &str) -> Result<&str, UploadError> {
    let folder = folder.trim_matches('/');
    let valid = !folder.is_empty()
        && folder.split('/').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        });
    if valid {
        Ok(folder)
    } else {
        Err(UploadError::InvalidPath(folder.to_owned()))
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Lowercases the name and replaces whitespace, separators and other
/// characters unsafe in file names with `_`.
fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = sanitized.trim_start_matches('.').to_owned();
    if sanitized.is_empty() {
        "file".to_owned()
    } else {
        sanitized
    }
}

/// `{stem}_{yyyyMMddHHmmss}_{8 hex}{.ext}`
fn unique_file_name(sanitized: &str) -> String {
    let path = Path::new(sanitized);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("file");
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    let timestamp = Utc::now().format("%Y%m%d%H%M%S");
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("{stem}_{timestamp}_{}{extension}", &random[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn store() -> LocalFileStore {
        let root = std::env::temp_dir().join(format!("studio-uploads-{}", uuid::Uuid::new_v4()));
        LocalFileStore::new(root, 1)
    }

    #[test]
    fn file_names_are_sanitized() {
        assert_eq!(sanitize_file_name("My Photo (1).PNG"), "my_photo__1_.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("..."), "file");
    }

    #[test]
    fn unique_names_keep_stem_and_extension() {
        let name = unique_file_name("logo.png");
        assert!(name.starts_with("logo_"));
        assert!(name.ends_with(".png"));
        // logo_ + 14 digit timestamp + _ + 8 hex + .png
        assert_eq!(name.len(), "logo_".len() + 14 + 1 + 8 + ".png".len());
    }

    #[tokio::test]
    async fn image_upload_round_trip() {
        let store = store();
        let path = store.upload_image(PNG, "Logo.png", "images").await.unwrap();

        assert!(path.starts_with("/uploads/images/logo_"));
        assert!(store.file_exists(&path).await);
        assert_eq!(store.file_size(&path).await, PNG.len() as u64);
        assert_eq!(store.read_file(&path).await.unwrap().as_deref(), Some(PNG));

        assert!(store.delete_file(&path).await.unwrap());
        assert!(!store.delete_file(&path).await.unwrap());
        assert_eq!(store.read_file(&path).await.unwrap(), None);
    }

    #[tokio::test]
    async fn mismatched_signature_is_rejected() {
        let store = store();
        let err = store
            .upload_image(b"GIF89a..", "fake.png", "images")
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::ContentMismatch(_)));

        let err = store.upload_image(&[0x89, 0x50], "tiny.png", "images").await.unwrap_err();
        assert!(matches!(err, UploadError::ContentMismatch(_)));
    }

    #[tokio::test]
    async fn disallowed_extension_is_rejected() {
        let store = store();
        let err = store
            .upload_image(b"#!/bin/sh", "script.sh", "images")
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType));
    }

    #[tokio::test]
    async fn svg_skips_signature_check() {
        let store = store();
        let path = store
            .upload_image(b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>", "icon.svg", "icons")
            .await
            .unwrap();
        assert!(path.ends_with(".svg"));
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected() {
        let store = store();
        let bytes = vec![0u8; 1024 * 1024 + 1];
        let err = store.upload_file(&bytes, "big.bin", "files").await.unwrap_err();
        assert!(matches!(err, UploadError::TooLarge { max_mb: 1 }));
    }

    #[tokio::test]
    async fn traversal_is_rejected() {
        let store = store();
        assert!(matches!(
            store.upload_file(b"x", "a.txt", "../etc").await.unwrap_err(),
            UploadError::InvalidPath(_)
        ));
        assert!(matches!(
            store.read_file("/uploads/../secret").await.unwrap_err(),
            UploadError::InvalidPath(_)
        ));
        assert!(!store.file_exists("/etc/passwd").await);
    }
}
