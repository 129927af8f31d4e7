//! Listing image storage.
//!
//! Uploads are delegated to an [`ImageStore`]: a folder-namespaced
//! collaborator enforcing a format allowlist. The default implementation
//! writes to the local media directory served by the HTTP layer.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;

use crate::services::{ServiceError, ServiceResult};

pub const ALLOWED_IMAGE_FORMATS: [&str; 4] = ["jpg", "png", "jpeg", "webp"];
pub const IMAGE_FOLDER: &str = "property-images";
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

pub trait ImageStore {
    /// Persists one image, returning the URL it will be served under.
    fn store(&self, original_name: &str, data: &[u8]) -> ServiceResult<String>;
}

/// Returns the lowercase extension when it is on the allowlist.
pub fn allowed_extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| ALLOWED_IMAGE_FORMATS.contains(&ext.as_str()))
}

/// Stores images under `<root>/property-images/` on the local filesystem.
#[derive(Clone)]
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageStore for LocalImageStore {
    fn store(&self, original_name: &str, data: &[u8]) -> ServiceResult<String> {
        let ext = allowed_extension(original_name).ok_or_else(|| {
            ServiceError::Validation(format!(
                "Unsupported image format; allowed: {}",
                ALLOWED_IMAGE_FORMATS.join(", ")
            ))
        })?;

        if data.len() > MAX_IMAGE_BYTES {
            return Err(ServiceError::Validation(
                "Image exceeds the 10 MiB upload limit".to_string(),
            ));
        }

        let dir = self.root.join(IMAGE_FOLDER);
        fs::create_dir_all(&dir)
            .map_err(|e| ServiceError::Internal(format!("Failed to create media dir: {e}")))?;

        let file_name = format!(
            "{}-{:08x}.{ext}",
            Utc::now().timestamp_millis(),
            rand::random::<u32>()
        );
        fs::write(dir.join(&file_name), data)
            .map_err(|e| ServiceError::Internal(format!("Failed to write image: {e}")))?;

        Ok(format!("/media/{IMAGE_FOLDER}/{file_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_allowlist() {
        assert_eq!(allowed_extension("house.JPG").as_deref(), Some("jpg"));
        assert_eq!(allowed_extension("plan.webp").as_deref(), Some("webp"));
        assert!(allowed_extension("contract.pdf").is_none());
        assert!(allowed_extension("noextension").is_none());
    }

    #[test]
    fn store_rejects_disallowed_format() {
        let dir = std::env::temp_dir();
        let store = LocalImageStore::new(&dir);
        let err = store.store("malware.exe", b"data").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn store_writes_and_returns_served_url() {
        let dir = std::env::temp_dir().join(format!("media-test-{:x}", rand::random::<u32>()));
        let store = LocalImageStore::new(&dir);
        let url = store.store("house.jpg", b"not really a jpeg").unwrap();
        assert!(url.starts_with("/media/property-images/"));
        assert!(url.ends_with(".jpg"));
        let _ = fs::remove_dir_all(&dir);
    }
}
