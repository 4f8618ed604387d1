use crate::config::Settings;
use actix_multipart::form::tempfile::TempFile;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where uploaded images land under the disk strategy, relative to the
/// working directory. Also the public route they are served from.
pub const UPLOAD_DIR: &str = "uploads";

/// How uploaded images are turned into the `image_url` value that gets
/// persisted. The strategy is fixed per build: files under `uploads/` by
/// default, self-contained `data:` URIs with the `inline-images` feature.
#[derive(Debug, Clone)]
pub enum ImageStore {
    Disk { dir: PathBuf, base_url: String },
    Inline,
}

impl ImageStore {
    /// Creates the upload directory when the build stores images on disk.
    pub fn from_settings(settings: &Settings) -> io::Result<Self> {
        if cfg!(feature = "inline-images") {
            Ok(ImageStore::Inline)
        } else {
            let dir = PathBuf::from(UPLOAD_DIR);
            fs::create_dir_all(&dir)?;
            Ok(ImageStore::Disk {
                dir,
                base_url: settings.base_url.clone(),
            })
        }
    }

    /// The directory to mount as a static route, when there is one.
    pub fn served_dir(&self) -> Option<&Path> {
        match self {
            ImageStore::Disk { dir, .. } => Some(dir),
            ImageStore::Inline => None,
        }
    }

    /// Ingests one uploaded file and returns the URL to persist.
    pub fn store(&self, upload: &TempFile) -> io::Result<String> {
        match self {
            ImageStore::Disk { dir, base_url } => {
                let filename = unique_filename(upload.file_name.as_deref());
                fs::copy(upload.file.path(), dir.join(&filename))?;
                Ok(format!("{}/{}/{}", base_url, UPLOAD_DIR, filename))
            }
            ImageStore::Inline => {
                let bytes = fs::read(upload.file.path())?;
                let mime = upload
                    .content_type
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                Ok(format!("data:{};base64,{}", mime, BASE64.encode(bytes)))
            }
        }
    }
}

/// Timestamp-prefixed upload name. Only the final path component of the
/// client-supplied filename is kept.
fn unique_filename(original: Option<&str>) -> String {
    let base = original
        .map(Path::new)
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("upload");
    format!("{}-{}", Utc::now().timestamp_millis(), base)
}
