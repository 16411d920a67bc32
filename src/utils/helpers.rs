use std::env;
use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose};
use tokio::{fs::File, io::AsyncReadExt};

use crate::error::VerifyError;

pub fn get_content_type(file_path: &Path) -> &'static str {
    match file_path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Expands a leading `~` to `$HOME`. Paths without one, or a missing `HOME`,
/// are returned unchanged.
pub fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return PathBuf::from(raw),
    };
    match env::var("HOME") {
        Ok(home) if !home.is_empty() => {
            PathBuf::from(home).join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(raw),
    }
}

pub async fn read_image_base64(path: &Path) -> Result<String, VerifyError> {
    let read_err = |source| VerifyError::ImageRead {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).await.map_err(read_err)?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents).await.map_err(read_err)?;
    Ok(general_purpose::STANDARD.encode(&contents))
}
