use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::error::FarmError;
use crate::models::WhitepaperRecord;

/// Limits and simulated latency for whitepaper uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: u64,
    pub delay: Duration,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            delay: Duration::from_millis(2000),
        }
    }
}

/// Check a whitepaper file and "upload" it after the policy's delay.
///
/// Only the metadata is kept; the file itself is never copied anywhere.
pub async fn upload_whitepaper(
    path: impl AsRef<Path>,
    policy: &UploadPolicy,
) -> Result<WhitepaperRecord, FarmError> {
    let path = path.as_ref();

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| FarmError::Upload(format!("{} has no file name", path.display())))?
        .to_string();

    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        warn!(file = %file_name, "rejected non-PDF whitepaper");
        return Err(FarmError::Upload(format!(
            "{file_name}: only .pdf whitepapers are accepted"
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(FarmError::Upload(format!("{file_name} is not a regular file")));
    }
    let size_bytes = metadata.len();
    if size_bytes == 0 {
        return Err(FarmError::Upload(format!("{file_name} is empty")));
    }
    if size_bytes > policy.max_bytes {
        return Err(FarmError::Upload(format!(
            "{file_name} is {size_bytes} bytes, limit is {}",
            policy.max_bytes
        )));
    }

    tokio::time::sleep(policy.delay).await;

    info!(file = %file_name, size_bytes, "whitepaper uploaded");
    Ok(WhitepaperRecord {
        file_name,
        size_bytes,
        uploaded_at: Utc::now(),
    })
}
