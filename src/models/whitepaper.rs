use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata of the most recently uploaded whitepaper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhitepaperRecord {
    pub file_name: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl WhitepaperRecord {
    /// Size in KiB, for display.
    pub fn size_kib(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_kib() {
        let rec = WhitepaperRecord {
            file_name: "whitepaper.pdf".to_string(),
            size_bytes: 2048,
            uploaded_at: Utc::now(),
        };
        assert!((rec.size_kib() - 2.0).abs() < f64::EPSILON);
    }
}
