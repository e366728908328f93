use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::ScheduleRow;
use crate::error::FarmError;
use crate::models::{Farm, Partner};

/// Every admin-managed record, as exported and imported in one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalSnapshot {
    #[serde(default)]
    pub farms: Vec<Farm>,
    #[serde(default)]
    pub partners: Vec<Partner>,
}

impl PortalSnapshot {
    /// Validate every record. Returns the first problem found.
    pub fn validate(&self) -> Result<(), FarmError> {
        for farm in &self.farms {
            farm.validate()?;
        }
        for partner in &self.partners {
            partner.validate()?;
        }
        Ok(())
    }
}

/// Read a snapshot from a JSON file.
pub fn read_snapshot_json(path: impl AsRef<Path>) -> Result<PortalSnapshot, FarmError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let snapshot: PortalSnapshot = serde_json::from_str(&content)?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Read a snapshot from JSON bytes.
pub fn read_snapshot_json_from_bytes(data: &[u8]) -> Result<PortalSnapshot, FarmError> {
    let content = std::str::from_utf8(data)
        .map_err(|e| FarmError::ParseError(format!("Invalid UTF-8: {e}")))?;
    let snapshot: PortalSnapshot = serde_json::from_str(content)?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Write a snapshot to a JSON file.
pub fn write_snapshot_json(
    snapshot: &PortalSnapshot,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), FarmError> {
    let content = if pretty {
        serde_json::to_string_pretty(snapshot)?
    } else {
        serde_json::to_string(snapshot)?
    };
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}

/// Write a growth schedule to a pretty-printed JSON array.
pub fn write_schedule_json(schedule: &[ScheduleRow], path: impl AsRef<Path>) -> Result<(), FarmError> {
    std::fs::write(path.as_ref(), serde_json::to_string_pretty(schedule)?)?;
    Ok(())
}
