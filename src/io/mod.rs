mod csv_io;
mod json_io;
mod excel_io;

use std::path::Path;

use crate::error::FarmError;

pub use csv_io::{
    parse_farms_csv_lenient, read_farms_csv, read_farms_csv_from_bytes, write_farms_csv,
    write_schedule_csv,
};
pub use json_io::{
    read_snapshot_json, read_snapshot_json_from_bytes, write_schedule_json, write_snapshot_json,
    PortalSnapshot,
};
pub use excel_io::write_schedule_excel;

/// Trait for reading admin records from a file.
pub trait RecordReader {
    fn read(&self, path: &Path) -> Result<PortalSnapshot, FarmError>;
}

/// Trait for writing admin records to a file.
pub trait RecordWriter {
    fn write(&self, snapshot: &PortalSnapshot, path: &Path) -> Result<(), FarmError>;
}

/// CSV format reader/writer. CSV carries farms only; partners are not
/// written and read back empty.
pub struct CsvFormat;

impl RecordReader for CsvFormat {
    fn read(&self, path: &Path) -> Result<PortalSnapshot, FarmError> {
        Ok(PortalSnapshot {
            farms: read_farms_csv(path)?,
            partners: Vec::new(),
        })
    }
}

impl RecordWriter for CsvFormat {
    fn write(&self, snapshot: &PortalSnapshot, path: &Path) -> Result<(), FarmError> {
        write_farms_csv(&snapshot.farms, path)
    }
}

/// JSON format reader/writer.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl RecordReader for JsonFormat {
    fn read(&self, path: &Path) -> Result<PortalSnapshot, FarmError> {
        read_snapshot_json(path)
    }
}

impl RecordWriter for JsonFormat {
    fn write(&self, snapshot: &PortalSnapshot, path: &Path) -> Result<(), FarmError> {
        write_snapshot_json(snapshot, path, self.pretty)
    }
}

/// Pick a format from a file extension (`csv` or `json`, case-insensitive).
pub fn format_for_path(path: &Path) -> Result<(Box<dyn RecordReader>, Box<dyn RecordWriter>), FarmError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "csv" => Ok((Box::new(CsvFormat), Box::new(CsvFormat))),
        "json" => Ok((
            Box::new(JsonFormat::default()),
            Box::new(JsonFormat { pretty: true }),
        )),
        other => Err(FarmError::ParseError(format!(
            "Unsupported record file extension '{other}', expected csv or json"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::{sample_farms, sample_partners};

    fn snapshot() -> PortalSnapshot {
        PortalSnapshot {
            farms: sample_farms(),
            partners: sample_partners(),
        }
    }

    #[test]
    fn test_csv_trait_keeps_farms_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");

        let writer: &dyn RecordWriter = &CsvFormat;
        writer.write(&snapshot(), &path).unwrap();

        let reader: &dyn RecordReader = &CsvFormat;
        let loaded = reader.read(&path).unwrap();
        assert_eq!(loaded.farms, sample_farms());
        assert!(loaded.partners.is_empty());
    }

    #[test]
    fn test_json_trait_keeps_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");

        let writer: &dyn RecordWriter = &JsonFormat { pretty: true };
        writer.write(&snapshot(), &path).unwrap();

        let reader: &dyn RecordReader = &JsonFormat::default();
        assert_eq!(reader.read(&path).unwrap(), snapshot());
    }

    #[test]
    fn test_format_for_path() {
        assert!(format_for_path(Path::new("a.CSV")).is_ok());
        assert!(format_for_path(Path::new("a.json")).is_ok());
        assert!(format_for_path(Path::new("a.xlsx")).is_err());
        assert!(format_for_path(Path::new("noext")).is_err());
    }
}
