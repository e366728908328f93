use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use uuid::Uuid;

use crate::analysis::ScheduleRow;
use crate::error::FarmError;
use crate::models::{Farm, FarmStatus, ValidationIssue};

/// CSV row structure for farm records.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct FarmRow {
    /// Blank on hand-written imports; a fresh id is assigned.
    id: Option<Uuid>,
    name: String,
    location: String,
    area_hectares: f64,
    plant_count: u32,
    tokens_issued: u32,
    token_price: f64,
    status: String,
    established_year: Option<u16>,
    description: Option<String>,
}

impl FarmRow {
    fn from_farm(farm: &Farm) -> Self {
        Self {
            id: Some(farm.id),
            name: farm.name.clone(),
            location: farm.location.clone(),
            area_hectares: farm.area_hectares,
            plant_count: farm.plant_count,
            tokens_issued: farm.tokens_issued,
            token_price: farm.token_price,
            status: farm.status.to_string(),
            established_year: farm.established_year,
            description: Some(farm.description.clone()).filter(|d| !d.is_empty()),
        }
    }

    fn into_farm(self, status: FarmStatus) -> Farm {
        Farm {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            location: self.location,
            area_hectares: self.area_hectares,
            plant_count: self.plant_count,
            tokens_issued: self.tokens_issued,
            token_price: self.token_price,
            status,
            established_year: self.established_year,
            description: self.description.unwrap_or_default(),
        }
    }
}

fn reader<R: Read>(data: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(data)
}

/// Farm rows with every field trimmed except `description`, which is kept
/// verbatim so exported text reads back unchanged.
fn farm_rows<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> Result<impl Iterator<Item = Result<FarmRow, csv::Error>> + '_, FarmError> {
    let headers = rdr.headers()?.clone();
    let verbatim = headers.iter().position(|h| h == "description");
    Ok(rdr.records().map(move |result| {
        let record = result?;
        let mut fields: StringRecord = record
            .iter()
            .enumerate()
            .map(|(i, field)| if Some(i) == verbatim { field } else { field.trim() })
            .collect();
        fields.set_position(record.position().cloned());
        fields.deserialize(Some(&headers))
    }))
}

fn parse_farms_strict<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<Farm>, FarmError> {
    let mut farms = Vec::new();
    for result in farm_rows(rdr)? {
        let row = result?;
        let status: FarmStatus = row.status.parse()?;
        let farm = row.into_farm(status);
        farm.validate()?;
        farms.push(farm);
    }
    Ok(farms)
}

/// Read farm records from a CSV file. The first malformed or invalid row is an error.
pub fn read_farms_csv(path: impl AsRef<Path>) -> Result<Vec<Farm>, FarmError> {
    let file = std::fs::File::open(path.as_ref())?;
    parse_farms_strict(&mut reader(file))
}

/// Read farm records from CSV bytes.
pub fn read_farms_csv_from_bytes(data: &[u8]) -> Result<Vec<Farm>, FarmError> {
    parse_farms_strict(&mut reader(data))
}

/// Write farm records to a CSV file.
pub fn write_farms_csv(farms: &[Farm], path: impl AsRef<Path>) -> Result<(), FarmError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for farm in farms {
        wtr.serialize(FarmRow::from_farm(farm))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a growth schedule to a CSV file, one row per year.
pub fn write_schedule_csv(schedule: &[ScheduleRow], path: impl AsRef<Path>) -> Result<(), FarmError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for row in schedule {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Parse CSV leniently: every row becomes a farm and every problem is reported.
///
/// Format errors (missing columns, non-numeric numbers) are still fatal.
/// An unknown status is reported and read as `Planned`.
pub fn parse_farms_csv_lenient(data: &[u8]) -> Result<(Vec<Farm>, Vec<ValidationIssue>), FarmError> {
    let mut rdr = reader(data);
    let mut farms = Vec::new();
    let mut issues = Vec::new();

    for (row_index, result) in farm_rows(&mut rdr)?.enumerate() {
        let row = result?;
        let status = match row.status.parse() {
            Ok(s) => s,
            Err(_) => {
                issues.push(
                    ValidationIssue::new(
                        "status",
                        format!("unknown farm status '{}', read as Planned", row.status),
                    )
                    .at_row(row_index),
                );
                FarmStatus::Planned
            }
        };
        let farm = row.into_farm(status);
        issues.extend(
            farm.validate_all()
                .into_iter()
                .map(|issue| issue.at_row(row_index)),
        );
        farms.push(farm);
    }

    Ok((farms, issues))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_farms;

    const HEADER: &str =
        "id,name,location,area_hectares,plant_count,tokens_issued,token_price,status,established_year,description\n";

    #[test]
    fn test_write_then_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("farms.csv");
        let farms = sample_farms();
        write_farms_csv(&farms, &path).unwrap();
        let loaded = read_farms_csv(&path).unwrap();
        assert_eq!(loaded, farms);
    }

    #[test]
    fn test_description_whitespace_survives_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("farms.csv");
        let mut farms = sample_farms();
        farms[0].description = "  indented note ".to_string();
        write_farms_csv(&farms, &path).unwrap();
        let loaded = read_farms_csv(&path).unwrap();
        assert_eq!(loaded[0].description, "  indented note ");
        assert_eq!(loaded, farms);
    }

    #[test]
    fn test_padded_fields_are_trimmed() {
        let data = format!("{HEADER}, , Vohemar Plot , Vohemar , 3.0 , 6000 , 5000 , 22 , active , 2023 , kept \n");
        let farms = read_farms_csv_from_bytes(data.as_bytes()).unwrap();
        assert_eq!(farms[0].name, "Vohemar Plot");
        assert_eq!(farms[0].plant_count, 6000);
        assert_eq!(farms[0].established_year, Some(2023));
        assert_eq!(farms[0].description, " kept ");
    }

    #[test]
    fn test_blank_id_gets_fresh_id() {
        let data = format!("{HEADER},Vohemar Plot,Vohemar,3.0,6000,5000,22,active,2023,\n");
        let farms = read_farms_csv_from_bytes(data.as_bytes()).unwrap();
        assert_eq!(farms.len(), 1);
        assert_eq!(farms[0].status, FarmStatus::Active);
        assert_eq!(farms[0].established_year, Some(2023));
        assert!(farms[0].description.is_empty());
        assert!(!farms[0].id.is_nil());
    }

    #[test]
    fn test_strict_rejects_invalid_row() {
        let data = format!("{HEADER},Bad Farm,Nowhere,-2.0,10,10,20,active,,\n");
        let err = read_farms_csv_from_bytes(data.as_bytes()).unwrap_err();
        assert!(matches!(err, FarmError::ValidationError(_)));
    }

    #[test]
    fn test_strict_rejects_unknown_status() {
        let data = format!("{HEADER},Farm,Here,1.0,10,10,20,sleeping,,\n");
        let err = read_farms_csv_from_bytes(data.as_bytes()).unwrap_err();
        assert!(matches!(err, FarmError::ParseError(_)));
    }

    #[test]
    fn test_lenient_collects_issues_with_rows() {
        let data = format!(
            "{HEADER},Good,Here,1.0,10,10,20,active,,\n,,There,0.0,10,20,0.5,sleeping,,\n"
        );
        let (farms, issues) = parse_farms_csv_lenient(data.as_bytes()).unwrap();
        assert_eq!(farms.len(), 2);
        assert_eq!(farms[1].status, FarmStatus::Planned);
        assert!(issues.iter().all(|i| i.row_index == Some(1)));
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        for field in ["status", "name", "area_hectares", "tokens_issued", "token_price"] {
            assert!(fields.contains(&field), "missing issue for {field}");
        }
    }

    #[test]
    fn test_lenient_format_error_is_fatal() {
        let data = format!("{HEADER},Farm,Here,lots,10,10,20,active,,\n");
        assert!(matches!(
            parse_farms_csv_lenient(data.as_bytes()),
            Err(FarmError::Csv(_))
        ));
    }

    #[test]
    fn test_write_schedule_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.csv");
        let schedule = crate::analysis::growth_schedule(10, 20.0).unwrap();
        write_schedule_csv(&schedule, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("year,investment,plant_value,harvest_value,total_value,roi")
        );
        assert_eq!(lines.count(), 16);
        assert!(content.contains("16,200.0,5400.0,2650.0,8050.0,3925.0"));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_farms_csv("/no/such/farms.csv"),
            Err(FarmError::Io(_))
        ));
    }
}
