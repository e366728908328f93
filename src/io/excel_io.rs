use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::analysis::ScheduleRow;
use crate::error::FarmError;

const HEADERS: [&str; 6] = [
    "Year",
    "Investment (USD)",
    "Plant value (USD)",
    "Harvest value (USD)",
    "Total value (USD)",
    "ROI (%)",
];

/// Write a year-by-year growth schedule to an Excel (.xlsx) file.
///
/// One header row, then one row per year. Money columns use a `$#,##0.00`
/// number format and ROI is written as a plain percentage number.
pub fn write_schedule_excel(
    schedule: &[ScheduleRow],
    path: impl AsRef<Path>,
) -> Result<(), FarmError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Growth schedule")?;

    let bold = Format::new().set_bold();
    let money = Format::new().set_num_format("$#,##0.00");
    let percent = Format::new().set_num_format("0.00");

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, row) in schedule.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet.write_number(r, 0, row.year)?;
        worksheet.write_number_with_format(r, 1, row.investment, &money)?;
        worksheet.write_number_with_format(r, 2, row.plant_value, &money)?;
        worksheet.write_number_with_format(r, 3, row.harvest_value, &money)?;
        worksheet.write_number_with_format(r, 4, row.total_value, &money)?;
        // Non-finite ROI (zero investment) is left blank.
        if row.roi.is_finite() {
            worksheet.write_number_with_format(r, 5, row.roi, &percent)?;
        }
    }

    worksheet.set_column_width(0, 6)?;
    for col in 1..HEADERS.len() as u16 {
        worksheet.set_column_width(col, 20)?;
    }

    workbook.save(path.as_ref())?;
    Ok(())
}
