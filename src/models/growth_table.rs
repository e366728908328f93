use serde::{Deserialize, Serialize};

/// First holding year covered by the growth table.
pub const MIN_YEAR: u32 = 1;
/// Last holding year covered by the growth table.
pub const MAX_YEAR: u32 = 16;

/// Projected worth of a single token after a given number of holding years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthTableRow {
    /// Holding year (1-16)
    pub year: u32,
    /// Value of the plant share itself, USD
    pub plant_value: f64,
    /// Cumulative harvest income realized by this year, USD
    pub harvest_value: f64,
    /// `plant_value + harvest_value`, USD
    pub total_value: f64,
}

const fn row(year: u32, plant_value: f64, harvest_value: f64, total_value: f64) -> GrowthTableRow {
    GrowthTableRow {
        year,
        plant_value,
        harvest_value,
        total_value,
    }
}

/// Per-token growth table. Vanilla vines yield nothing until their fourth
/// year, so harvest income starts at year 4.
pub static GROWTH_TABLE: [GrowthTableRow; 16] = [
    row(1, 20.0, 0.0, 20.0),
    row(2, 40.0, 0.0, 40.0),
    row(3, 60.0, 0.0, 60.0),
    row(4, 80.0, 5.0, 85.0),
    row(5, 100.0, 15.0, 115.0),
    row(6, 130.0, 30.0, 160.0),
    row(7, 160.0, 50.0, 210.0),
    row(8, 190.0, 75.0, 265.0),
    row(9, 220.0, 100.0, 320.0),
    row(10, 260.0, 125.0, 385.0),
    row(11, 300.0, 150.0, 450.0),
    row(12, 340.0, 175.0, 515.0),
    row(13, 380.0, 200.0, 580.0),
    row(14, 420.0, 220.0, 640.0),
    row(15, 480.0, 240.0, 720.0),
    row(16, 540.0, 265.0, 805.0),
];

/// Look up the table row for a holding year, or `None` outside 1..=16.
///
/// # Examples
///
/// ```
/// use vanilla_farm_portal::models::growth_row;
///
/// let row = growth_row(5).unwrap();
/// assert_eq!(row.total_value, 115.0);
/// assert!(growth_row(0).is_none());
/// assert!(growth_row(17).is_none());
/// ```
pub fn growth_row(year: u32) -> Option<&'static GrowthTableRow> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    GROWTH_TABLE.get((year - MIN_YEAR) as usize)
}

/// Clamp a requested holding period into the table's domain.
pub fn clamp_year(year: u32) -> u32 {
    year.clamp(MIN_YEAR, MAX_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_sixteen_ascending_years() {
        assert_eq!(GROWTH_TABLE.len(), 16);
        for (i, r) in GROWTH_TABLE.iter().enumerate() {
            assert_eq!(r.year, i as u32 + 1);
        }
    }

    #[test]
    fn test_total_is_plant_plus_harvest() {
        for r in &GROWTH_TABLE {
            assert_eq!(r.total_value, r.plant_value + r.harvest_value, "year {}", r.year);
        }
    }

    #[test]
    fn test_values_are_monotonic() {
        for pair in GROWTH_TABLE.windows(2) {
            assert!(pair[1].plant_value >= pair[0].plant_value, "plant dips at year {}", pair[1].year);
            assert!(
                pair[1].harvest_value >= pair[0].harvest_value,
                "harvest dips at year {}",
                pair[1].year
            );
        }
    }

    #[test]
    fn test_no_harvest_before_year_four() {
        for r in GROWTH_TABLE.iter().take(3) {
            assert_eq!(r.harvest_value, 0.0);
        }
        assert!(GROWTH_TABLE[3].harvest_value > 0.0);
    }

    #[test]
    fn test_values_non_negative() {
        for r in &GROWTH_TABLE {
            assert!(r.plant_value >= 0.0);
            assert!(r.harvest_value >= 0.0);
        }
    }

    #[test]
    fn test_growth_row_bounds() {
        assert_eq!(growth_row(1).unwrap().year, 1);
        assert_eq!(growth_row(16).unwrap().year, 16);
        assert!(growth_row(0).is_none());
        assert!(growth_row(17).is_none());
        assert!(growth_row(u32::MAX).is_none());
    }

    #[test]
    fn test_clamp_year() {
        assert_eq!(clamp_year(0), 1);
        assert_eq!(clamp_year(8), 8);
        assert_eq!(clamp_year(40), 16);
    }
}
