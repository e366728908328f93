use serde::{Deserialize, Serialize};

use super::projector::project;
use crate::error::FarmError;
use crate::models::{MAX_YEAR, MIN_YEAR};

/// One point of the growth chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub year: u32,
    pub investment: f64,
    pub plant_value: f64,
    pub harvest_value: f64,
    pub total_value: f64,
    pub roi: f64,
}

/// Project a position for every year of the growth table.
///
/// Each row goes through [`project`], so the chart can never disagree with
/// the calculator.
pub fn growth_schedule(token_count: u32, token_price: f64) -> Result<Vec<ScheduleRow>, FarmError> {
    let investment = token_count as f64 * token_price;
    (MIN_YEAR..=MAX_YEAR)
        .map(|year| {
            let r = project(token_count, token_price, year)?;
            Ok(ScheduleRow {
                year,
                investment,
                plant_value: r.plant_value,
                harvest_value: r.harvest_value,
                total_value: r.total_value,
                roi: r.roi,
            })
        })
        .collect()
}

/// First year whose total value reaches the amount invested.
pub fn break_even_year(schedule: &[ScheduleRow]) -> Option<u32> {
    schedule
        .iter()
        .find(|row| row.total_value >= row.investment)
        .map(|row| row.year)
}

/// First year with any harvest income.
pub fn first_harvest_year(schedule: &[ScheduleRow]) -> Option<u32> {
    schedule
        .iter()
        .find(|row| row.harvest_value > 0.0)
        .map(|row| row.year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_covers_every_year() {
        let schedule = growth_schedule(5, 20.0).unwrap();
        assert_eq!(schedule.len(), 16);
        assert_eq!(schedule.first().unwrap().year, 1);
        assert_eq!(schedule.last().unwrap().year, 16);
    }

    #[test]
    fn test_schedule_matches_projection() {
        let schedule = growth_schedule(7, 33.0).unwrap();
        for row in &schedule {
            let r = project(7, 33.0, row.year).unwrap();
            assert_eq!(row.total_value, r.total_value);
            assert_eq!(row.roi, r.roi);
        }
    }

    #[test]
    fn test_schedule_totals_non_decreasing() {
        let schedule = growth_schedule(3, 50.0).unwrap();
        for pair in schedule.windows(2) {
            assert!(pair[1].total_value >= pair[0].total_value);
        }
    }

    #[test]
    fn test_break_even_year() {
        // 20 USD per token is already matched in year 1.
        let schedule = growth_schedule(1, 20.0).unwrap();
        assert_eq!(break_even_year(&schedule), Some(1));

        // 100 USD per token needs year 5 (total 115).
        let schedule = growth_schedule(1, 100.0).unwrap();
        assert_eq!(break_even_year(&schedule), Some(5));
    }

    #[test]
    fn test_break_even_never() {
        let schedule = growth_schedule(1, 1000.0).unwrap();
        assert_eq!(break_even_year(&schedule), None);
    }

    #[test]
    fn test_first_harvest_year() {
        let schedule = growth_schedule(1, 20.0).unwrap();
        assert_eq!(first_harvest_year(&schedule), Some(4));
    }

    #[test]
    fn test_zero_tokens_has_no_harvest() {
        let schedule = growth_schedule(0, 20.0).unwrap();
        assert_eq!(first_harvest_year(&schedule), None);
        assert!(schedule.iter().all(|r| r.roi.is_nan()));
    }
}
