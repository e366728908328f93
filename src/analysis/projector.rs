use serde::{Deserialize, Serialize};

use crate::error::FarmError;
use crate::models::{clamp_year, growth_row};

/// Inputs to a projection, as entered in the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub token_count: u32,
    /// Purchase price per token, USD
    pub token_price: f64,
    pub years_holding: u32,
}

impl ProjectionInput {
    pub fn new(token_count: u32, token_price: f64, years_holding: u32) -> Self {
        Self {
            token_count,
            token_price,
            years_holding,
        }
    }

    /// Apply the calculator's input clamping: at least one token, a price of
    /// at least 1 and a holding period inside the growth table.
    pub fn clamped(self) -> Self {
        let token_price = if self.token_price.is_nan() {
            1.0
        } else {
            self.token_price.max(1.0)
        };
        Self {
            token_count: self.token_count.max(1),
            token_price,
            years_holding: clamp_year(self.years_holding),
        }
    }

    /// Amount paid for the tokens.
    pub fn investment(&self) -> f64 {
        self.token_count as f64 * self.token_price
    }

    pub fn project(&self) -> Result<ProjectionResult, FarmError> {
        project(self.token_count, self.token_price, self.years_holding)
    }
}

/// Projected worth of a token position after the holding period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub plant_value: f64,
    pub harvest_value: f64,
    pub total_value: f64,
    /// Return on investment in percent. Non-finite when nothing was invested.
    pub roi: f64,
}

/// Project the value of `token_count` tokens bought at `token_price` and
/// held for `years_holding` years.
///
/// No rounding is applied. A zero investment yields a NaN or infinite ROI
/// rather than an error. Holding periods outside 1..=16 are rejected with
/// [`FarmError::YearsOutOfRange`]; use [`ProjectionInput::clamped`] first
/// for forgiving input handling.
///
/// # Examples
///
/// ```
/// use vanilla_farm_portal::analysis::project;
///
/// let r = project(10, 20.0, 16).unwrap();
/// assert_eq!(r.total_value, 8050.0);
/// assert_eq!(r.roi, 3925.0);
/// ```
pub fn project(
    token_count: u32,
    token_price: f64,
    years_holding: u32,
) -> Result<ProjectionResult, FarmError> {
    let row = growth_row(years_holding).ok_or(FarmError::YearsOutOfRange {
        years: years_holding,
    })?;

    let tokens = token_count as f64;
    let total_value = row.total_value * tokens;
    let investment = tokens * token_price;

    Ok(ProjectionResult {
        plant_value: row.plant_value * tokens,
        harvest_value: row.harvest_value * tokens,
        total_value,
        roi: (total_value - investment) / investment * 100.0,
    })
}
