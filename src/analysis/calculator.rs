use tracing::debug;

use super::projector::{ProjectionInput, ProjectionResult};
use crate::error::FarmError;
use crate::models::{MAX_YEAR, MIN_YEAR};

/// Slider bounds used by the calculator form.
pub const TOKEN_SLIDER: (u32, u32) = (1, 50);
pub const PRICE_SLIDER: (f64, f64) = (10.0, 100.0);

/// Stateful model behind the investment calculator.
///
/// Numeric fields and sliders write through the same setters, so both views
/// always show the same input. Every accepted change recomputes the whole
/// result; a change with a holding period outside the growth table is
/// refused and the previous result stays on screen.
#[derive(Debug, Clone)]
pub struct Calculator {
    input: ProjectionInput,
    result: ProjectionResult,
}

impl Calculator {
    pub fn new(input: ProjectionInput) -> Result<Self, FarmError> {
        let result = input.project()?;
        Ok(Self { input, result })
    }

    pub fn input(&self) -> &ProjectionInput {
        &self.input
    }

    pub fn result(&self) -> &ProjectionResult {
        &self.result
    }

    pub fn set_token_count(&mut self, token_count: u32) -> Result<&ProjectionResult, FarmError> {
        self.apply(ProjectionInput {
            token_count,
            ..self.input
        })
    }

    pub fn set_token_price(&mut self, token_price: f64) -> Result<&ProjectionResult, FarmError> {
        self.apply(ProjectionInput {
            token_price,
            ..self.input
        })
    }

    pub fn set_years(&mut self, years_holding: u32) -> Result<&ProjectionResult, FarmError> {
        self.apply(ProjectionInput {
            years_holding,
            ..self.input
        })
    }

    /// Slider position for the token count, pinned to the slider's range.
    pub fn token_slider_position(&self) -> u32 {
        self.input.token_count.clamp(TOKEN_SLIDER.0, TOKEN_SLIDER.1)
    }

    /// Slider position for the price, pinned to the slider's range.
    pub fn price_slider_position(&self) -> f64 {
        self.input.token_price.clamp(PRICE_SLIDER.0, PRICE_SLIDER.1)
    }

    fn apply(&mut self, input: ProjectionInput) -> Result<&ProjectionResult, FarmError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&input.years_holding) {
            debug!(years = input.years_holding, "ignoring out-of-range holding period");
            return Err(FarmError::YearsOutOfRange {
                years: input.years_holding,
            });
        }
        self.result = input.project()?;
        self.input = input;
        Ok(&self.result)
    }
}
