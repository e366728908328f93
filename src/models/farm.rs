use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{first_issue, require_text, ValidationIssue};
use crate::error::FarmError;

/// Lifecycle stage of a farm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FarmStatus {
    Planned,
    Active,
    Harvesting,
    Closed,
}

impl std::fmt::Display for FarmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FarmStatus::Planned => write!(f, "Planned"),
            FarmStatus::Active => write!(f, "Active"),
            FarmStatus::Harvesting => write!(f, "Harvesting"),
            FarmStatus::Closed => write!(f, "Closed"),
        }
    }
}

impl std::str::FromStr for FarmStatus {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planned" | "p" => Ok(FarmStatus::Planned),
            "active" | "a" => Ok(FarmStatus::Active),
            "harvesting" | "h" => Ok(FarmStatus::Harvesting),
            "closed" | "c" => Ok(FarmStatus::Closed),
            _ => Err(FarmError::ParseError(format!("Unknown farm status: '{s}'"))),
        }
    }
}

impl FarmStatus {
    /// Whether investors can currently hold tokens in the farm.
    pub fn accepts_investment(&self) -> bool {
        matches!(self, FarmStatus::Active | FarmStatus::Harvesting)
    }
}

/// A vanilla farm whose plants back the issued tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    pub id: Uuid,
    pub name: String,
    /// Region and country, free text
    pub location: String,
    pub area_hectares: f64,
    pub plant_count: u32,
    /// Tokens issued against this farm; each is a share of one plant
    pub tokens_issued: u32,
    /// Issue price per token in USD
    pub token_price: f64,
    pub status: FarmStatus,
    pub established_year: Option<u16>,
    #[serde(default)]
    pub description: String,
}

impl Farm {
    /// Create a farm with a fresh id and no optional details.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        area_hectares: f64,
        plant_count: u32,
        tokens_issued: u32,
        token_price: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location: location.into(),
            area_hectares,
            plant_count,
            tokens_issued,
            token_price,
            status: FarmStatus::Planned,
            established_year: None,
            description: String::new(),
        }
    }

    /// Plants per hectare.
    pub fn planting_density(&self) -> f64 {
        if self.area_hectares <= 0.0 {
            return 0.0;
        }
        self.plant_count as f64 / self.area_hectares
    }

    /// Capital raised if every issued token sells at the issue price.
    pub fn token_raise(&self) -> f64 {
        self.tokens_issued as f64 * self.token_price
    }

    /// Validate the farm. Returns `FarmError::ValidationError` for the first problem.
    pub fn validate(&self) -> Result<(), FarmError> {
        first_issue(&format!("Farm '{}'", self.name), self.validate_all())
    }

    /// Collect every validation problem instead of stopping at the first.
    pub fn validate_all(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        require_text(&mut issues, "name", &self.name);
        require_text(&mut issues, "location", &self.location);

        if self.area_hectares.is_nan() || self.area_hectares <= 0.0 {
            issues.push(ValidationIssue::new(
                "area_hectares",
                format!("area must be positive, got {}", self.area_hectares),
            ));
        }
        if self.plant_count == 0 {
            issues.push(ValidationIssue::new("plant_count", "plant count must be positive"));
        }
        if self.tokens_issued == 0 {
            issues.push(ValidationIssue::new("tokens_issued", "tokens issued must be positive"));
        } else if self.tokens_issued > self.plant_count {
            issues.push(ValidationIssue::new(
                "tokens_issued",
                format!(
                    "cannot issue {} tokens against {} plants",
                    self.tokens_issued, self.plant_count
                ),
            ));
        }
        if self.token_price.is_nan() || self.token_price < 1.0 {
            issues.push(ValidationIssue::new(
                "token_price",
                format!("token price must be at least 1, got {}", self.token_price),
            ));
        }
        if let Some(year) = self.established_year {
            if !(1900..=2100).contains(&year) {
                issues.push(ValidationIssue::new(
                    "established_year",
                    format!("established year must be in 1900..=2100, got {year}"),
                ));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_farm() -> Farm {
        Farm {
            status: FarmStatus::Active,
            established_year: Some(2021),
            ..Farm::new("Sambava Estate", "SAVA, Madagascar", 12.5, 25_000, 20_000, 20.0)
        }
    }

    // --- FarmStatus tests ---

    #[test]
    fn test_farm_status_display() {
        assert_eq!(FarmStatus::Planned.to_string(), "Planned");
        assert_eq!(FarmStatus::Active.to_string(), "Active");
        assert_eq!(FarmStatus::Harvesting.to_string(), "Harvesting");
        assert_eq!(FarmStatus::Closed.to_string(), "Closed");
    }

    #[test]
    fn test_farm_status_parse_words_and_abbreviations() {
        assert_eq!("active".parse::<FarmStatus>().unwrap(), FarmStatus::Active);
        assert_eq!("HARVESTING".parse::<FarmStatus>().unwrap(), FarmStatus::Harvesting);
        assert_eq!("p".parse::<FarmStatus>().unwrap(), FarmStatus::Planned);
        assert_eq!(" C ".parse::<FarmStatus>().unwrap(), FarmStatus::Closed);
    }

    #[test]
    fn test_farm_status_parse_invalid() {
        assert!("growing".parse::<FarmStatus>().is_err());
        assert!("".parse::<FarmStatus>().is_err());
    }

    #[test]
    fn test_accepts_investment() {
        assert!(FarmStatus::Active.accepts_investment());
        assert!(FarmStatus::Harvesting.accepts_investment());
        assert!(!FarmStatus::Planned.accepts_investment());
        assert!(!FarmStatus::Closed.accepts_investment());
    }

    // --- Derived values ---

    #[test]
    fn test_planting_density() {
        let farm = make_farm();
        assert!((farm.planting_density() - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_planting_density_zero_area() {
        let mut farm = make_farm();
        farm.area_hectares = 0.0;
        assert_eq!(farm.planting_density(), 0.0);
    }

    #[test]
    fn test_token_raise() {
        let farm = make_farm();
        assert!((farm.token_raise() - 400_000.0).abs() < 1e-9);
    }

    // --- Validation ---

    #[test]
    fn test_valid_farm() {
        let farm = make_farm();
        assert!(farm.validate().is_ok());
        assert!(farm.validate_all().is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut farm = make_farm();
        farm.name = "  ".to_string();
        let issues = farm.validate_all();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "name");
    }

    #[test]
    fn test_non_positive_area_rejected() {
        let mut farm = make_farm();
        farm.area_hectares = -1.0;
        assert!(farm.validate().is_err());
        farm.area_hectares = f64::NAN;
        assert!(farm.validate_all().iter().any(|i| i.field == "area_hectares"));
    }

    #[test]
    fn test_tokens_cannot_exceed_plants() {
        let mut farm = make_farm();
        farm.tokens_issued = farm.plant_count + 1;
        let issues = farm.validate_all();
        assert!(issues.iter().any(|i| i.field == "tokens_issued"));
    }

    #[test]
    fn test_zero_tokens_rejected() {
        let mut farm = make_farm();
        farm.tokens_issued = 0;
        let issues = farm.validate_all();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "tokens issued must be positive");
    }

    #[test]
    fn test_token_price_below_one_rejected() {
        let mut farm = make_farm();
        farm.token_price = 0.5;
        let err = farm.validate().unwrap_err();
        assert!(err.to_string().contains("token_price"));
    }

    #[test]
    fn test_established_year_bounds() {
        let mut farm = make_farm();
        farm.established_year = Some(1850);
        assert!(farm.validate().is_err());
        farm.established_year = None;
        assert!(farm.validate().is_ok());
    }

    #[test]
    fn test_validate_all_collects_everything() {
        let mut farm = make_farm();
        farm.name.clear();
        farm.location.clear();
        farm.plant_count = 0;
        farm.token_price = 0.0;
        let fields: Vec<String> = farm.validate_all().into_iter().map(|i| i.field).collect();
        assert!(fields.contains(&"name".to_string()));
        assert!(fields.contains(&"location".to_string()));
        assert!(fields.contains(&"plant_count".to_string()));
        assert!(fields.contains(&"tokens_issued".to_string()));
        assert!(fields.contains(&"token_price".to_string()));
    }

    #[test]
    fn test_farm_json_roundtrip_keeps_id() {
        let farm = make_farm();
        let json = serde_json::to_string(&farm).unwrap();
        let back: Farm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, farm);
    }
}
