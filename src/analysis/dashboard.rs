use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::projector::project;
use crate::error::FarmError;
use crate::models::{clamp_year, Farm, MAX_YEAR};
use crate::session::generate_wallet_address;

/// Token lots assigned to the mock investor, cycled across farms.
const MOCK_TOKEN_LOTS: [u32; 3] = [25, 10, 5];

/// Tokens the investor holds in one farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub farm_id: Uuid,
    pub farm_name: String,
    pub tokens: u32,
    pub purchase_price: f64,
    pub years_held: u32,
}

impl Holding {
    pub fn invested(&self) -> f64 {
        self.tokens as f64 * self.purchase_price
    }

    /// Value today, reading the growth table at the (clamped) years held.
    pub fn current_value(&self) -> Result<f64, FarmError> {
        let r = project(self.tokens, self.purchase_price, clamp_year(self.years_held))?;
        Ok(r.total_value)
    }

    /// Value at the end of the growth table.
    pub fn maturity_value(&self) -> Result<f64, FarmError> {
        let r = project(self.tokens, self.purchase_price, MAX_YEAR)?;
        Ok(r.total_value)
    }
}

/// Totals shown at the top of the investor dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_tokens: u32,
    pub total_invested: f64,
    pub current_value: f64,
    pub maturity_value: f64,
    pub unrealized_gain: f64,
    /// Percent; non-finite when nothing is invested
    pub roi: f64,
}

/// The mock investor dashboard: a wallet and its holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorDashboard {
    pub wallet_address: String,
    pub holdings: Vec<Holding>,
}

impl InvestorDashboard {
    /// Build the mock dashboard: a random wallet holding a lot in every farm
    /// that currently accepts investment.
    ///
    /// Years held are counted from the farm's establishment up to `as_of_year`,
    /// with at least one year.
    pub fn mock<R: Rng>(farms: &[Farm], as_of_year: i32, rng: &mut R) -> Self {
        let holdings = farms
            .iter()
            .filter(|f| f.status.accepts_investment())
            .zip(MOCK_TOKEN_LOTS.iter().cycle())
            .map(|(farm, &tokens)| {
                let years_held = farm
                    .established_year
                    .map(|y| (as_of_year - i32::from(y)).max(1) as u32)
                    .unwrap_or(1);
                Holding {
                    farm_id: farm.id,
                    farm_name: farm.name.clone(),
                    tokens,
                    purchase_price: farm.token_price,
                    years_held,
                }
            })
            .collect();

        Self {
            wallet_address: generate_wallet_address(rng),
            holdings,
        }
    }

    pub fn summary(&self) -> Result<DashboardSummary, FarmError> {
        let mut total_tokens = 0;
        let mut total_invested = 0.0;
        let mut current_value = 0.0;
        let mut maturity_value = 0.0;

        for h in &self.holdings {
            total_tokens += h.tokens;
            total_invested += h.invested();
            current_value += h.current_value()?;
            maturity_value += h.maturity_value()?;
        }

        Ok(DashboardSummary {
            total_tokens,
            total_invested,
            current_value,
            maturity_value,
            unrealized_gain: current_value - total_invested,
            roi: (current_value - total_invested) / total_invested * 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_farms;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn holding(tokens: u32, price: f64, years: u32) -> Holding {
        Holding {
            farm_id: Uuid::nil(),
            farm_name: "Test".to_string(),
            tokens,
            purchase_price: price,
            years_held: years,
        }
    }

    #[test]
    fn test_holding_values() {
        let h = holding(10, 20.0, 16);
        assert_eq!(h.invested(), 200.0);
        assert_eq!(h.current_value().unwrap(), 8050.0);
        assert_eq!(h.maturity_value().unwrap(), 8050.0);
    }

    #[test]
    fn test_holding_years_clamped() {
        let h = holding(1, 20.0, 40);
        assert_eq!(h.current_value().unwrap(), 805.0);
        let h = holding(1, 20.0, 0);
        assert_eq!(h.current_value().unwrap(), 20.0);
    }

    #[test]
    fn test_summary_totals() {
        let dash = InvestorDashboard {
            wallet_address: "0x0".to_string(),
            holdings: vec![holding(1, 20.0, 1), holding(1, 30.0, 5)],
        };
        let s = dash.summary().unwrap();
        assert_eq!(s.total_tokens, 2);
        assert_eq!(s.total_invested, 50.0);
        assert_eq!(s.current_value, 135.0);
        assert_eq!(s.maturity_value, 1610.0);
        assert_eq!(s.unrealized_gain, 85.0);
        assert!((s.roi - 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dashboard_roi_not_finite() {
        let dash = InvestorDashboard {
            wallet_address: "0x0".to_string(),
            holdings: vec![],
        };
        let s = dash.summary().unwrap();
        assert_eq!(s.total_tokens, 0);
        assert!(!s.roi.is_finite());
    }

    #[test]
    fn test_mock_only_holds_investable_farms() {
        let farms = sample_farms();
        let mut rng = StdRng::seed_from_u64(7);
        let dash = InvestorDashboard::mock(&farms, 2025, &mut rng);
        assert_eq!(dash.holdings.len(), 2);
        assert!(dash.holdings.iter().all(|h| h.farm_name != "Mananara Valley"));
        assert_eq!(dash.holdings[0].tokens, 25);
        assert_eq!(dash.holdings[0].years_held, 4);
        assert_eq!(dash.holdings[1].years_held, 6);
    }

    #[test]
    fn test_mock_wallet_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let dash = InvestorDashboard::mock(&sample_farms(), 2025, &mut rng);
        assert!(dash.wallet_address.starts_with("0x"));
        assert_eq!(dash.wallet_address.len(), 42);
    }

    #[test]
    fn test_mock_years_held_at_least_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let dash = InvestorDashboard::mock(&sample_farms(), 1990, &mut rng);
        assert!(dash.holdings.iter().all(|h| h.years_held == 1));
    }
}
