mod projector;
mod calculator;
mod schedule;
mod dashboard;

pub use projector::{project, ProjectionInput, ProjectionResult};
pub use calculator::{Calculator, PRICE_SLIDER, TOKEN_SLIDER};
pub use schedule::{break_even_year, first_harvest_year, growth_schedule, ScheduleRow};
pub use dashboard::{DashboardSummary, Holding, InvestorDashboard};
