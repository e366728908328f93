mod growth_table;
mod farm;
mod partner;
mod validation;
mod whitepaper;
pub mod content;
pub mod sample;

pub use growth_table::{clamp_year, growth_row, GrowthTableRow, GROWTH_TABLE, MAX_YEAR, MIN_YEAR};
pub use farm::{Farm, FarmStatus};
pub use partner::{Partner, PartnerKind};
pub use validation::ValidationIssue;
pub use whitepaper::WhitepaperRecord;
