mod tables;
mod charts;
mod format;

pub use tables::{
    format_projection, print_projection,
    format_schedule_table, print_schedule_table,
    format_farms_table, format_farm_detail,
    format_partners_table, format_partner_detail,
    format_dashboard, format_tokenomics, format_roadmap, format_whitepaper,
};
pub use charts::{format_growth_chart, print_growth_chart};
pub use format::{format_percent, format_usd};
