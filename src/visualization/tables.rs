use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement,
    Table,
};

use super::format::{format_percent, format_usd};
use crate::analysis::{
    break_even_year, first_harvest_year, DashboardSummary, InvestorDashboard, ProjectionInput,
    ProjectionResult, ScheduleRow,
};
use crate::models::content::{MilestoneStatus, ROADMAP, TOKENOMICS, TOTAL_SUPPLY};
use crate::models::{Farm, Partner, WhitepaperRecord};
use crate::session::short_address;

fn title(text: &str, width: usize) -> String {
    format!("\n{}\n{}\n", text.bold().green(), "=".repeat(width))
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn right(text: impl Into<String>) -> Cell {
    Cell::new(text.into()).set_alignment(CellAlignment::Right)
}

/// Format the calculator's result panel.
pub fn format_projection(input: &ProjectionInput, result: &ProjectionResult) -> String {
    let mut output = title("Growth Projection", 50);
    output.push_str(&format!(
        "{}\n",
        format!(
            "{} tokens at {} held for {} years",
            input.token_count,
            format_usd(input.token_price),
            input.years_holding
        )
        .dimmed()
    ));

    let mut table = new_table(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Investment"), right(format_usd(input.investment()))]);
    table.add_row(vec![Cell::new("Plant value"), right(format_usd(result.plant_value))]);
    table.add_row(vec![Cell::new("Harvest value"), right(format_usd(result.harvest_value))]);
    table.add_row(vec![Cell::new("Total value"), right(format_usd(result.total_value))]);
    table.add_row(vec![Cell::new("ROI"), right(format_percent(result.roi))]);

    output.push_str(&format!("{table}"));
    output
}

/// Print the calculator's result panel.
pub fn print_projection(input: &ProjectionInput, result: &ProjectionResult) {
    print!("{}", format_projection(input, result));
}

/// Format the year-by-year growth schedule with its milestones.
pub fn format_schedule_table(schedule: &[ScheduleRow]) -> String {
    let mut output = title("Growth Schedule", 70);

    let mut table = new_table(vec!["Year", "Plant", "Harvest", "Total", "ROI"]);
    for row in schedule {
        table.add_row(vec![
            right(row.year.to_string()),
            right(format_usd(row.plant_value)),
            right(format_usd(row.harvest_value)),
            right(format_usd(row.total_value)),
            right(format_percent(row.roi)),
        ]);
    }
    output.push_str(&format!("{table}\n"));

    let describe = |year: Option<u32>| match year {
        Some(y) => format!("year {y}"),
        None => "not within 16 years".to_string(),
    };
    output.push_str(&format!(
        "First harvest: {}\nBreak-even:    {}\n",
        describe(first_harvest_year(schedule)),
        describe(break_even_year(schedule))
    ));
    output
}

/// Print the growth schedule.
pub fn print_schedule_table(schedule: &[ScheduleRow]) {
    print!("{}", format_schedule_table(schedule));
}

/// Format the farm list.
pub fn format_farms_table(farms: &[Farm]) -> String {
    let mut output = title("Farms", 70);
    if farms.is_empty() {
        output.push_str("  No farms recorded.\n");
        return output;
    }

    let mut table = new_table(vec![
        "ID", "Name", "Location", "Status", "Area (ha)", "Plants", "Tokens", "Price",
    ]);
    for farm in farms {
        table.add_row(vec![
            Cell::new(&farm.id.to_string()[..8]),
            Cell::new(&farm.name),
            Cell::new(&farm.location),
            Cell::new(farm.status.to_string()),
            right(format!("{:.1}", farm.area_hectares)),
            right(farm.plant_count.to_string()),
            right(farm.tokens_issued.to_string()),
            right(format_usd(farm.token_price)),
        ]);
    }
    output.push_str(&format!("{table}"));
    output
}

/// Format one farm with its derived figures.
pub fn format_farm_detail(farm: &Farm) -> String {
    let mut output = title(&farm.name, 50);
    let mut table = new_table(vec!["Field", "Value"]);
    let established = farm
        .established_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string());
    let rows = [
        ("ID", farm.id.to_string()),
        ("Location", farm.location.clone()),
        ("Status", farm.status.to_string()),
        ("Established", established),
        ("Area", format!("{:.1} ha", farm.area_hectares)),
        ("Plants", farm.plant_count.to_string()),
        ("Density", format!("{:.0} plants/ha", farm.planting_density())),
        ("Tokens issued", farm.tokens_issued.to_string()),
        ("Token price", format_usd(farm.token_price)),
        ("Token raise", format_usd(farm.token_raise())),
    ];
    for (field, value) in rows {
        table.add_row(vec![Cell::new(field), Cell::new(value)]);
    }
    if !farm.description.is_empty() {
        table.add_row(vec![Cell::new("Description"), Cell::new(&farm.description)]);
    }
    output.push_str(&format!("{table}"));
    output
}

/// Format the partner list.
pub fn format_partners_table(partners: &[Partner]) -> String {
    let mut output = title("Partners", 70);
    if partners.is_empty() {
        output.push_str("  No partners recorded.\n");
        return output;
    }

    let mut table = new_table(vec!["ID", "Name", "Kind", "Country", "Website"]);
    for partner in partners {
        table.add_row(vec![
            Cell::new(&partner.id.to_string()[..8]),
            Cell::new(&partner.name),
            Cell::new(partner.kind.to_string()),
            Cell::new(&partner.country),
            Cell::new(partner.website.as_deref().unwrap_or("-")),
        ]);
    }
    output.push_str(&format!("{table}"));
    output
}

pub fn format_partner_detail(partner: &Partner) -> String {
    let mut output = title(&partner.name, 50);
    let mut table = new_table(vec!["Field", "Value"]);
    table.add_row(vec![Cell::new("ID"), Cell::new(partner.id.to_string())]);
    table.add_row(vec![Cell::new("Kind"), Cell::new(partner.kind.to_string())]);
    table.add_row(vec![Cell::new("Country"), Cell::new(&partner.country)]);
    table.add_row(vec![
        Cell::new("Website"),
        Cell::new(partner.website.as_deref().unwrap_or("-")),
    ]);
    table.add_row(vec![
        Cell::new("Contact"),
        Cell::new(partner.contact_email.as_deref().unwrap_or("-")),
    ]);
    if !partner.description.is_empty() {
        table.add_row(vec![Cell::new("Description"), Cell::new(&partner.description)]);
    }
    output.push_str(&format!("{table}"));
    output
}

/// Format the investor dashboard: holdings followed by portfolio totals.
pub fn format_dashboard(dashboard: &InvestorDashboard, summary: &DashboardSummary) -> String {
    let mut output = title("Investor Dashboard", 70);
    output.push_str(&format!(
        "{}\n",
        format!("Wallet {}", short_address(&dashboard.wallet_address)).dimmed()
    ));

    if dashboard.holdings.is_empty() {
        output.push_str("  No holdings.\n");
    } else {
        let mut table = new_table(vec!["Farm", "Tokens", "Paid", "Years", "Value", "At maturity"]);
        for h in &dashboard.holdings {
            let value = h.current_value().map(format_usd).unwrap_or_else(|_| "n/a".into());
            let maturity = h.maturity_value().map(format_usd).unwrap_or_else(|_| "n/a".into());
            table.add_row(vec![
                Cell::new(&h.farm_name),
                right(h.tokens.to_string()),
                right(format_usd(h.invested())),
                right(h.years_held.to_string()),
                right(value),
                right(maturity),
            ]);
        }
        output.push_str(&format!("{table}\n"));
    }

    let mut totals = new_table(vec!["Portfolio", "Value"]);
    totals.add_row(vec![Cell::new("Tokens held"), right(summary.total_tokens.to_string())]);
    totals.add_row(vec![Cell::new("Invested"), right(format_usd(summary.total_invested))]);
    totals.add_row(vec![Cell::new("Current value"), right(format_usd(summary.current_value))]);
    totals.add_row(vec![Cell::new("Value at maturity"), right(format_usd(summary.maturity_value))]);
    totals.add_row(vec![Cell::new("Unrealized gain"), right(format_usd(summary.unrealized_gain))]);
    totals.add_row(vec![Cell::new("ROI"), right(format_percent(summary.roi))]);
    output.push_str(&format!("{totals}"));
    output
}

/// Format the token allocation table.
pub fn format_tokenomics() -> String {
    let mut output = title("Tokenomics", 60);
    output.push_str(&format!(
        "{}\n",
        format!("Total supply: {TOTAL_SUPPLY} VVT").dimmed()
    ));

    let mut table = new_table(vec!["Allocation", "Share", "Tokens", "Note"]);
    for a in &TOKENOMICS {
        table.add_row(vec![
            Cell::new(a.label),
            right(format!("{}%", a.percent)),
            right(a.tokens().to_string()),
            Cell::new(a.note),
        ]);
    }
    output.push_str(&format!("{table}"));
    output
}

/// Format the roadmap, one row per phase.
pub fn format_roadmap() -> String {
    let mut output = title("Roadmap", 60);
    let mut table = new_table(vec!["Phase", "Period", "Milestone", "Status"]);
    for m in &ROADMAP {
        let status = match m.status {
            MilestoneStatus::Done => m.status.to_string().green().to_string(),
            MilestoneStatus::InProgress => m.status.to_string().yellow().to_string(),
            MilestoneStatus::Planned => m.status.to_string(),
        };
        table.add_row(vec![
            right(m.phase.to_string()),
            Cell::new(m.period),
            Cell::new(m.title),
            Cell::new(status),
        ]);
    }
    output.push_str(&format!("{table}"));
    output
}

/// Describe the stored whitepaper, if any.
pub fn format_whitepaper(record: Option<&WhitepaperRecord>) -> String {
    let mut output = title("Whitepaper", 50);
    match record {
        None => output.push_str("  No whitepaper uploaded.\n"),
        Some(wp) => {
            let mut table = new_table(vec!["Field", "Value"]);
            table.add_row(vec![Cell::new("File"), Cell::new(&wp.file_name)]);
            table.add_row(vec![Cell::new("Size"), Cell::new(format!("{:.1} KiB", wp.size_kib()))]);
            table.add_row(vec![
                Cell::new("Uploaded"),
                Cell::new(wp.uploaded_at.format("%Y-%m-%d %H:%M UTC").to_string()),
            ]);
            output.push_str(&format!("{table}"));
        }
    }
    output
}
