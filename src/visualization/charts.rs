use colored::Colorize;

use super::format::format_usd;
use crate::analysis::ScheduleRow;

const BAR_WIDTH: usize = 40;

/// Format a horizontal bar chart of the schedule's total value per year.
///
/// Each bar is split into its plant part (`█`) and harvest part (`▒`), and
/// a `|` marks the amount invested when it falls inside the bar area.
pub fn format_growth_chart(schedule: &[ScheduleRow]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Growth Chart".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if schedule.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    let max_total = schedule
        .iter()
        .map(|r| r.total_value)
        .chain(schedule.first().map(|r| r.investment))
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);

    let scale = |value: f64| -> usize {
        if max_total > 0.0 && value.is_finite() && value > 0.0 {
            ((value / max_total) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        }
    };

    output.push_str(&format!("  {:>4}  {:>14}  Plant \u{2588} / Harvest \u{2592}\n", "Year", "Total"));
    output.push_str(&format!("  {}\n", "-".repeat(64)));

    let marker = schedule.first().map(|r| scale(r.investment));

    for row in schedule {
        let total_len = scale(row.total_value);
        let plant_len = scale(row.plant_value).min(total_len);
        let harvest_len = total_len - plant_len;

        let mut bar = format!(
            "{}{}",
            "\u{2588}".repeat(plant_len).green(),
            "\u{2592}".repeat(harvest_len).yellow()
        );
        if let Some(m) = marker.filter(|&m| m > total_len && m <= BAR_WIDTH) {
            bar.push_str(&" ".repeat(m - total_len - 1));
            bar.push('|');
        }

        output.push_str(&format!(
            "  {:>4}  {:>14}  {}\n",
            row.year,
            format_usd(row.total_value),
            bar
        ));
    }

    if let Some(first) = schedule.first() {
        output.push_str(&format!("  | invested {}\n", format_usd(first.investment)));
    }
    output.push('\n');
    output
}

/// Print the growth chart.
pub fn print_growth_chart(schedule: &[ScheduleRow]) {
    print!("{}", format_growth_chart(schedule));
}
