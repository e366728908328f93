//! Growth projection example: compare holding periods and draw the schedule.
//!
//! Run from the project root:
//!   cargo run --example growth_projection

use vanilla_farm_portal::analysis::{growth_schedule, Calculator, ProjectionInput};
use vanilla_farm_portal::visualization::{
    format_percent, format_usd, print_growth_chart, print_projection, print_schedule_table,
};

fn main() {
    let mut calculator =
        Calculator::new(ProjectionInput::new(10, 20.0, 5)).expect("Default input is in range");
    print_projection(calculator.input(), calculator.result());

    // Walk the years slider from the first harvest to maturity.
    println!("\n=== Holding period comparison (10 tokens at $20) ===");
    for years in [4, 8, 12, 16] {
        match calculator.set_years(years) {
            Ok(r) => println!(
                "  {years:>2} years: {:>12}  ROI {:>10}",
                format_usd(r.total_value),
                format_percent(r.roi)
            ),
            Err(e) => eprintln!("  {years} years: {e}"),
        }
    }

    // Past the end of the growth table the calculator keeps its last result.
    if let Err(e) = calculator.set_years(20) {
        println!("\n  20 years rejected: {e}");
    }

    // A typed value beyond the slider range pins the slider at its end.
    calculator
        .set_token_count(80)
        .expect("Token count is not range-checked");
    println!(
        "  80 tokens typed -> slider at {}",
        calculator.token_slider_position()
    );

    let schedule = growth_schedule(25, 20.0).expect("Failed to build schedule");
    print_schedule_table(&schedule);
    print_growth_chart(&schedule);
}
