use crate::formatting::FormattingConfig;
use anyhow::Result;
use colored::*;
use comfy_table::{presets, ContentArrangement, Table};

/// Print the methodology reference: the criteria, the weighted score,
/// and how the score ranges map onto recommendations.
pub fn handle_methodology(formatting: FormattingConfig) -> Result<()> {
    println!("{}", "Repair-or-Buy Methodology".bold().blue());
    println!("{}", "=========================".blue());
    println!();
    println!("Decision support for maintenance engineering: repair a failed");
    println!("component or buy a new one, scored on three criteria. Follows");
    println!("reliability-centered maintenance (RCM) and multi-criteria analysis.");
    println!();

    println!("{}", "Criteria".bold());
    println!("  1. Cost index (%)  = repair cost / new part cost x 100");
    println!("  2. Time index (%)  = repair time / allowed downtime x 100");
    println!("     Zero allowed downtime means zero tolerance: the time");
    println!("     criterion scores its worst value.");
    println!("  3. Criticality     = operational importance of the component");
    println!("     (Low -> 5 points, Medium -> 3, High -> 1)");
    println!();

    println!("{}", "Final score".bold());
    println!("  score = cost points x 0.4 + time points x 0.3 + criticality points x 0.3");
    println!();

    println!("{}", "Interpretation".bold());
    let mut table = Table::new();
    let preset = if formatting.emoji.should_use_emoji() {
        presets::UTF8_FULL
    } else {
        presets::ASCII_FULL
    };
    table
        .load_preset(preset)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Score", "Recommendation"]);
    table.add_row(vec![">= 4.5", "Excellent scenario for repair"]);
    table.add_row(vec!["4.0 - 4.4", "Repair recommended, with attention"]);
    table.add_row(vec!["3.0 - 3.9", "Leaning toward buying new; weigh the risks"]);
    table.add_row(vec!["< 3.0", "Buy a new part"]);
    println!("{table}");

    Ok(())
}
