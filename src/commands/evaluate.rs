use crate::core::{Criticality, DecisionInput, DecisionReport, TimeIndex};
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, render_report, OutputFormat};
use crate::scoring;
use anyhow::Result;
use std::path::PathBuf;

pub struct EvaluateConfig {
    pub repair_cost: f64,
    pub repair_time: f64,
    pub new_cost: f64,
    pub allowed_downtime: f64,
    pub criticality: Criticality,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub verbosity: u8,
    pub formatting: FormattingConfig,
}

pub fn handle_evaluate(config: EvaluateConfig) -> Result<()> {
    let input = DecisionInput {
        repair_cost: config.repair_cost,
        repair_time: config.repair_time,
        new_cost: config.new_cost,
        allowed_downtime: config.allowed_downtime,
        criticality: config.criticality,
    };

    log::debug!("evaluating input: {:?}", input);
    let result = scoring::evaluate(&input)?;

    if config.verbosity > 0 {
        print_score_breakdown(&input, &result);
    }

    let report = DecisionReport::new(input, result);
    match config.output {
        Some(path) => {
            let rendered = render_report(config.format, &report, config.formatting)?;
            crate::io::write_file(&path, &rendered)?;
            println!("Report written to {}", path.display());
        }
        None => {
            create_writer(config.format, config.formatting).write_report(&report)?;
        }
    }

    Ok(())
}

// Factor breakdown goes to stderr so it never corrupts json/markdown output
fn print_score_breakdown(input: &DecisionInput, result: &crate::core::DecisionResult) {
    eprintln!("Score factors:");
    eprintln!(
        "  cost: {:.2} / {:.2} = {:.1}% -> {} points (weight 0.4)",
        input.repair_cost, input.new_cost, result.cost_index, result.cost_points
    );
    match result.time_index {
        TimeIndex::Unbounded => eprintln!(
            "  time: allowed downtime is zero -> {} point (weight 0.3)",
            result.time_points
        ),
        TimeIndex::Percent(p) => eprintln!(
            "  time: {:.2} / {:.2} = {:.1}% -> {} points (weight 0.3)",
            input.repair_time, input.allowed_downtime, p, result.time_points
        ),
    }
    eprintln!(
        "  criticality: {} -> {} points (weight 0.3)",
        input.criticality.label(),
        result.criticality_points
    );
    eprintln!("  final score: {:.2}", result.final_score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(output: Option<PathBuf>, format: OutputFormat) -> EvaluateConfig {
        EvaluateConfig {
            repair_cost: 300.0,
            repair_time: 2.0,
            new_cost: 1000.0,
            allowed_downtime: 4.0,
            criticality: Criticality::Low,
            format,
            output,
            verbosity: 0,
            formatting: FormattingConfig::plain(),
        }
    }

    #[test]
    fn test_handle_evaluate_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        handle_evaluate(config(Some(path.clone()), OutputFormat::Json)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let report: DecisionReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(report.result.final_score, 5.0);
    }

    #[test]
    fn test_handle_evaluate_rejects_invalid_input() {
        let bad = EvaluateConfig {
            new_cost: 0.0,
            ..config(None, OutputFormat::Terminal)
        };
        assert!(handle_evaluate(bad).is_err());
    }
}
