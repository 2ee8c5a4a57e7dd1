use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "robmatrix")]
#[command(about = "Repair-or-buy decision support for maintenance engineering", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a repair-or-buy decision for a component
    Evaluate {
        /// Cost of repairing the component
        #[arg(long = "repair-cost")]
        repair_cost: f64,

        /// Time to complete the repair, in days
        #[arg(long = "repair-time")]
        repair_time: f64,

        /// Cost of a new replacement part
        #[arg(long = "new-cost")]
        new_cost: f64,

        /// Downtime the operation can tolerate, in days (0 = zero tolerance)
        #[arg(long = "allowed-downtime")]
        allowed_downtime: f64,

        /// Operational criticality of the component
        #[arg(long, value_enum)]
        criticality: Criticality,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity level (-v shows the score factor breakdown)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Plain output: no colors, ASCII-only
        #[arg(long)]
        plain: bool,
    },

    /// Print the scoring methodology reference
    Methodology {
        /// Plain output: no colors, ASCII-only
        #[arg(long)]
        plain: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Criticality {
    Low,
    Medium,
    High,
}

impl From<Criticality> for crate::core::Criticality {
    fn from(c: Criticality) -> Self {
        match c {
            Criticality::Low => crate::core::Criticality::Low,
            Criticality::Medium => crate::core::Criticality::Medium,
            Criticality::High => crate::core::Criticality::High,
        }
    }
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criticality_conversion() {
        assert_eq!(
            crate::core::Criticality::from(Criticality::Low),
            crate::core::Criticality::Low
        );
        assert_eq!(
            crate::core::Criticality::from(Criticality::Medium),
            crate::core::Criticality::Medium
        );
        assert_eq!(
            crate::core::Criticality::from(Criticality::High),
            crate::core::Criticality::High
        );
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Markdown),
            crate::io::output::OutputFormat::Markdown
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_cli_parsing_evaluate_command() {
        let args = vec![
            "robmatrix",
            "evaluate",
            "--repair-cost",
            "300",
            "--repair-time",
            "2",
            "--new-cost",
            "1000",
            "--allowed-downtime",
            "4",
            "--criticality",
            "low",
            "--format",
            "json",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Evaluate {
                repair_cost,
                repair_time,
                new_cost,
                allowed_downtime,
                criticality,
                format,
                output,
                verbosity,
                plain,
            } => {
                assert_eq!(repair_cost, 300.0);
                assert_eq!(repair_time, 2.0);
                assert_eq!(new_cost, 1000.0);
                assert_eq!(allowed_downtime, 4.0);
                assert_eq!(criticality, Criticality::Low);
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(output, None);
                assert_eq!(verbosity, 0);
                assert!(!plain);
            }
            _ => panic!("Expected Evaluate command"),
        }
    }

    #[test]
    fn test_cli_parsing_defaults_to_terminal_format() {
        let args = vec![
            "robmatrix",
            "evaluate",
            "--repair-cost",
            "1",
            "--repair-time",
            "1",
            "--new-cost",
            "1",
            "--allowed-downtime",
            "1",
            "--criticality",
            "high",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Evaluate { format, .. } => {
                assert_eq!(format, OutputFormat::Terminal);
            }
            _ => panic!("Expected Evaluate command"),
        }
    }

    #[test]
    fn test_cli_parsing_methodology_command() {
        let args = vec!["robmatrix", "methodology", "--plain"];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Methodology { plain } => assert!(plain),
            _ => panic!("Expected Methodology command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_criticality() {
        let args = vec![
            "robmatrix",
            "evaluate",
            "--repair-cost",
            "1",
            "--repair-time",
            "1",
            "--new-cost",
            "1",
            "--allowed-downtime",
            "1",
            "--criticality",
            "extreme",
        ];

        assert!(Cli::try_parse_from(args).is_err());
    }
}
