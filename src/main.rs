use anyhow::Result;
use clap::Parser;
use robmatrix::cli::{Cli, Commands};
use robmatrix::commands::{handle_evaluate, handle_methodology, EvaluateConfig};
use robmatrix::formatting::FormattingConfig;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

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
            let formatting = create_formatting_config(plain);
            formatting.apply();
            let config = EvaluateConfig {
                repair_cost,
                repair_time,
                new_cost,
                allowed_downtime,
                criticality: criticality.into(),
                format: format.into(),
                output,
                verbosity,
                formatting,
            };
            handle_evaluate(config)
        }
        Commands::Methodology { plain } => {
            let formatting = create_formatting_config(plain);
            formatting.apply();
            handle_methodology(formatting)
        }
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
