use clap::{Parser, Subcommand};

use quid6_instruments::report::detailed_report;
use quid6_instruments::{ScoreCode, classify};

use crate::config::{CliConfig, OutputFormat};
use crate::output::{render_classification, render_report};

#[derive(Debug, Parser)]
#[command(name = "quid6", version, about = "Classify QUID-6 urinary incontinence responses")]
pub struct Cli {
    /// Result format. Overrides QUID6_OUTPUT.
    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify six item scores, in form order.
    Classify {
        #[arg(value_name = "SCORE", allow_negative_numbers = true, required = true)]
        scores: Vec<i64>,
    },
    /// Print the shareable score code for six item scores.
    Code {
        #[arg(value_name = "SCORE", allow_negative_numbers = true, required = true)]
        scores: Vec<i64>,
    },
    /// Find a score code in free text and print the clinician report.
    Report {
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },
}

/// Execute one command and return what should go to stdout.
pub fn run(cli: Cli, config: &CliConfig) -> eyre::Result<String> {
    let format = cli.output.unwrap_or(config.output);

    let rendered = match cli.command {
        Command::Classify { scores } => render_classification(&classify(&scores)?, format)?,
        Command::Code { scores } => ScoreCode::from_scores(&scores)?.to_string(),
        Command::Report { text } => {
            let text = text.join(" ");
            let code = ScoreCode::find_in(&text)
                .ok_or_else(|| eyre::eyre!("no QUID-6 score code (six digits 0-4) in input"))?;
            tracing::debug!(code = %code, "score code found");
            let report = detailed_report(&code);
            render_report(&code, &report, &code.classify(), format)?
        }
    };
    Ok(rendered)
}
