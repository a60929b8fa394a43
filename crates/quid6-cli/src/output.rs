use quid6_instruments::{ClassificationResult, ScoreCode};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportOutput<'a> {
    code: &'a ScoreCode,
    report: &'a str,
    classification: &'a ClassificationResult,
}

pub fn render_classification(
    result: &ClassificationResult,
    format: OutputFormat,
) -> eyre::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(classification_text(result)),
    }
}

pub fn render_report(
    code: &ScoreCode,
    report: &str,
    result: &ClassificationResult,
    format: OutputFormat,
) -> eyre::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ReportOutput {
            code,
            report,
            classification: result,
        })?),
        OutputFormat::Text => Ok(format!("{report}\n\n{}", classification_text(result))),
    }
}

fn classification_text(result: &ClassificationResult) -> String {
    let pathway = if result.pathway_steps.is_empty() {
        "none".to_string()
    } else {
        result
            .pathway_steps
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Diagnosis: {}\nRecommendation: {}\nSUI score: {}\nUUI score: {}\nPathway: {pathway}",
        result.diagnosis.label(),
        result.recommendation,
        result.composite.sui,
        result.composite.uui,
    )
}
