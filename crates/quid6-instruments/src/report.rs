use crate::Instrument;
use crate::classify::ScoreInput;
use crate::instruments::quid6::{Quid6, answer_text};
use crate::score_code::ScoreCode;

const RULE: &str = "==================";

/// Plain-text clinician report for a score code: each item's short text with
/// the chosen answer, then the stress and urge subscores.
///
/// ```text
/// QUID-6 Questionnaire
/// ==================
/// Leakage with cough/sneeze? -> Sometimes
/// ...
/// ==================
/// SUI Score: 4
/// UUI Score: 6
/// ```
pub fn detailed_report(code: &ScoreCode) -> String {
    let scores = code.scores();
    let composite = ScoreInput::from(scores).composite();

    let mut report = format!("{} Questionnaire\n{RULE}\n", Quid6.name());
    for (item, value) in Quid6.items().into_iter().zip(scores) {
        // ScoreCode only holds on-scale values.
        let answer = answer_text(value).unwrap_or_default();
        report.push_str(&format!("{} -> {answer}\n", item.short_text));
    }
    report.push_str(RULE);
    report.push('\n');
    report.push_str(&format!("SUI Score: {}\n", composite.sui));
    report.push_str(&format!("UUI Score: {}", composite.uui));
    report
}
