use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The type of score an item or domain produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Unscaled sum of item ratings.
    Raw,
    /// Likert-style frequency rating (0–4).
    Rating,
}

/// Inclusive range of valid values for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    #[ts(type = "number")]
    pub min: i64,
    #[ts(type = "number")]
    pub max: i64,
}

impl ScoreRange {
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One selectable answer, shared by every item on a frequency scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    #[ts(type = "number")]
    pub value: i64,
    pub text: String,
}

/// A single questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    /// 1-based position on the form. Answers are keyed by this number.
    pub number: u8,
    pub text: String,
    /// Condensed wording used in clinician-facing reports.
    pub short_text: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
}

/// A top-level domain within an instrument, containing items.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub items: Vec<Item>,
    pub composite_score_type: Option<ScoreType>,
    pub composite_range: Option<ScoreRange>,
    pub description: Option<String>,
}

/// A score entry provided by the user for validation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub item_id: String,
    #[ts(type = "number")]
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item_id: String,
    #[ts(type = "number")]
    pub value: i64,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}
