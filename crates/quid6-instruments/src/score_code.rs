//! Six-digit QUID-6 score code.
//!
//! Staff copy a completed questionnaire as `QUID-6: 223111` and paste it
//! into scheduling notes. The code is later recovered from that free text
//! to rebuild the clinician report.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::classify::{ClassificationResult, ScoreInput};
use crate::error::InstrumentError;
use crate::instruments::quid6::{ITEM_COUNT, ITEM_RANGE};

pub const CODE_PREFIX: &str = "QUID-6: ";

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-4]{6}").expect("score code pattern is valid"));

/// A complete response with every item on the 0–4 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScoreCode([u8; ITEM_COUNT]);

impl ScoreCode {
    pub fn from_scores(scores: &[i64]) -> Result<Self, InstrumentError> {
        let input = ScoreInput::new(scores)?;

        let mut digits = [0u8; ITEM_COUNT];
        for (i, (&value, digit)) in input.values().iter().zip(&mut digits).enumerate() {
            if !ITEM_RANGE.contains(value) {
                return Err(InstrumentError::OutOfRange {
                    item: i + 1,
                    value,
                    min: ITEM_RANGE.min,
                    max: ITEM_RANGE.max,
                });
            }
            *digit = value as u8;
        }
        Ok(Self(digits))
    }

    /// Find the first run of six scale digits anywhere in `text`.
    pub fn find_in(text: &str) -> Option<Self> {
        let Some(found) = CODE_PATTERN.find(text) else {
            warn!(len = text.len(), "no QUID-6 score code found in text");
            return None;
        };
        Some(Self::from_digits(found.as_str()))
    }

    pub fn scores(&self) -> [i64; ITEM_COUNT] {
        self.0.map(i64::from)
    }

    pub fn classify(&self) -> ClassificationResult {
        ScoreInput::from(self.scores()).classify()
    }

    /// Caller guarantees six ASCII digits in `0..=4`.
    fn from_digits(digits: &str) -> Self {
        let mut out = [0u8; ITEM_COUNT];
        for (slot, b) in out.iter_mut().zip(digits.bytes()) {
            *slot = b - b'0';
        }
        Self(out)
    }
}

impl fmt::Display for ScoreCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(CODE_PREFIX)?;
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for ScoreCode {
    type Err = InstrumentError;

    /// Accepts `223111` or `QUID-6: 223111`, surrounding whitespace allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(CODE_PREFIX.trim_end())
            .map(str::trim_start)
            .unwrap_or(trimmed);

        if digits.len() == ITEM_COUNT && CODE_PATTERN.is_match(digits) {
            Ok(Self::from_digits(digits))
        } else {
            Err(InstrumentError::InvalidScoreCode(s.to_string()))
        }
    }
}

impl TryFrom<String> for ScoreCode {
    type Error = InstrumentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ScoreCode> for String {
    fn from(code: ScoreCode) -> Self {
        code.to_string()
    }
}
