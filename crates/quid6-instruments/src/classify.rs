//! Stress/urge classification of a QUID-6 response.
//!
//! The first three items sum to the stress (SUI) score, the last three to
//! the urge (UUI) score. Each subscore is compared against a fixed cutoff;
//! when both are met the larger subscore decides which mixed presentation
//! is reported. The outcome picks who the patient is scheduled with and
//! which education videos they are shown.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::instruments::quid6::ITEM_COUNT;

/// Stress subscore at or above which the stress criterion is met.
pub const SUI_THRESHOLD: i64 = 4;

/// Urge subscore at or above which the urge criterion is met.
pub const UUI_THRESHOLD: i64 = 6;

/// Separator between diagnosis and recommendation in [`ClassificationResult::message`].
/// Consumers render the message as HTML, so this is a literal tag.
pub const MESSAGE_SEPARATOR: &str = "<br />";

/// Exactly six item scores, in form order.
///
/// Values are not range-checked; see [`crate::Instrument::validate_scores`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreInput([i64; ITEM_COUNT]);

impl ScoreInput {
    pub fn new(scores: &[i64]) -> Result<Self, InstrumentError> {
        let values = <[i64; ITEM_COUNT]>::try_from(scores).map_err(|_| {
            InstrumentError::InvalidInput {
                expected: ITEM_COUNT,
                actual: scores.len(),
            }
        })?;
        Ok(Self(values))
    }

    pub fn values(&self) -> &[i64; ITEM_COUNT] {
        &self.0
    }

    pub fn composite(&self) -> CompositeScores {
        let [s1, s2, s3, u1, u2, u3] = self.0;
        CompositeScores {
            sui: s1.saturating_add(s2).saturating_add(s3),
            uui: u1.saturating_add(u2).saturating_add(u3),
        }
    }

    pub fn classify(&self) -> ClassificationResult {
        let composite = self.composite();
        let diagnosis = composite.diagnosis();

        debug!(
            sui = composite.sui,
            uui = composite.uui,
            diagnosis = ?diagnosis,
            "classified QUID-6 response"
        );

        ClassificationResult::new(diagnosis, composite)
    }
}

impl From<[i64; ITEM_COUNT]> for ScoreInput {
    fn from(values: [i64; ITEM_COUNT]) -> Self {
        Self(values)
    }
}

/// Stress and urge subscores derived from a [`ScoreInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositeScores {
    // Serialized as JSON numbers, not bigint.
    #[ts(type = "number")]
    pub sui: i64,
    #[ts(type = "number")]
    pub uui: i64,
}

impl CompositeScores {
    pub fn has_sui(&self) -> bool {
        self.sui >= SUI_THRESHOLD
    }

    pub fn has_uui(&self) -> bool {
        self.uui >= UUI_THRESHOLD
    }

    pub fn total(&self) -> i64 {
        self.sui.saturating_add(self.uui)
    }

    /// Resolve the outcome. Checks run in priority order and the first match wins.
    pub fn diagnosis(&self) -> Diagnosis {
        match (self.has_sui(), self.has_uui()) {
            (true, true) => {
                if self.sui > self.uui {
                    Diagnosis::StressPredominantMixed
                } else {
                    // Equal subscores land here as well.
                    Diagnosis::UrgePredominantMixed
                }
            }
            (true, false) => Diagnosis::Stress,
            (false, true) => Diagnosis::Urge,
            (false, false) => Diagnosis::NoClearPredominance,
        }
    }
}

/// Who the patient should be booked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScheduleTarget {
    Surgeon,
    /// Advanced practice provider.
    App,
}

impl ScheduleTarget {
    pub fn instruction(&self) -> &'static str {
        match self {
            ScheduleTarget::Surgeon => "Schedule with surgeon",
            ScheduleTarget::App => "Schedule with APP",
        }
    }
}

/// Identifier of one education video. The media layer maps these to assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PathwayStep {
    #[serde(rename = "introduction")]
    Introduction,
    #[serde(rename = "sp-mui")]
    StressPredominantMixed,
    #[serde(rename = "up-mui")]
    UrgePredominantMixed,
    #[serde(rename = "sui")]
    Stress,
    #[serde(rename = "uui")]
    Urge,
    #[serde(rename = "spath-1")]
    StressPath1,
    #[serde(rename = "spath-2")]
    StressPath2,
    #[serde(rename = "spath-3")]
    StressPath3,
    #[serde(rename = "upath-1")]
    UrgePath1,
    #[serde(rename = "upath-2")]
    UrgePath2,
    #[serde(rename = "upath-3")]
    UrgePath3,
    #[serde(rename = "close")]
    Close,
}

impl PathwayStep {
    pub const ALL: [PathwayStep; 12] = [
        PathwayStep::Introduction,
        PathwayStep::StressPredominantMixed,
        PathwayStep::UrgePredominantMixed,
        PathwayStep::Stress,
        PathwayStep::Urge,
        PathwayStep::StressPath1,
        PathwayStep::StressPath2,
        PathwayStep::StressPath3,
        PathwayStep::UrgePath1,
        PathwayStep::UrgePath2,
        PathwayStep::UrgePath3,
        PathwayStep::Close,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathwayStep::Introduction => "introduction",
            PathwayStep::StressPredominantMixed => "sp-mui",
            PathwayStep::UrgePredominantMixed => "up-mui",
            PathwayStep::Stress => "sui",
            PathwayStep::Urge => "uui",
            PathwayStep::StressPath1 => "spath-1",
            PathwayStep::StressPath2 => "spath-2",
            PathwayStep::StressPath3 => "spath-3",
            PathwayStep::UrgePath1 => "upath-1",
            PathwayStep::UrgePath2 => "upath-2",
            PathwayStep::UrgePath3 => "upath-3",
            PathwayStep::Close => "close",
        }
    }
}

impl std::fmt::Display for PathwayStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification outcome, in resolution priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Diagnosis {
    StressPredominantMixed,
    UrgePredominantMixed,
    Stress,
    Urge,
    NoClearPredominance,
}

impl Diagnosis {
    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::StressPredominantMixed => "Stress-Predominant Mixed Urinary Incontinence",
            Diagnosis::UrgePredominantMixed => "Urge-Predominant Mixed Urinary Incontinence",
            Diagnosis::Stress => "Stress Urinary Incontinence",
            Diagnosis::Urge => "Urge Urinary Incontinence",
            Diagnosis::NoClearPredominance => {
                "No clear predominance; further evaluation may be needed"
            }
        }
    }

    pub fn schedule_target(&self) -> ScheduleTarget {
        match self {
            Diagnosis::StressPredominantMixed | Diagnosis::Stress => ScheduleTarget::Surgeon,
            Diagnosis::UrgePredominantMixed | Diagnosis::Urge | Diagnosis::NoClearPredominance => {
                ScheduleTarget::App
            }
        }
    }

    /// Education videos for this outcome, in playback order. Empty when no
    /// pathway applies.
    pub fn pathway(&self) -> Vec<PathwayStep> {
        use PathwayStep::*;

        let (topic, track) = match self {
            Diagnosis::StressPredominantMixed => (StressPredominantMixed, STRESS_TRACK),
            Diagnosis::UrgePredominantMixed => (UrgePredominantMixed, URGE_TRACK),
            Diagnosis::Stress => (Stress, STRESS_TRACK),
            Diagnosis::Urge => (Urge, URGE_TRACK),
            Diagnosis::NoClearPredominance => return Vec::new(),
        };

        let mut steps = Vec::with_capacity(track.len() + 3);
        steps.push(Introduction);
        steps.push(topic);
        steps.extend_from_slice(&track);
        steps.push(Close);
        steps
    }
}

const STRESS_TRACK: [PathwayStep; 3] = [
    PathwayStep::StressPath1,
    PathwayStep::StressPath2,
    PathwayStep::StressPath3,
];

const URGE_TRACK: [PathwayStep; 3] = [
    PathwayStep::UrgePath1,
    PathwayStep::UrgePath2,
    PathwayStep::UrgePath3,
];

/// Result handed to the scheduling UI and playlist builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClassificationResult {
    /// Diagnosis label and scheduling instruction joined by [`MESSAGE_SEPARATOR`].
    pub message: String,
    pub schedule_target: ScheduleTarget,
    pub pathway_steps: Vec<PathwayStep>,
    pub diagnosis: Diagnosis,
    pub recommendation: String,
    pub composite: CompositeScores,
}

impl ClassificationResult {
    fn new(diagnosis: Diagnosis, composite: CompositeScores) -> Self {
        let schedule_target = diagnosis.schedule_target();
        let recommendation = schedule_target.instruction();
        Self {
            message: format!("{}{MESSAGE_SEPARATOR}{recommendation}", diagnosis.label()),
            schedule_target,
            pathway_steps: diagnosis.pathway(),
            diagnosis,
            recommendation: recommendation.to_string(),
            composite,
        }
    }
}

/// Classify six item scores in form order.
///
/// Fails with [`InstrumentError::InvalidInput`] unless exactly six values
/// are given. Values outside the 0–4 scale are accepted as-is.
pub fn classify(scores: &[i64]) -> Result<ClassificationResult, InstrumentError> {
    Ok(ScoreInput::new(scores)?.classify())
}
