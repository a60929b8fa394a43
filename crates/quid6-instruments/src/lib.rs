//! quid6-instruments
//!
//! QUID-6 urinary incontinence questionnaire: item definitions, the
//! stress/urge classifier that picks a scheduling target and education
//! pathway, and the six-digit score code staff paste between systems.
//! Pure data and pure functions; no I/O.

pub mod answers;
pub mod classify;
pub mod error;
pub mod instruments;
pub mod report;
pub mod score_code;
pub mod scoring;

use scoring::{Domain, Item, ScoreEntry, ValidationError};

pub use classify::{ClassificationResult, Diagnosis, PathwayStep, ScheduleTarget, classify};
pub use error::InstrumentError;
pub use score_code::ScoreCode;

/// Trait implemented by each questionnaire instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "quid6").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "QUID-6").
    fn name(&self) -> &str;

    /// The domains and items this instrument measures.
    fn domains(&self) -> &[Domain];

    /// All items across domains, in form order.
    fn items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.domains().iter().flat_map(|d| &d.items).collect();
        items.sort_by_key(|i| i.number);
        items
    }

    /// Validate a set of score entries against this instrument's item ranges.
    /// Entries for unknown items are ignored.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let items = self.items();

        let mut errors = Vec::new();
        for entry in scores {
            if let Some(item) = items.iter().find(|i| i.id == entry.item_id)
                && !item.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    item_id: entry.item_id.clone(),
                    value: entry.value,
                    expected_range: item.range,
                    score_type: item.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        item.short_text,
                        entry.value,
                        item.range.min,
                        item.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Format scores as structured text, one section per domain.
    fn to_structured_input(&self, scores: &[ScoreEntry]) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for domain in self.domains() {
            output.push_str(&format!("### {}\n", domain.name));
            for item in &domain.items {
                if let Some(entry) = scores.iter().find(|e| e.item_id == item.id) {
                    output.push_str(&format!("- {}: {}\n", item.short_text, entry.value));
                }
            }
            output.push('\n');
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::quid6::Quid6)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
