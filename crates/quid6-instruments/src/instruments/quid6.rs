use crate::Instrument;
use crate::scoring::{AnswerOption, Domain, Item, ScoreRange, ScoreType};

/// Number of items on the form. Items 1–3 load on stress, 4–6 on urge.
pub const ITEM_COUNT: usize = 6;

/// Range shared by every item.
pub const ITEM_RANGE: ScoreRange = ScoreRange { min: 0, max: 4 };

/// QUID-6: Questionnaire for Urinary Incontinence Diagnosis.
/// Six frequency-rated items, 0 ("None of the time") to 4 ("All of the time").
/// Stress and urge subscores each range 0–12.
pub struct Quid6;

impl Instrument for Quid6 {
    fn id(&self) -> &str {
        "quid6"
    }

    fn name(&self) -> &str {
        "QUID-6"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let composite = ScoreRange { min: 0, max: 12 };

            vec![
                Domain {
                    id: "sui".to_string(),
                    name: "Stress Urinary Incontinence".to_string(),
                    items: vec![
                        item(
                            1,
                            "leak_cough_sneeze",
                            "Do you leak urine (even small drops), wet yourself, or wet your pads or undergarments when you cough or sneeze?",
                            "Leakage with cough/sneeze?",
                        ),
                        item(
                            2,
                            "leak_bend_lift",
                            "Do you leak urine (even small drops), wet yourself, or wet your pads or undergarments when you bend down or lift something up?",
                            "Leakage with bending/lifting?",
                        ),
                        item(
                            3,
                            "leak_activity",
                            "Do you leak urine (even small drops), wet yourself, or wet your pads or undergarments when you walk quickly, jog or exercise?",
                            "Leakage with activity?",
                        ),
                    ],
                    composite_score_type: Some(ScoreType::Raw),
                    composite_range: Some(composite),
                    description: Some("4 or more meets the stress criterion".to_string()),
                },
                Domain {
                    id: "uui".to_string(),
                    name: "Urge Urinary Incontinence".to_string(),
                    items: vec![
                        item(
                            4,
                            "leak_on_way",
                            "Do you leak urine (even small drops), wet yourself, or wet your pads or undergarments when you are on your way to the bathroom?",
                            "Leakage on way to bathroom?",
                        ),
                        item(
                            5,
                            "leak_strong_urge",
                            "Do you leak urine (even small drops), wet yourself, or wet your pads or undergarments when you get such a strong and uncomfortable need to urinate that you leak urine (even small drops) or wet yourself before reaching the toilet?",
                            "Leakage with strong urge?",
                        ),
                        item(
                            6,
                            "rush_with_urge",
                            "Do you have to rush to the bathroom because you get a sudden, strong need to urinate?",
                            "Rush to bathroom with urge?",
                        ),
                    ],
                    composite_score_type: Some(ScoreType::Raw),
                    composite_range: Some(composite),
                    description: Some("6 or more meets the urge criterion".to_string()),
                },
            ]
        });
        &DOMAINS
    }
}

/// The five frequency answers offered for every item, in value order.
pub fn answer_options() -> &'static [AnswerOption] {
    static OPTIONS: std::sync::LazyLock<Vec<AnswerOption>> = std::sync::LazyLock::new(|| {
        [
            "None of the time",
            "Rarely",
            "Sometimes",
            "Most of the time",
            "All of the time",
        ]
        .iter()
        .zip(0..)
        .map(|(text, value)| AnswerOption {
            value,
            text: text.to_string(),
        })
        .collect()
    });
    &OPTIONS
}

/// Answer wording for a value, if it is on the scale.
pub fn answer_text(value: i64) -> Option<&'static str> {
    answer_options()
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.text.as_str())
}

fn item(number: u8, id: &str, text: &str, short_text: &str) -> Item {
    Item {
        id: id.to_string(),
        number,
        text: text.to_string(),
        short_text: short_text.to_string(),
        score_type: ScoreType::Rating,
        range: ITEM_RANGE,
    }
}
