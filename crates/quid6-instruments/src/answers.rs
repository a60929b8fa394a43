use std::collections::BTreeMap;

use crate::instruments::quid6::ITEM_COUNT;

/// Order form answers, keyed by 1-based question number, into item scores.
/// Unanswered questions count as 0. Keys outside 1..=6 are ignored.
pub fn scores_from_answers(answers: &BTreeMap<u8, i64>) -> [i64; ITEM_COUNT] {
    std::array::from_fn(|i| answers.get(&(i as u8 + 1)).copied().unwrap_or(0))
}
