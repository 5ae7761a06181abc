//! ATS friendliness heuristic. A presentation score, not a probability.

use serde::{Deserialize, Serialize};

pub const MAX_ATS_SCORE: u32 = 100;
const COVERAGE_WEIGHT: f64 = 50.0;
const LENGTH_THRESHOLD_CHARS: usize = 1000;
const SHORT_TEXT_BONUS: u32 = 10;
const LONG_TEXT_BONUS: u32 = 20;
/// (ratio upper bound, points), checked in order.
const READABILITY_BANDS: &[(f64, u32)] = &[(0.05, 20), (0.10, 10)];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub skill_coverage: u32,
    pub length_bonus: u32,
    pub readability: u32,
    /// Share of characters that are neither ASCII letters nor whitespace.
    pub special_char_ratio: f64,
    pub total: u32,
}

/// Scores `text` given the number of skills found and the total number of
/// skill keywords in the taxonomy.
pub fn ats_score(text: &str, found_skills: usize, total_skill_keywords: usize) -> AtsBreakdown {
    let skill_coverage = if total_skill_keywords > 0 {
        (found_skills as f64 / total_skill_keywords as f64 * COVERAGE_WEIGHT) as u32
    } else {
        0
    };

    let char_count = text.chars().count();
    let length_bonus = if char_count < LENGTH_THRESHOLD_CHARS {
        SHORT_TEXT_BONUS
    } else {
        LONG_TEXT_BONUS
    };

    let special = text
        .chars()
        .filter(|c| !c.is_ascii_alphabetic() && !c.is_whitespace())
        .count();
    let special_char_ratio = special as f64 / char_count.max(1) as f64;

    // An empty document has nothing readable to reward.
    let readability = if char_count == 0 {
        0
    } else {
        READABILITY_BANDS
            .iter()
            .find(|(bound, _)| special_char_ratio < *bound)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    };

    let total = (skill_coverage + length_bonus + readability).min(MAX_ATS_SCORE);

    AtsBreakdown {
        skill_coverage,
        length_bonus,
        readability,
        special_char_ratio,
        total,
    }
}
