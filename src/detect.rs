//! Heuristic scoring of the probability that a text is machine-generated.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::lexicon::{AI_WORDS, HARD_TELLS, PHRASE_SWAPS};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Composite AI-likelihood score plus its two structural sub-metrics, each
/// clamped to 0..=100. `perplexity` is a vocabulary-diversity proxy and
/// `burstiness` a sentence-length-variance proxy, not the true statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub score: i32,
    pub perplexity: i32,
    pub burstiness: i32,
}

impl AnalysisResult {
    const ZERO: AnalysisResult = AnalysisResult {
        score: 0,
        perplexity: 0,
        burstiness: 0,
    };

    pub fn verdict(&self) -> Verdict {
        Verdict::for_score(self.score)
    }
}

/// Human-readable banding of the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    LikelyHuman,
    Mixed,
    LikelyAi,
}

impl Verdict {
    pub fn for_score(score: i32) -> Verdict {
        if score < HP.verdict_mixed_min {
            Verdict::LikelyHuman
        } else if score < HP.verdict_ai_min {
            Verdict::Mixed
        } else {
            Verdict::LikelyAi
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::LikelyHuman => "Likely Human",
            Verdict::Mixed => "Mixed / Unsure",
            Verdict::LikelyAi => "Likely AI",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Verdict::LikelyHuman => "This text has high variance and natural patterns.",
            Verdict::Mixed => "Contains elements of both AI and human writing.",
            Verdict::LikelyAi => "Shows uniform sentence structure and robotic patterns.",
        }
    }
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    // stdDev at or above this maps to a full burstiness score of 100.
    stddev_full_scale: f64,
    ttr_gain: f64,
    word_hit_points: usize,
    phrase_hit_points: usize,
    dash_hit_points: usize,
    pattern_norm: f64,
    burstiness_weight: f64,
    diversity_weight: f64,
    pattern_weight: f64,
    uniform_stddev_floor: f64,
    uniform_bonus: f64,
    score_min: f64,
    score_max: f64,
    verdict_mixed_min: i32,
    verdict_ai_min: i32,
}

static HP: Hyperparameters = Hyperparameters {
    stddev_full_scale: 12.0,
    ttr_gain: 1.8,
    word_hit_points: 2,
    phrase_hit_points: 6,
    dash_hit_points: 3,
    pattern_norm: 2000.0,
    burstiness_weight: 0.20,
    diversity_weight: 0.10,
    pattern_weight: 0.70,
    uniform_stddev_floor: 3.0,
    uniform_bonus: 15.0,
    score_min: 0.0,
    score_max: 100.0,
    verdict_mixed_min: 30,
    verdict_ai_min: 70,
};

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score `text` on a 0..=100 probability-of-AI-origin scale. Deterministic;
/// empty or wordless input returns the zero result.
#[tracing::instrument(skip_all)]
pub fn analyze(text: &str) -> AnalysisResult {
    let sentence_lengths: Vec<f64> = SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.split_whitespace().count() as f64)
        .collect();
    if sentence_lengths.is_empty() {
        return AnalysisResult::ZERO;
    }

    // 1. Burstiness: population stddev of sentence lengths. Machine prose
    //    tends toward uniform cadence, so low stddev reads as machine-like.
    let mean = sentence_lengths.iter().sum::<f64>() / sentence_lengths.len() as f64;
    let variance = sentence_lengths
        .iter()
        .map(|len| (len - mean).powi(2))
        .sum::<f64>()
        / sentence_lengths.len() as f64;
    let std_dev = variance.sqrt();
    let variance_score = (std_dev / HP.stddev_full_scale * 100.0).min(100.0);

    // 2. Vocabulary diversity via type-token ratio.
    let lower = text.to_lowercase();
    let words: Vec<&str> = WORD_RE.find_iter(&lower).map(|m| m.as_str()).collect();
    if words.is_empty() {
        return AnalysisResult::ZERO;
    }
    let unique: std::collections::HashSet<&str> = words.iter().copied().collect();
    let ttr = unique.len() as f64 / words.len() as f64;
    let diversity_score = (ttr * 100.0 * HP.ttr_gain).min(100.0);

    // 3. Lexical fingerprint: vocabulary tokens, stock phrases, dashes.
    let mut hits = 0usize;
    for word in &words {
        if AI_WORDS.contains(word) {
            hits += HP.word_hit_points;
        }
    }
    for (phrase, _) in PHRASE_SWAPS {
        if lower.contains(phrase) {
            hits += HP.phrase_hit_points;
        }
    }
    let dash_count = text.matches('\u{2014}').count() + text.matches("--").count();
    hits += dash_count * HP.dash_hit_points;
    let pattern_score = (hits as f64 / words.len() as f64 * HP.pattern_norm).min(100.0);

    // 4. Weighted composite; stock phrasing dominates.
    let mut composite = (100.0 - variance_score) * HP.burstiness_weight
        + (100.0 - diversity_score) * HP.diversity_weight
        + pattern_score * HP.pattern_weight;
    if std_dev < HP.uniform_stddev_floor {
        composite += HP.uniform_bonus;
    }
    if HARD_TELLS.iter().any(|tell| lower.contains(tell)) {
        composite = HP.score_max;
    }

    AnalysisResult {
        score: composite.clamp(HP.score_min, HP.score_max).round() as i32,
        perplexity: diversity_score.round() as i32,
        burstiness: variance_score.round() as i32,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_result_for_no_sentences() {
        assert_eq!(analyze(""), AnalysisResult::ZERO);
        assert_eq!(analyze("   "), AnalysisResult::ZERO);
        assert_eq!(analyze("...!?"), AnalysisResult::ZERO);
    }

    #[test]
    fn verdict_bands() {
        assert_eq!(Verdict::for_score(0), Verdict::LikelyHuman);
        assert_eq!(Verdict::for_score(29), Verdict::LikelyHuman);
        assert_eq!(Verdict::for_score(30), Verdict::Mixed);
        assert_eq!(Verdict::for_score(69), Verdict::Mixed);
        assert_eq!(Verdict::for_score(70), Verdict::LikelyAi);
        assert_eq!(Verdict::for_score(100), Verdict::LikelyAi);
    }

    #[test]
    fn dash_occurrences_raise_pattern_hits() {
        // Same words, with and without dashes; dashed version scores higher.
        let plain = "The meeting ran long today. Nobody minded the extra time spent on planning.";
        let dashed =
            "The meeting ran long today \u{2014} nobody minded -- the extra time spent on planning.";
        assert!(analyze(dashed).score > analyze(plain).score);
    }

    #[test]
    fn phrase_presence_counts_once_regardless_of_repetition() {
        // Same word multiset and sentence lengths in both texts; the only
        // difference is that "is it" swaps to "it is" in the second sentence,
        // turning one flagged-phrase occurrence into two. Padded to 300 words
        // so the 6-point phrase contribution sits well below the clamp: a
        // per-occurrence count would move the score, a per-presence count
        // cannot.
        let pad: Vec<String> = (0..280).map(|i| format!("pad{i:03}")).collect();
        let pad_text = pad
            .chunks(10)
            .map(|chunk| chunk.join(" "))
            .collect::<Vec<_>>()
            .join(". ");
        let once = format!(
            "It is important to note alpha bravo charlie delta golf. \
             Is it important to note foxtrot hotel india juliet kilo. {pad_text}."
        );
        let twice = format!(
            "It is important to note alpha bravo charlie delta golf. \
             It is important to note foxtrot hotel india juliet kilo. {pad_text}."
        );
        let once = analyze(&once);
        let twice = analyze(&twice);
        assert_eq!(once.score, twice.score);
        // 30 uniform 10-word sentences: burstiness 0 (+15 bonus), diversity
        // clamps to 100, and the single phrase hit gives 6/300*2000 = 40, so
        // 0.2*100 + 0.7*40 + 15 = 63.
        assert_eq!(once.score, 63);
    }
}
