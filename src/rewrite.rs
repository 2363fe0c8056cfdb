//! Rewrite pipeline that strips stylistic markers of machine-generated prose.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::lexicon::{PHRASE_PATTERNS, WORD_SWAPS};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Rewrite-style switch. Only `Casual` alters behavior (contractions plus
/// occasional filler openers); everything else is a pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Casual,
}

/// Accepted but not yet consulted by any pipeline stage; reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Readability {
    #[default]
    Standard,
    Simple,
    Advanced,
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    // Substitution fires when the draw exceeds the threshold.
    word_swap_skip: f64,
    merge_skip: f64,
    split_skip: f64,
    filler_skip: f64,
    merge_max_words: usize,
    split_min_words: usize,
}

static HP: Hyperparameters = Hyperparameters {
    word_swap_skip: 0.2,
    merge_skip: 0.6,
    split_skip: 0.5,
    filler_skip: 0.85,
    merge_max_words: 8,
    split_min_words: 20,
};

const TRAILING_PUNCT: &[char] = &['.', ',', '!', '?', ';', ':'];
const TERMINATORS: &[char] = &['.', '!', '?'];

static FILLERS: &[&str] = &["Honestly, ", "Basically, ", "You know, ", "Look, "];

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

static CONTRACTION_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (" cannot ", " can't "),
        (" do not ", " don't "),
        (" is not ", " isn't "),
        (" will not ", " won't "),
        (" i am ", " I'm "),
    ]
    .into_iter()
    .map(|(long, short)| {
        let re = Regex::new(&format!("(?i){}", regex::escape(long))).unwrap();
        (re, short)
    })
    .collect()
});

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Rewrite `text` with ambient randomness. See [`humanize_with`].
#[tracing::instrument(skip_all)]
pub fn humanize(text: &str, tone: Tone, readability: Readability) -> String {
    humanize_with(text, tone, readability, &mut rand::thread_rng())
}

/// Rewrite `text` to reduce stylistic markers of machine-generated prose,
/// consulting `rng` for the probabilistic stages. Empty or blank input yields
/// an empty string. `readability` is reserved and currently ignored.
pub fn humanize_with<R: Rng>(text: &str, tone: Tone, readability: Readability, rng: &mut R) -> String {
    let _ = readability;
    if text.trim().is_empty() {
        return String::new();
    }

    // 1. Em-dashes and double hyphens are a strong machine-prose fingerprint.
    let text = text.replace('\u{2014}', ", ").replace("--", ", ");

    // 2. Phrase table, sequentially; later entries see earlier output.
    let mut text = text;
    for (re, replacement) in PHRASE_PATTERNS.iter() {
        text = re.replace_all(&text, *replacement).into_owned();
    }

    // 3. Word table, probabilistically.
    let text = swap_words(&text, rng);

    // 4. Merge short sentences and split long ones to vary cadence.
    let mut sentences = restructure(&text, rng);

    // 5. Casual tone: contractions plus the occasional filler opener.
    if tone == Tone::Casual {
        sentences = sentences
            .into_iter()
            .map(|s| casualize(&s, rng))
            .collect();
    }

    sentences.join(" ")
}

// ---------------------------------------------------------------------------
// Pipeline stages
// ---------------------------------------------------------------------------

fn swap_words<R: Rng>(text: &str, rng: &mut R) -> String {
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|token| {
            let bare = token.trim_end_matches(TRAILING_PUNCT);
            let key = bare.to_lowercase();
            if let Some(replacement) = WORD_SWAPS.get(key.as_str()) {
                // Skip 20% of hits so the output is not uniformly swapped.
                if rng.gen::<f64>() > HP.word_swap_skip {
                    let tail = &token[bare.len()..];
                    let head = if token.chars().next().is_some_and(char::is_uppercase) {
                        capitalize_first(replacement)
                    } else {
                        (*replacement).to_string()
                    };
                    return format!("{head}{tail}");
                }
            }
            token.to_string()
        })
        .collect();
    tokens.join(" ")
}

fn restructure<R: Rng>(text: &str, rng: &mut R) -> Vec<String> {
    let sentences = split_sentences(text);
    let mut out = Vec::with_capacity(sentences.len());
    let mut i = 0;
    while i < sentences.len() {
        let s = sentences[i].trim();
        let words = s.split_whitespace().count();

        if i + 1 < sentences.len()
            && words < HP.merge_max_words
            && rng.gen::<f64>() > HP.merge_skip
        {
            let head = s.trim_end_matches(TERMINATORS);
            let next = sentences[i + 1].trim();
            out.push(format!("{head} and {}", lowercase_first(next)));
            i += 2;
            continue;
        }

        if words > HP.split_min_words && rng.gen::<f64>() > HP.split_skip {
            if let Some((head, conjunction, tail)) = split_at_conjunction(s) {
                out.push(format!("{head}."));
                out.push(format!("{} {tail}", capitalize_first(conjunction)));
                i += 1;
                continue;
            }
        }

        out.push(s.to_string());
        i += 1;
    }
    out
}

fn casualize<R: Rng>(sentence: &str, rng: &mut R) -> String {
    let mut s = sentence.to_string();
    for (re, short) in CONTRACTION_PATTERNS.iter() {
        s = re.replace_all(&s, *short).into_owned();
    }
    if rng.gen::<f64>() > HP.filler_skip {
        let filler = FILLERS[rng.gen_range(0..FILLERS.len())];
        return format!("{filler}{}", lowercase_first(&s));
    }
    s
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Runs of non-terminator text plus their terminators; a terminator-less tail
/// fragment is kept as its own sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in SENTENCE_RE.find_iter(text) {
        out.push(m.as_str().to_string());
        last = m.end();
    }
    let tail = text[last..].trim();
    if !tail.is_empty() {
        out.push(tail.to_string());
    }
    out
}

/// First standalone " and " / " but ", whichever occurs earlier.
fn split_at_conjunction(s: &str) -> Option<(&str, &str, &str)> {
    let (pos, conjunction) = match (s.find(" and "), s.find(" but ")) {
        (Some(a), Some(b)) if b < a => (b, "but"),
        (Some(a), _) => (a, "and"),
        (None, Some(b)) => (b, "but"),
        (None, None) => return None,
    };
    let tail = &s[pos + 1 + conjunction.len() + 1..];
    Some((&s[..pos], conjunction, tail))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    // StepRng(0, 0) drives every draw to 0.0, so no probabilistic stage fires;
    // StepRng(u64::MAX, 0) drives every draw to ~1.0, so they all fire.
    fn never() -> StepRng {
        StepRng::new(0, 0)
    }

    fn always() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn split_sentences_keeps_terminatorless_tail() {
        let parts = split_sentences("First one. Second one! trailing fragment");
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2], "trailing fragment");
    }

    #[test]
    fn split_at_conjunction_prefers_earlier_match() {
        let (head, conj, tail) = split_at_conjunction("x but y and z").unwrap();
        assert_eq!(head, "x");
        assert_eq!(conj, "but");
        assert_eq!(tail, "y and z");
        assert!(split_at_conjunction("no conjunction here").is_none());
    }

    #[test]
    fn word_swap_preserves_capitalization_and_punctuation() {
        let out = swap_words("Utilize the tool, then verify.", &mut always());
        assert_eq!(out, "Use the tool, then check.");
    }

    #[test]
    fn word_swap_can_decline_every_hit() {
        let input = "Utilize the tool, then verify.";
        assert_eq!(swap_words(input, &mut never()), input);
    }

    #[test]
    fn merge_lowercases_second_sentence() {
        let out = restructure("It works. The rest continues from here.", &mut always());
        assert_eq!(out, vec!["It works and the rest continues from here."]);
    }

    #[test]
    fn long_sentence_splits_at_conjunction() {
        let s = "the first clause keeps going with quite a few extra words in it \
                 but the second clause also runs on for a while longer.";
        let out = restructure(s, &mut always());
        assert_eq!(out.len(), 2);
        assert!(out[0].ends_with("in it."));
        assert!(out[1].starts_with("But the second clause"));
    }

    #[test]
    fn casual_tone_applies_contractions() {
        // Patterns are space-delimited, so a sentence-initial "I am" is left
        // alone; mid-sentence occurrences contract.
        let out = casualize("Right now I am sure this is not broken.", &mut never());
        assert_eq!(out, "Right now I'm sure this isn't broken.");
    }

    #[test]
    fn casual_filler_prepends_and_lowercases() {
        let out = casualize("This holds.", &mut always());
        assert!(FILLERS.iter().any(|f| out.starts_with(f)), "got: {out}");
        assert!(out.ends_with("this holds."));
    }

    #[test]
    fn blank_input_maps_to_empty_output() {
        assert_eq!(
            humanize_with("   ", Tone::Default, Readability::Standard, &mut never()),
            ""
        );
    }
}
