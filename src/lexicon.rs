//! Static lexical tables shared by the rewriter and the detector.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

// ---------------------------------------------------------------------------
// Word substitutions
// ---------------------------------------------------------------------------

/// AI-flavored word -> plainer synonym. Keys are lowercase single words.
pub static WORD_SWAPS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("utilize", "use"),
        ("demonstrate", "show"),
        ("subsequently", "later"),
        ("nevertheless", "still"),
        ("furthermore", "also"),
        ("consequently", "so"),
        ("initially", "at first"),
        ("approximately", "about"),
        ("monitor", "watch"),
        ("implement", "start"),
        ("sufficient", "enough"),
        ("verify", "check"),
        ("commence", "start"),
        ("termination", "end"),
        ("endeavor", "try"),
        ("moreover", "plus"),
        ("therefore", "so"),
        ("however", "but"),
        ("additionally", "also"),
        ("significantly", "a lot"),
        ("fundamental", "basic"),
        ("crucial", "key"),
        ("examine", "look at"),
        ("facilitate", "help"),
        ("delve", "dig"),
        ("tapestry", "mix"),
        ("landscape", "scene"),
        ("underscores", "highlights"),
        ("testament", "proof"),
        ("realm", "world"),
        ("dynamic", "active"),
        ("meticulous", "careful"),
        ("comprehensive", "full"),
        ("foster", "grow"),
        ("nuance", "detail"),
        ("evolving", "changing"),
        ("pivotal", "key"),
        ("intricate", "complex"),
        ("leverage", "use"),
        ("optimize", "fix"),
        ("seamless", "smooth"),
        ("vital", "key"),
        ("notably", "mainly"),
        ("emphasis", "focus"),
        ("transformative", "big"),
        ("robust", "strong"),
        ("echo", "repeat"),
        ("resonate", "stick"),
        ("poignant", "sad"),
        ("stark", "sharp"),
    ]
    .into_iter()
    .collect()
});

// ---------------------------------------------------------------------------
// Phrase substitutions
// ---------------------------------------------------------------------------

/// AI-flavored phrase -> plainer phrase. Applied sequentially in this order;
/// later entries see the output of earlier substitutions.
pub static PHRASE_SWAPS: &[(&str, &str)] = &[
    ("it is important to note", "note that"),
    ("in summary", "basically"),
    ("in the world of", "in"),
    ("plays a significant role", "matters a lot"),
    ("testament to the", "proof of"),
    ("delve into", "look into"),
    ("rich tapestry", "mix"),
    ("ever-evolving", "changing"),
    ("let's explore", "let's see"),
    ("can be characterized by", "is like"),
    ("serves as a reminder", "reminds us"),
    ("silence followed", "it got quiet"),
    ("knew better", "wasn't fooled"),
    ("just as suddenly", "suddenly"),
    ("not peace, but", "not peace, just"),
    ("began to", "started to"),
    ("a sense of", "a feeling of"),
    ("darkness fell", "it got dark"),
    ("in the end", "finally"),
    ("only to find", "but found"),
    ("met with silence", "heard nothing"),
];

/// Compiled case-insensitive patterns for `PHRASE_SWAPS`, in table order.
pub static PHRASE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    PHRASE_SWAPS
        .iter()
        .map(|(phrase, replacement)| {
            let re = Regex::new(&format!("(?i){}", regex::escape(phrase))).unwrap();
            (re, *replacement)
        })
        .collect()
});

// ---------------------------------------------------------------------------
// Detector fingerprint vocabulary
// ---------------------------------------------------------------------------

/// Extended AI-vocabulary list scanned token-by-token by the detector.
pub static AI_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "delve",
        "tapestry",
        "landscape",
        "crucial",
        "underscores",
        "testament",
        "realm",
        "dynamic",
        "meticulous",
        "comprehensive",
        "utilize",
        "foster",
        "moreover",
        "furthermore",
        "consequently",
        "lastly",
        "additionally",
        "nuance",
        "evolving",
        "pivotal",
        "intricate",
        "leverage",
        "optimize",
        "seamless",
        "vital",
        "notably",
        "emphasis",
        "transformative",
        "robust",
        "echo",
        "resonate",
        "poignant",
        "stark",
        "testimony",
    ]
    .into_iter()
    .collect()
});

/// Substrings that are unambiguous machine-generation artifacts; any hit
/// forces the detector score to 100.
pub static HARD_TELLS: &[&str] = &["regenerate response", "as an ai language model"];
