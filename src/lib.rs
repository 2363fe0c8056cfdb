//! Heuristic humanizer and detector for AI-flavored prose.
//!
//! Two independent pure functions share the static tables in [`lexicon`]:
//! [`humanize`] rewrites text to strip stylistic markers of machine-generated
//! prose, and [`analyze`] scores text on a 0..=100 probability-of-AI-origin
//! scale from sentence-length variance, vocabulary diversity, and lexical
//! fingerprint hits. `analyze` is deterministic; `humanize` consults a random
//! source and is not, so compare its output structurally, never byte-for-byte.

pub mod detect;
pub mod lexicon;
pub mod rewrite;

pub use detect::{analyze, AnalysisResult, Verdict};
pub use rewrite::{humanize, humanize_with, Readability, Tone};
