//! Post-processing that roughs up model output: fillers, self-corrections,
//! typos, hesitation artifacts, occasional sentence shuffling, and length
//! normalization.
//!
//! All randomness flows through the caller's RNG so tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

use crate::humanize::lexicon::{
    COMMON_TYPO_MISTAKES, FILLER_WORDS, IDIOMATIC_PHRASES, SELF_CORRECTIONS,
};

const FILLER_PROBABILITY: f64 = 0.3;
const IDIOM_PROBABILITY: f64 = 0.15;
const SELF_CORRECTION_PROBABILITY: f64 = 0.2;
const TYPO_PROBABILITY: f64 = 0.2;
const HESITATION_PROBABILITY: f64 = 0.2;
const TRAIL_OFF_PROBABILITY: f64 = 0.1;
const SHUFFLE_PROBABILITY: f64 = 0.2;

static THE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bthe\b").expect("the pattern is valid"));

/// Splits text into sentences after `.`, `!`, or `?` followed by whitespace.
/// Terminal punctuation stays with its sentence; the whitespace is dropped.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            sentences.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

/// Normalizes `text` to exactly `target_word_count` whitespace-separated
/// words, truncating or padding with filler words as needed.
pub fn truncate_or_pad<R: Rng>(text: &str, target_word_count: usize, rng: &mut R) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();

    if words.len() > target_word_count {
        words.truncate(target_word_count);
        return words.join(" ");
    }

    while words.len() < target_word_count {
        let filler = FILLER_WORDS.choose(rng).unwrap_or(&"well");
        // Multi-word fillers ("you know") count word by word so the target
        // is hit exactly.
        for word in filler.split_whitespace() {
            if words.len() == target_word_count {
                break;
            }
            words.push(word);
        }
    }
    words.join(" ")
}

fn mutate_sentence<R: Rng>(sentence: String, rng: &mut R) -> String {
    let mut sentence = sentence;

    if rng.gen_bool(FILLER_PROBABILITY) {
        if let Some(filler) = FILLER_WORDS.choose(rng) {
            sentence = format!("{filler}, {sentence}");
        }
    }
    if rng.gen_bool(IDIOM_PROBABILITY) {
        if let Some(phrase) = IDIOMATIC_PHRASES.choose(rng) {
            sentence = format!("{phrase}, {sentence}");
        }
    }
    if rng.gen_bool(SELF_CORRECTION_PROBABILITY) {
        if let Some(correction) = SELF_CORRECTIONS.choose(rng) {
            sentence = format!("{sentence} {correction}");
        }
    }
    for (correct, typo) in COMMON_TYPO_MISTAKES {
        if sentence.contains(correct) && rng.gen_bool(TYPO_PROBABILITY) {
            sentence = sentence.replace(correct, typo);
        }
    }
    if rng.gen_bool(HESITATION_PROBABILITY) {
        // Extra space before the first "the" reads as a hesitation artifact.
        sentence = THE_PATTERN.replacen(&sentence, 1, " the").into_owned();
    }
    if rng.gen_bool(TRAIL_OFF_PROBABILITY) {
        sentence.push_str(" ... I mean, never mind.");
    }
    sentence
}

/// Applies per-sentence imperfections, occasionally shuffles sentence order,
/// and normalizes the result to `target_word_count` words.
pub fn humanize_text<R: Rng>(text: &str, target_word_count: usize, rng: &mut R) -> String {
    let mut sentences: Vec<String> = split_sentences(text)
        .into_iter()
        .map(|s| mutate_sentence(s, rng))
        .collect();

    if rng.gen_bool(SHUFFLE_PROBABILITY) {
        sentences.shuffle(rng);
    }

    let processed = sentences.join(" ");
    truncate_or_pad(processed.trim(), target_word_count, rng)
}
