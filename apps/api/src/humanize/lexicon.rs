//! Word tables for the post-processor: fillers, interjections, and typo pairs.

/// Conversational fillers, used as sentence prefixes and as padding material.
pub const FILLER_WORDS: &[&str] = &["well", "you know", "like", "I mean", "basically", "honestly"];

/// Mid-thought self-corrections appended after a sentence.
pub const SELF_CORRECTIONS: &[&str] = &[
    "Actually, scratch that...",
    "Wait, let me rephrase that.",
    "Hmm, maybe I should put it this way...",
    "No, that doesn't make sense. Let me try again.",
];

/// (correct spelling, common misspelling) pairs.
pub const COMMON_TYPO_MISTAKES: &[(&str, &str)] = &[
    ("definitely", "definately"),
    ("receive", "recieve"),
    ("occurred", "occured"),
    ("separate", "seperate"),
    ("necessary", "neccessary"),
];

/// Idiomatic phrases occasionally prefixed to a sentence.
pub const IDIOMATIC_PHRASES: &[&str] = &[
    "at the end of the day",
    "to be honest",
    "I guess you could say",
    "if you ask me",
    "you know what I mean?",
    "let's face it",
];
