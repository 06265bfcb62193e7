//! Deterministic fallback algorithms.
//!
//! Pure functions of the input string; no locale sensitivity, no remote
//! calls. These run when no model credential is configured and whenever a
//! model call fails.

/// Upper bound on extracted keywords, shared by both extraction paths.
pub const MAX_KEYWORDS: usize = 8;

/// Words too common to carry pictogram meaning, French and English.
const STOP_WORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "de", "du", "et", "ou", "à", "au", "the", "a", "an",
    "and", "or", "to", "of", "in", "on", "for",
];

/// Punctuation stripped from token edges before length filtering.
const EDGE_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Split-and-rejoin simplification: `;` and `:` become sentence breaks,
/// fragments are trimmed and joined with `". "`, one trailing `.` appended.
pub fn simplify(text: &str) -> String {
    let normalized = text.replace([';', ':'], ".");
    let mut simplified = normalized
        .split('.')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(". ");
    simplified.push('.');
    simplified
}

/// Keyword extraction: lowercase, split on whitespace, strip edge
/// punctuation, keep tokens longer than four characters that are not stop
/// words, truncate to the first [`MAX_KEYWORDS`].
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split_whitespace()
        .map(|token| token.trim_matches(EDGE_PUNCTUATION))
        .filter(|token| token.chars().count() > 4)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .take(MAX_KEYWORDS)
        .collect()
}
