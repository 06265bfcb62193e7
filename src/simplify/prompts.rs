//! Fixed prompt templates for the model path.
//!
//! Kept as named constants with a `{text}` placeholder so the model-call
//! boundary stays narrow and the texts are testable without a provider.

/// FALC simplification instruction.
pub const FALC_SIMPLIFY: &str = "\
You are an expert in simplifying text following FALC (Facile À Lire et à Comprendre) guidelines.

FALC rules:
- Use short, simple sentences
- Use common, everyday words
- Avoid jargon and complex terms
- Use active voice
- One idea per sentence
- Use concrete examples

Original text: {text}

Please simplify this text following FALC guidelines:";

/// Keyword extraction instruction; the reply is comma-separated keywords.
pub const KEYWORD_EXTRACT: &str = "\
Extract 5-8 key nouns and verbs from this text that could be represented with pictograms.
Return only the keywords separated by commas.

Text: {text}

Keywords:";

/// Substitute `{text}` into a template.
pub fn render(template: &str, text: &str) -> String {
    template.replace("{text}", text)
}
