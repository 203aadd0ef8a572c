//! Deterministic mock summarizer.
//!
//! A dependency-free stand-in for the live summarization backend, used in
//! local development and whenever no API key is configured. It derives a
//! one-line "summary" from the first sentence of the note and performs no
//! I/O, so the same input always yields the same output.

/// Label prefixed to every mock summary.
pub const SUMMARY_PREFIX: &str = "Resumen: ";

/// Fixed summary for notes with no usable text.
pub const EMPTY_NOTE_SUMMARY: &str = "(Nota vacía)";

/// Longest segment kept before the ellipsis marker kicks in.
const MAX_SEGMENT_CHARS: usize = 240;

/// Appended when a sentence had to be cut at [`MAX_SEGMENT_CHARS`].
const ELLIPSIS: char = '…';

/// Produce a one-line summary of `text` without calling any backend.
///
/// Whitespace runs are collapsed to single spaces first. Empty or
/// whitespace-only input yields [`EMPTY_NOTE_SUMMARY`]. Otherwise the first
/// sentence (terminated by `.`, `!` or `?` followed by whitespace) is kept,
/// falling back to the first 240 characters when no such boundary exists.
pub fn mock_summary(text: &str) -> String {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return EMPTY_NOTE_SUMMARY.to_string();
    }

    let segment = match first_sentence(&normalized) {
        Some(sentence) if sentence.chars().count() > MAX_SEGMENT_CHARS => {
            let mut cut: String = sentence.chars().take(MAX_SEGMENT_CHARS).collect();
            cut.push(ELLIPSIS);
            cut
        }
        Some(sentence) => sentence.to_string(),
        None => normalized.chars().take(MAX_SEGMENT_CHARS).collect(),
    };

    format!("{SUMMARY_PREFIX}{segment}")
}

/// Trim and collapse internal whitespace runs to single spaces.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First segment ending in sentence punctuation followed by whitespace.
///
/// The terminator stays part of the segment. Punctuation at the very end of
/// the text has no following whitespace and does not count as a boundary.
fn first_sentence(text: &str) -> Option<&str> {
    let mut chars = text.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?')
            && chars.peek().is_some_and(|(_, next)| next.is_whitespace())
        {
            return Some(&text[..index + c.len_utf8()]);
        }
    }
    None
}
