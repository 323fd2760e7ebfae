//! Content metrics recomputed from the final rewritten text.
//!
//! These never trust numbers reported by the model.

/// Word count above which the length bonus rises.
pub const LONG_CONTENT_WORDS: usize = 300;

/// Whitespace-separated token count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-insensitive, non-overlapping literal occurrences of `keyword`.
pub fn keyword_occurrences(text: &str, keyword: &str) -> usize {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return 0;
    }
    text.to_lowercase().matches(keyword.as_str()).count()
}

/// Keyword density as a percentage with one decimal, e.g. `"2.5%"`.
///
/// Returns `"0%"` when there are no words.
pub fn keyword_density(occurrences: usize, words: usize) -> String {
    if words == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", occurrences as f64 / words as f64 * 100.0)
}

/// Heuristic SEO score clamped to 1..=100.
pub fn seo_score(occurrences: usize, words: usize) -> u32 {
    let length_bonus = if words > LONG_CONTENT_WORDS { 20 } else { 10 };
    let raw = occurrences.saturating_mul(10).saturating_add(length_bonus);
    raw.clamp(1, 100) as u32
}

/// The three recomputed metrics together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentMetrics {
    pub word_count: usize,
    pub keyword_density: String,
    pub seo_score: u32,
}

impl ContentMetrics {
    pub fn measure(text: &str, keyword: &str) -> Self {
        let words = word_count(text);
        let occurrences = keyword_occurrences(text, keyword);
        Self {
            word_count: words,
            keyword_density: keyword_density(occurrences, words),
            seo_score: seo_score(occurrences, words),
        }
    }
}
