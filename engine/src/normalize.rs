use std::collections::HashSet;

/// Trailing punctuation stripped from candidate words before the keyword test.
const PUNCTUATION: &[char] = &['.', ',', '?', ':', ';', '!'];

/// Turns raw tokens into index keywords, or rejects them.
///
/// A keyword is a word that, after being stripped of all trailing punctuation,
/// consists only of alphabetic letters and is not a noise word. Matching is
/// case-insensitive; accepted keywords come back lower-cased.
pub struct Normalizer {
    noise_words: HashSet<String>,
}

impl Normalizer {
    /// Builds a normalizer from a noise-word list. The set is fixed for the
    /// lifetime of the normalizer; words are folded to lower case so lookups
    /// are case-insensitive.
    pub fn new<I, S>(noise_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let noise_words = noise_words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { noise_words }
    }

    /// Normalizes `raw` into a keyword, or returns `None` if it fails the
    /// keyword test. Rejection is not an error; callers simply skip the token.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let stripped = raw.trim().trim_end_matches(PUNCTUATION);
        if stripped.is_empty() {
            return None;
        }
        let keyword = stripped.to_lowercase();
        if !keyword.chars().all(char::is_alphabetic) {
            return None;
        }
        if self.noise_words.contains(&keyword) {
            return None;
        }
        Some(keyword)
    }

    /// Number of noise words loaded.
    pub fn noise_word_count(&self) -> usize {
        self.noise_words.len()
    }
}
