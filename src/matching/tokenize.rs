// Word tokenization and frequency counting.
//
// Every vocabulary-based scorer goes through this one primitive: lowercase
// the text, pull out maximal runs of word characters (letters, digits,
// underscore), and count occurrences. Punctuation and whitespace are
// delimiters and are discarded.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex_lite::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Count word occurrences in a text.
///
/// Returns an empty map for empty text or text with no word characters.
/// Pure function — no error conditions.
pub fn word_frequencies(text: &str) -> HashMap<String, u32> {
    let lower = text.to_lowercase();
    let mut frequencies = HashMap::new();

    for token in WORD.find_iter(&lower) {
        *frequencies.entry(token.as_str().to_string()).or_insert(0) += 1;
    }

    frequencies
}
