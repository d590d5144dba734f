// Frequency-overlap similarity.
//
// An intersection-over-union over word counts. For every word in either
// document we take the minimum count from both sides (the shared portion)
// and the maximum count (the total footprint):
//
//   score = sum(min(count_a, count_b)) / sum(max(count_a, count_b))
//
// This gives 0.0 for disjoint vocabularies and 1.0 for identical frequency
// profiles. It tolerates length differences while staying sensitive to
// shared vocabulary.

use std::collections::HashSet;

use super::tokenize::word_frequencies;

/// Compute the frequency-overlap similarity between two texts.
///
/// Returns a score from 0.0 (no shared words) to 1.0 (identical word
/// frequency profiles). Two texts with no word tokens score 0.0.
pub fn frequency_score(source: &str, target: &str) -> f64 {
    let source_freq = word_frequencies(source);
    let target_freq = word_frequencies(target);

    // Union of all words from both sides
    let all_words: HashSet<&String> = source_freq.keys().chain(target_freq.keys()).collect();

    let mut matches: u64 = 0;
    let mut total: u64 = 0;

    for word in all_words {
        let a = source_freq.get(word).copied().unwrap_or(0);
        let b = target_freq.get(word).copied().unwrap_or(0);
        if a > 0 && b > 0 {
            matches += u64::from(a.min(b));
        }
        total += u64::from(a.max(b));
    }

    if total == 0 {
        0.0
    } else {
        matches as f64 / total as f64
    }
}
