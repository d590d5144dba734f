// Levenshtein edit distance and its normalized similarity score.
//
// Unlike the vocabulary scorers, this operates on the raw strings —
// character level, case-sensitive, no tokenization. Distance is the minimum
// number of single-character insertions, deletions, and substitutions (unit
// cost each) transforming one string into the other.
//
// The DP table is computed two rows at a time, so space is O(min dimension)
// instead of O(m*n). Time is still O(m*n) — a real cost for large documents,
// which is why the CLI favors the vocabulary scorers for big corpora.

/// Compute the character-level edit distance between two strings.
pub fn levenshtein_distance(source: &str, target: &str) -> usize {
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();
    let n = target_chars.len();

    // prev[j] = distance between source[..i] and target[..j] for the
    // previous value of i; row 0 is the all-insertions base case.
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr: Vec<usize> = vec![0; n + 1];

    for (i, &sc) in source_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &tc) in target_chars.iter().enumerate() {
            let cost = if sc == tc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalize edit distance to a similarity score in [0, 1].
///
/// `1 - distance / max_length`; two empty strings are identical, so they
/// score 1.0.
pub fn levenshtein_score(source: &str, target: &str) -> f64 {
    let max_length = source.chars().count().max(target.chars().count());
    if max_length == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(source, target) as f64 / max_length as f64
}
