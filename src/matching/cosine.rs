// Cosine similarity over term-frequency vectors.
//
// Each document's word-frequency map is treated as a sparse vector over the
// vocabulary space. The score is the cosine of the angle between the two
// vectors: dot product divided by the product of the Euclidean norms.
// Non-negative counts keep the result in [0, 1].

use std::collections::HashMap;

use super::tokenize::word_frequencies;

/// Compute the cosine similarity between two texts' term-frequency vectors.
///
/// Returns 0.0 when either text has no word tokens (zero magnitude), and
/// substitutes 0.0 for any non-finite result of the division.
pub fn cosine_score(source: &str, target: &str) -> f64 {
    let source_freq = word_frequencies(source);
    let target_freq = word_frequencies(target);

    // Terms absent from one side contribute 0, so the dot product only needs
    // the words present in the source map.
    let dot_product: f64 = source_freq
        .iter()
        .filter_map(|(word, &a)| target_freq.get(word).map(|&b| f64::from(a) * f64::from(b)))
        .sum();

    let magnitude_product = (norm_squared(&source_freq) * norm_squared(&target_freq)).sqrt();

    if magnitude_product == 0.0 {
        return 0.0;
    }

    let score = dot_product / magnitude_product;
    if score.is_finite() {
        score
    } else {
        0.0
    }
}

/// Sum of squared counts — the squared Euclidean norm of the vector.
fn norm_squared(frequencies: &HashMap<String, u32>) -> f64 {
    frequencies
        .values()
        .map(|&count| f64::from(count) * f64::from(count))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_one() {
        let score = cosine_score("machine learning is powerful", "machine learning is powerful");
        assert!(
            (score - 1.0).abs() < 1e-9,
            "Identical texts should score ~1.0, got {score}"
        );
    }

    #[test]
    fn test_orthogonal_texts_score_zero() {
        assert_eq!(cosine_score("cat dog bird", "fish snake lizard"), 0.0);
    }

    #[test]
    fn test_one_side_empty_scores_zero() {
        assert_eq!(cosine_score("", "some words here"), 0.0);
        assert_eq!(cosine_score("some words here", ""), 0.0);
        assert_eq!(cosine_score("", ""), 0.0);
    }

    #[test]
    fn test_subset_scores_between_zero_and_one() {
        let score = cosine_score("a b c", "a b");
        assert!(score > 0.0 && score < 1.0, "Expected (0,1), got {score}");
        // dot = 2, |a| = sqrt(3), |b| = sqrt(2) -> 2/sqrt(6)
        let expected = 2.0 / 6.0_f64.sqrt();
        assert!((score - expected).abs() < 1e-9, "Expected {expected}, got {score}");
    }

    #[test]
    fn test_is_symmetric() {
        let ab = cosine_score("the cat sat on the mat", "a cat sat");
        let ba = cosine_score("a cat sat", "the cat sat on the mat");
        assert!((ab - ba).abs() < 1e-12, "Should be symmetric: {ab} vs {ba}");
    }

    #[test]
    fn test_repetition_does_not_change_direction() {
        // Doubling every count scales the vector but not the angle
        let score = cosine_score("a b", "a a b b");
        assert!((score - 1.0).abs() < 1e-9, "Same direction should be ~1.0, got {score}");
    }
}
