// Match orchestrator — applies one scorer across a candidate set and
// returns a ranked list.
//
// The orchestrator never mutates candidates and holds no state between
// calls: every invocation builds its own frequency maps and DP rows, so
// concurrent calls from multiple threads need no locking.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::cosine::cosine_score;
use super::frequency::frequency_score;
use super::levenshtein::levenshtein_score;

/// The similarity algorithm to apply to each candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Intersection-over-union of word counts — the default
    #[default]
    Frequency,
    /// Cosine of the term-frequency vectors
    Cosine,
    /// Normalized character-level edit distance
    Levenshtein,
}

impl Algorithm {
    /// Score a single source/target pair with this algorithm.
    pub fn score(self, source: &str, target: &str) -> f64 {
        match self {
            Algorithm::Frequency => frequency_score(source, target),
            Algorithm::Cosine => cosine_score(source, target),
            Algorithm::Levenshtein => levenshtein_score(source, target),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Frequency => "frequency",
            Algorithm::Cosine => "cosine",
            Algorithm::Levenshtein => "levenshtein",
        };
        f.write_str(name)
    }
}

/// An unrecognized algorithm name is rejected instead of silently falling
/// back to the default — "bad request" must stay distinguishable from
/// "no match". The default applies only when no algorithm is given at all.
impl FromStr for Algorithm {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frequency" => Ok(Algorithm::Frequency),
            "cosine" => Ok(Algorithm::Cosine),
            "levenshtein" => Ok(Algorithm::Levenshtein),
            other => Err(MatchError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Invalid-argument errors at the matching boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("unknown algorithm '{0}' (expected one of: frequency, cosine, levenshtein)")]
    UnknownAlgorithm(String),
}

/// A document being scored against the source text.
///
/// Inputs are owned snapshots — the matcher never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub content: String,
}

/// One scored candidate: the candidate's id and its similarity in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    pub similarity: f64,
}

/// Score every candidate against the source text and rank by similarity.
///
/// Returns one result per candidate, sorted descending by score; ties keep
/// the candidates' input order (stable sort). An empty source or an empty
/// candidate set yields an empty list.
pub fn match_documents(
    source: &str,
    candidates: &[Candidate],
    algorithm: Algorithm,
) -> Vec<MatchResult> {
    if source.is_empty() || candidates.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<MatchResult> = candidates
        .iter()
        .map(|candidate| MatchResult {
            id: candidate.id.clone(),
            similarity: algorithm.score(source, &candidate.content),
        })
        .collect();

    // Vec::sort_by is stable, so equal scores preserve input order
    results.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, content: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_ranks_descending() {
        let candidates = vec![
            candidate("weak", "entirely unrelated words here"),
            candidate("exact", "the quick brown fox"),
            candidate("close", "the quick brown dog"),
        ];
        let results = match_documents("the quick brown fox", &candidates, Algorithm::Frequency);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "exact");
        assert_eq!(results[1].id, "close");
        assert_eq!(results[2].id, "weak");
        assert!(results[0].similarity >= results[1].similarity);
        assert!(results[1].similarity >= results[2].similarity);
    }

    #[test]
    fn test_empty_source_returns_empty() {
        let candidates = vec![candidate("d1", "some content")];
        for algorithm in [Algorithm::Frequency, Algorithm::Cosine, Algorithm::Levenshtein] {
            assert!(match_documents("", &candidates, algorithm).is_empty());
        }
    }

    #[test]
    fn test_empty_candidates_returns_empty() {
        for algorithm in [Algorithm::Frequency, Algorithm::Cosine, Algorithm::Levenshtein] {
            assert!(match_documents("source text", &[], algorithm).is_empty());
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Both candidates share no vocabulary with the source -> both 0.0
        let candidates = vec![
            candidate("first", "alpha beta"),
            candidate("second", "gamma delta"),
        ];
        let results = match_documents("unrelated", &candidates, Algorithm::Frequency);
        assert_eq!(results[0].id, "first");
        assert_eq!(results[1].id, "second");
    }

    #[test]
    fn test_default_algorithm_is_frequency() {
        assert_eq!(Algorithm::default(), Algorithm::Frequency);
    }

    #[test]
    fn test_parse_known_algorithms() {
        assert_eq!("frequency".parse::<Algorithm>(), Ok(Algorithm::Frequency));
        assert_eq!("cosine".parse::<Algorithm>(), Ok(Algorithm::Cosine));
        assert_eq!("levenshtein".parse::<Algorithm>(), Ok(Algorithm::Levenshtein));
    }

    #[test]
    fn test_parse_unknown_algorithm_is_rejected() {
        let err = "jaccard".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, MatchError::UnknownAlgorithm("jaccard".to_string()));
        assert!(err.to_string().contains("jaccard"));
    }
}
