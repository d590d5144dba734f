use std::env;

use anyhow::Result;

use crate::matching::matcher::Algorithm;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; everything here has a
/// working default, so an empty environment is fine.
pub struct Config {
    /// Algorithm used when the CLI flag is omitted (DOCMATCH_ALGORITHM).
    /// Unset means frequency overlap; an unrecognized value is an error,
    /// not a silent fallback.
    pub default_algorithm: Algorithm,
    /// Report floor — results below this similarity are hidden from the
    /// terminal table (DOCMATCH_MIN_SIMILARITY, default 0.0).
    pub min_similarity: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let default_algorithm = match env::var("DOCMATCH_ALGORITHM") {
            Ok(value) => value.parse()?,
            Err(_) => Algorithm::default(),
        };

        let min_similarity = match env::var("DOCMATCH_MIN_SIMILARITY") {
            Ok(value) => value.parse::<f64>().map_err(|_| {
                anyhow::anyhow!("DOCMATCH_MIN_SIMILARITY must be a number, got '{value}'")
            })?,
            Err(_) => 0.0,
        };

        Ok(Self {
            default_algorithm,
            min_similarity,
        })
    }
}
