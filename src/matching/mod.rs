// Document matching — tokenization, similarity scorers, and the ranking
// orchestrator.

pub mod cosine;
pub mod frequency;
pub mod levenshtein;
pub mod matcher;
pub mod tokenize;
