// docmatch: document similarity scoring and ranking.
//
// This is the library root. The matching module holds the scorers and the
// ranking orchestrator; store is the repository seam for the corpus; output
// handles terminal rendering.

pub mod config;
pub mod matching;
pub mod output;
pub mod store;
