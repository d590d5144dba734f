// Document store — the repository seam between the matcher and whatever
// holds the corpus.
//
// The matcher itself only ever sees owned `Candidate` snapshots; callers
// that keep documents somewhere (memory, a database, an upload service)
// implement this trait and hand snapshots over per matching call.

pub mod memory;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::matching::matcher::Candidate;

/// A stored document: an id assigned by the store, a display name, and the
/// raw text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub content: String,
}

/// Backend-agnostic CRUD interface for the document corpus.
pub trait DocumentStore {
    /// Add a document and return the id the store assigned to it.
    fn add(&mut self, name: &str, content: &str) -> Result<String>;

    /// Look up a document by id.
    fn get(&self, id: &str) -> Result<Option<Document>>;

    /// All documents in insertion order.
    fn list(&self) -> Result<Vec<Document>>;

    /// Remove a document by id. Returns true if something was removed.
    fn remove(&mut self, id: &str) -> Result<bool>;

    /// Snapshot the corpus as matcher candidates, in insertion order.
    ///
    /// The snapshot is passed to the matcher by value, so matching never
    /// holds a borrow of the store.
    fn candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self
            .list()?
            .into_iter()
            .map(|doc| Candidate {
                id: doc.id,
                content: doc.content,
            })
            .collect())
    }
}
