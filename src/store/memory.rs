// In-memory document store.
//
// Insertion-ordered so candidate snapshots are deterministic — the matcher's
// stable sort keeps earlier-added documents first on tied scores.

use anyhow::Result;

use super::{Document, DocumentStore};

/// A simple Vec-backed store with sequential id assignment.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Vec<Document>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn add(&mut self, name: &str, content: &str) -> Result<String> {
        self.next_id += 1;
        let id = format!("doc-{}", self.next_id);
        self.documents.push(Document {
            id: id.clone(),
            name: name.to_string(),
            content: content.to_string(),
        });
        Ok(id)
    }

    fn get(&self, id: &str) -> Result<Option<Document>> {
        Ok(self.documents.iter().find(|doc| doc.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Document>> {
        Ok(self.documents.clone())
    }

    fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.documents.len();
        self.documents.retain(|doc| doc.id != id);
        Ok(self.documents.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = MemoryStore::new();
        let a = store.add("a.txt", "alpha").unwrap();
        let b = store.add("b.txt", "beta").unwrap();
        assert_eq!(a, "doc-1");
        assert_eq!(b, "doc-2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_by_id() {
        let mut store = MemoryStore::new();
        let id = store.add("notes.txt", "some notes").unwrap();
        let doc = store.get(&id).unwrap().unwrap();
        assert_eq!(doc.name, "notes.txt");
        assert_eq!(doc.content, "some notes");
        assert!(store.get("doc-999").unwrap().is_none());
    }

    #[test]
    fn test_remove() {
        let mut store = MemoryStore::new();
        let id = store.add("a.txt", "alpha").unwrap();
        assert!(store.remove(&id).unwrap());
        assert!(!store.remove(&id).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_candidates_snapshot_preserves_insertion_order() {
        let mut store = MemoryStore::new();
        store.add("a.txt", "alpha").unwrap();
        store.add("b.txt", "beta").unwrap();
        store.add("c.txt", "gamma").unwrap();

        let candidates = store.candidates().unwrap();
        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["doc-1", "doc-2", "doc-3"]);
        assert_eq!(candidates[1].content, "beta");
    }
}
