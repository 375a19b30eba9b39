//! In-memory gallery of recent graphics, newest first.
//!
//! Lives only as long as the process. Once full, the oldest entry is evicted.

use std::{collections::VecDeque, sync::Arc};

use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::{GeneratedGraphic, HistoryEntry, HistoryPage};

#[derive(Clone)]
pub struct History {
    entries: Arc<RwLock<VecDeque<HistoryEntry>>>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Record a graphic under a fresh id and return the stored entry.
    pub fn push(&self, graphic: GeneratedGraphic) -> HistoryEntry {
        let entry = HistoryEntry { id: Uuid::new_v4(), graphic };
        let mut guard = self.entries.write();
        guard.push_front(entry.clone());
        guard.truncate(self.capacity);
        entry
    }

    pub fn get(&self, id: &Uuid) -> Option<HistoryEntry> {
        self.entries.read().iter().find(|e| &e.id == id).cloned()
    }

    /// `limit` entries starting `offset` from the newest. An offset past the
    /// end yields an empty page.
    pub fn page(&self, offset: usize, limit: usize) -> HistoryPage {
        let guard = self.entries.read();
        let items = guard.iter().skip(offset).take(limit).cloned().collect();
        HistoryPage { items, total: guard.len(), offset, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    fn graphic(prompt: &str) -> GeneratedGraphic {
        generate(prompt, "#6ef5c3")
    }

    #[test]
    fn newest_first() {
        let history = History::new(20);
        history.push(graphic("first"));
        history.push(graphic("second"));
        let page = history.page(0, 4);
        let prompts: Vec<&str> = page.items.iter().map(|e| e.graphic.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["second", "first"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let history = History::new(3);
        let first = history.push(graphic("p0"));
        for i in 1..5 {
            history.push(graphic(&format!("p{i}")));
        }
        assert_eq!(history.len(), 3);
        assert!(history.get(&first.id).is_none());
        assert_eq!(history.page(0, 10).items[0].graphic.prompt, "p4");
    }

    #[test]
    fn pages_through_entries() {
        let history = History::new(20);
        for i in 0..6 {
            history.push(graphic(&format!("p{i}")));
        }
        let second = history.page(4, 4);
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.items[0].graphic.prompt, "p1");
        assert!(history.page(10, 4).items.is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let history = History::new(5);
        let entry = history.push(graphic("network"));
        let found = history.get(&entry.id).unwrap();
        assert_eq!(found.graphic.title, "Network schematic");
        assert!(history.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn zero_capacity_still_keeps_latest() {
        let history = History::new(0);
        history.push(graphic("a"));
        history.push(graphic("b"));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.page(0, 4).items[0].graphic.prompt, "b");
    }
}
