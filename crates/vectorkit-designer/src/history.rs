//! Snapshot-based undo/redo over the shape store.

use crate::model::DrawingObject;
use crate::shape_store::ShapeStore;

/// A deep copy of the whole shape list.
pub type Snapshot = Vec<DrawingObject>;

/// Undo/redo stacks of full shape-list snapshots.
///
/// The last element of `future` is the most recently undone state, so both
/// stacks push and pop at the end.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    past: Vec<Snapshot>,
    future: Vec<Snapshot>,
    max_depth: usize,
}

impl HistoryManager {
    /// Create a history keeping at most `max_depth` undo steps (0 = unbounded)
    pub fn new(max_depth: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            max_depth,
        }
    }

    /// Must be called before every user-initiated mutation of `store`.
    pub fn record_before_mutation(&mut self, store: &ShapeStore) {
        self.future.clear();
        self.push_past(store.snapshot());
    }

    /// Restores the most recent past snapshot. Returns false if there was none.
    pub fn undo(&mut self, store: &mut ShapeStore) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        self.future.push(store.snapshot());
        store.restore(previous);
        true
    }

    /// Re-applies the most recently undone snapshot. Returns false if there
    /// was none.
    pub fn redo(&mut self, store: &mut ShapeStore) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        self.push_past(store.snapshot());
        store.restore(next);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    pub fn redo_count(&self) -> usize {
        self.future.len()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    // Oldest snapshots go first once the depth limit is reached.
    fn push_past(&mut self, snapshot: Snapshot) {
        self.past.push(snapshot);
        if self.max_depth > 0 && self.past.len() > self.max_depth {
            let excess = self.past.len() - self.max_depth;
            self.past.drain(..excess);
        }
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Point, ShapeType, Style};

    fn add(store: &mut ShapeStore, history: &mut HistoryManager) -> u64 {
        history.record_before_mutation(store);
        store.add_shape(
            ShapeType::Rectangle,
            Point::new(0.0, 0.0),
            Style::new("#ffffff", "#000000"),
        )
    }

    #[test]
    fn test_undo_redo_on_empty_history_is_noop() {
        let mut store = ShapeStore::new();
        let mut history = HistoryManager::default();
        assert!(!history.undo(&mut store));
        assert!(!history.redo(&mut store));
        assert!(store.is_empty());
    }

    #[test]
    fn test_undo_then_redo() {
        let mut store = ShapeStore::new();
        let mut history = HistoryManager::default();
        add(&mut store, &mut history);
        add(&mut store, &mut history);
        let after = store.snapshot();

        assert!(history.undo(&mut store));
        assert_eq!(store.len(), 1);
        assert!(history.can_redo());

        assert!(history.redo(&mut store));
        assert_eq!(store.snapshot(), after);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_new_mutation_clears_future() {
        let mut store = ShapeStore::new();
        let mut history = HistoryManager::default();
        add(&mut store, &mut history);
        add(&mut store, &mut history);
        history.undo(&mut store);
        assert_eq!(history.redo_count(), 1);

        add(&mut store, &mut history);
        assert_eq!(history.redo_count(), 0);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_redo_order_after_multiple_undos() {
        let mut store = ShapeStore::new();
        let mut history = HistoryManager::default();
        add(&mut store, &mut history);
        let one = store.snapshot();
        add(&mut store, &mut history);
        let two = store.snapshot();

        history.undo(&mut store);
        history.undo(&mut store);
        assert!(store.is_empty());

        history.redo(&mut store);
        assert_eq!(store.snapshot(), one);
        history.redo(&mut store);
        assert_eq!(store.snapshot(), two);
    }

    #[test]
    fn test_bounded_depth_drops_oldest() {
        let mut store = ShapeStore::new();
        let mut history = HistoryManager::new(2);
        for _ in 0..5 {
            add(&mut store, &mut history);
        }
        assert_eq!(history.undo_count(), 2);

        history.undo(&mut store);
        history.undo(&mut store);
        assert_eq!(store.len(), 3);
        assert!(!history.undo(&mut store));
    }

    #[test]
    fn test_unbounded_depth() {
        let mut store = ShapeStore::new();
        let mut history = HistoryManager::new(0);
        for _ in 0..150 {
            add(&mut store, &mut history);
        }
        assert_eq!(history.undo_count(), 150);
    }

    #[test]
    fn test_depth_limit_holds_across_redo() {
        let mut store = ShapeStore::new();
        let mut history = HistoryManager::new(2);
        for _ in 0..4 {
            add(&mut store, &mut history);
        }
        assert_eq!(history.undo_count(), 2);

        while history.undo(&mut store) {}
        while history.redo(&mut store) {
            assert!(history.undo_count() <= 2);
        }
        assert_eq!(history.undo_count(), 2);
        assert_eq!(store.len(), 4);
    }
}
