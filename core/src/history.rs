use std::collections::VecDeque;

use crate::config::DEFAULT_HISTORY_LIMIT;

/// Past queries, most recent first, bounded in size
#[derive(Debug, Clone)]
pub struct QueryHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl QueryHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Put a query at the front. A repeated query moves rather than duplicates.
    pub fn record(&mut self, query: &str) {
        if self.capacity == 0 {
            return;
        }

        if let Some(pos) = self.entries.iter().position(|q| q == query) {
            self.entries.remove(pos);
        }
        self.entries.push_front(query.to_string());
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Zero-based, where 0 is the most recent query
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first() {
        let mut history = QueryHistory::default();
        history.record("Who won 2004/05?");
        history.record("How many seasons did Norwich play?");

        let entries: Vec<&str> = history.entries().collect();
        assert_eq!(
            entries,
            vec!["How many seasons did Norwich play?", "Who won 2004/05?"]
        );
        assert_eq!(history.latest(), Some("How many seasons did Norwich play?"));
    }

    #[test]
    fn test_capped_at_ten_by_default() {
        let mut history = QueryHistory::default();
        for i in 0..15 {
            history.record(&format!("query {}", i));
        }

        assert_eq!(history.len(), 10);
        assert_eq!(history.get(0), Some("query 14"));
        assert_eq!(history.get(9), Some("query 5"));
        assert_eq!(history.get(10), None);
    }

    #[test]
    fn test_repeat_moves_to_front() {
        let mut history = QueryHistory::new(3);
        history.record("a");
        history.record("b");
        history.record("c");
        history.record("a");

        let entries: Vec<&str> = history.entries().collect();
        assert_eq!(entries, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = QueryHistory::new(0);
        history.record("anything");
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = QueryHistory::new(2);
        history.record("a");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }
}
