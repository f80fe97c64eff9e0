//! Flash Messages
//!
//! Ordered stack of transient banners. Newest first, no de-duplication.

use crate::models::Severity;

#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlashQueue {
    entries: Vec<Flash>,
    next_id: u64,
}

impl FlashQueue {
    /// Add a message on top of the stack and return its id
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            0,
            Flash {
                id,
                message: message.into(),
                severity,
            },
        );
        id
    }

    /// Remove a message; false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|flash| flash.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Flash] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut queue = FlashQueue::default();
        queue.push("first", Severity::Success);
        queue.push("second", Severity::Error);
        let messages: Vec<_> = queue.entries().iter().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn test_duplicates_stack() {
        let mut queue = FlashQueue::default();
        let a = queue.push("Product added to cart!", Severity::Success);
        let b = queue.push("Product added to cart!", Severity::Success);
        assert_ne!(a, b);
        assert_eq!(queue.entries().len(), 2);
    }

    #[test]
    fn test_dismiss_only_target() {
        let mut queue = FlashQueue::default();
        let a = queue.push("a", Severity::Info);
        let b = queue.push("b", Severity::Info);
        assert!(queue.dismiss(a));
        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].id, b);
        // Close button and timer may both fire
        assert!(!queue.dismiss(a));
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = FlashQueue::default();
        let a = queue.push("a", Severity::Info);
        queue.dismiss(a);
        let b = queue.push("b", Severity::Info);
        assert_ne!(a, b);
        assert_eq!(queue.entries().len(), 1);
    }
}
