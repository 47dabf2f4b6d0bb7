//! First-in-first-out message queue: a fixed-capacity circular buffer.
//!
//! A preallocated ring of `capacity` slots with head/tail indices advancing
//! modulo the capacity and an explicit count. Enqueue refuses when the count
//! reaches capacity; dequeue yields the oldest not-yet-consumed message or
//! nothing when the count is zero. Both are O(1) with no allocation after
//! construction.

use crate::error::{Result, SmmError};
use crate::social::types::Message;

/// Pending inter-user messages, oldest first.
pub struct MessageQueue {
    slots: Vec<Option<Message>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl MessageQueue {
    /// Creates a queue with room for `capacity` messages. A zero capacity is
    /// clamped to one slot.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Enqueues a message at the back. Returns `false` when the buffer is
    /// full; the message is not stored in that case.
    pub fn enqueue(&mut self, message: Message) -> bool {
        if self.len == self.slots.len() {
            return false;
        }
        self.slots[self.tail] = Some(message);
        self.tail = (self.tail + 1) % self.slots.len();
        self.len += 1;
        true
    }

    /// Removes and returns the oldest enqueued message, or `None` when the
    /// queue is empty.
    pub fn dequeue(&mut self) -> Option<Message> {
        if self.len == 0 {
            return None;
        }
        let message = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        message
    }

    /// Non-consuming front-to-back traversal for display.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % self.slots.len()].as_ref())
    }

    /// Number of queued messages.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when a further enqueue would be refused.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Total slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Rebuilds the ring with a new capacity, preserving FIFO order.
    ///
    /// Fails with `CapacityExceeded` if more messages are queued than the
    /// new capacity holds; the queue is untouched on failure.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.len {
            return Err(SmmError::capacity_exceeded(format!(
                "cannot shrink the message queue to {capacity} slots while {} messages are queued",
                self.len
            )));
        }
        let capacity = capacity.max(1);
        let old_capacity = self.slots.len();
        let mut slots = vec![None; capacity];
        for (i, slot) in slots.iter_mut().take(self.len).enumerate() {
            *slot = self.slots[(self.head + i) % old_capacity].take();
        }
        self.slots = slots;
        self.head = 0;
        self.tail = self.len % capacity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(content: &str) -> Message {
        Message {
            from: "alice".to_string(),
            to: "bob".to_string(),
            content: content.to_string(),
            sent_at: 0,
        }
    }

    fn contents(queue: &MessageQueue) -> Vec<&str> {
        queue.iter().map(|m| m.content.as_str()).collect()
    }

    #[test]
    fn test_full_then_drain_then_refill() {
        let mut queue = MessageQueue::with_capacity(2);
        assert!(queue.enqueue(message("a")));
        assert!(queue.enqueue(message("b")));
        assert!(!queue.enqueue(message("c")), "third enqueue must report full");

        let first = queue.dequeue().expect("queue holds a");
        assert_eq!(first.content, "a");

        assert!(queue.enqueue(message("c")), "a slot is free again");
        assert_eq!(queue.dequeue().expect("b next").content, "b");
        assert_eq!(queue.dequeue().expect("c last").content, "c");
        assert!(queue.dequeue().is_none());
    }

    #[test]
    fn test_indices_wrap_around() {
        let mut queue = MessageQueue::with_capacity(3);
        for round in 0..10 {
            let text = format!("round {round}");
            assert!(queue.enqueue(message(&text)));
            assert_eq!(queue.dequeue().expect("just enqueued").content, text);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut queue = MessageQueue::with_capacity(4);
        for c in ["a", "b", "c"] {
            queue.enqueue(message(c));
        }
        assert_eq!(contents(&queue), vec!["a", "b", "c"]);
        assert_eq!(contents(&queue), vec!["a", "b", "c"]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_peek_order_across_wrap() {
        let mut queue = MessageQueue::with_capacity(3);
        queue.enqueue(message("a"));
        queue.enqueue(message("b"));
        queue.dequeue();
        queue.enqueue(message("c"));
        queue.enqueue(message("d")); // tail has wrapped past slot 0
        assert_eq!(contents(&queue), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_set_capacity_preserves_order() {
        let mut queue = MessageQueue::with_capacity(3);
        queue.enqueue(message("a"));
        queue.enqueue(message("b"));
        queue.dequeue();
        queue.enqueue(message("c"));
        queue.enqueue(message("d"));

        queue.set_capacity(8).expect("growing always fits");
        assert_eq!(contents(&queue), vec!["b", "c", "d"]);
        assert_eq!(queue.capacity(), 8);
        assert!(queue.enqueue(message("e")));
        assert_eq!(queue.dequeue().expect("b first").content, "b");
    }

    #[test]
    fn test_set_capacity_below_len_fails_untouched() {
        let mut queue = MessageQueue::with_capacity(4);
        for c in ["a", "b", "c"] {
            queue.enqueue(message(c));
        }
        let err = queue.set_capacity(2).expect_err("three queued");
        assert!(matches!(err, SmmError::CapacityExceeded(_)));
        assert_eq!(queue.capacity(), 4);
        assert_eq!(contents(&queue), vec!["a", "b", "c"]);
    }
}
