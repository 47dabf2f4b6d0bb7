//! Append-only log of published posts, backed by a growable array.
//!
//! Storage starts at [`INITIAL_POST_CAPACITY`] slots and doubles whenever an
//! append finds the array full, clamped to the runtime hard cap. Growth goes
//! through `try_reserve_exact`, so an allocator refusal is reported as a
//! recoverable [`AllocationFailure`](crate::SmmError::AllocationFailure) for
//! that one append instead of aborting the process, and the log is left
//! exactly as it was. Appends are amortized O(1).
//!
//! Posts are never edited or removed once stored.

use crate::error::{Result, SmmError};
use crate::social::constants::INITIAL_POST_CAPACITY;
use crate::social::types::Post;

/// Append-only record of published posts.
pub struct PostLog {
    posts: Vec<Post>,
    cap: usize,
}

impl PostLog {
    /// Creates an empty log with the given hard cap on total posts.
    pub fn new(cap: usize) -> Self {
        Self {
            posts: Vec::with_capacity(INITIAL_POST_CAPACITY.min(cap)),
            cap,
        }
    }

    /// Appends a post.
    ///
    /// Fails with `CapacityExceeded` at the hard cap and with
    /// `AllocationFailure` if the doubling growth step cannot be satisfied;
    /// in both cases existing entries are untouched.
    pub fn append(&mut self, post: Post) -> Result<()> {
        if self.posts.len() >= self.cap {
            return Err(SmmError::capacity_exceeded(format!(
                "post log is at its cap of {} posts",
                self.cap
            )));
        }
        if self.posts.len() == self.posts.capacity() {
            let target = (self.posts.capacity() * 2)
                .max(INITIAL_POST_CAPACITY)
                .min(self.cap);
            let additional = target - self.posts.len();
            self.posts.try_reserve_exact(additional).map_err(|e| {
                SmmError::allocation(format!("post log growth to {target} slots failed: {e}"))
            })?;
        }
        self.posts.push(post);
        Ok(())
    }

    /// Posts from most-recently-appended to least.
    ///
    /// This is reverse *insertion* order, not an ordering by the timestamp
    /// field; the two coincide while the clock behaves.
    pub fn iter_desc(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().rev()
    }

    /// Posts in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }

    /// Number of published posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// True when nothing has been published.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Adjusts the hard cap. Lowering it below the current length only
    /// affects future appends; nothing stored is dropped.
    pub fn set_cap(&mut self, cap: usize) {
        self.cap = cap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::social::types::PostId;

    fn post(id: u64) -> Post {
        Post {
            id: PostId::new(id),
            author: "alice".to_string(),
            content: format!("post {id}"),
            created_at: id,
        }
    }

    #[test]
    fn test_list_descending_is_reverse_insertion_order() {
        let mut log = PostLog::new(30);
        for id in 1..=5 {
            log.append(post(id)).expect("append under cap");
        }
        let ids: Vec<u64> = log.iter_desc().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_growth_across_initial_capacity() {
        let mut log = PostLog::new(100);
        for id in 0..(INITIAL_POST_CAPACITY as u64 * 3) {
            log.append(post(id)).expect("append under cap");
        }
        assert_eq!(log.len(), INITIAL_POST_CAPACITY * 3);
        // Everything is still there, in order.
        let ids: Vec<u64> = log.iter().map(|p| p.id.value()).collect();
        let expected: Vec<u64> = (0..INITIAL_POST_CAPACITY as u64 * 3).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_append_past_cap_fails_and_preserves_entries() {
        let mut log = PostLog::new(3);
        for id in 1..=3 {
            log.append(post(id)).expect("append under cap");
        }
        let err = log.append(post(4)).expect_err("cap reached");
        assert!(matches!(err, SmmError::CapacityExceeded(_)));
        assert_eq!(log.len(), 3);
        let ids: Vec<u64> = log.iter_desc().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_cap_lowered_below_len_keeps_contents() {
        let mut log = PostLog::new(10);
        for id in 1..=5 {
            log.append(post(id)).expect("append under cap");
        }
        log.set_cap(2);
        assert_eq!(log.len(), 5);
        assert!(log.append(post(6)).is_err());
        // Raising it again re-enables appends.
        log.set_cap(10);
        assert!(log.append(post(6)).is_ok());
    }
}
