//! Core record types shared across the social structures.
//!
//! Everything here is a plain owned value: records are built once, validated
//! before construction by the caller, and never mutated after they enter a
//! structure (the one exception being the follow counters on [`User`], which
//! mirror the follow graph and move only through the application state).

use crate::clock::Timestamp;
use crate::social::constants::{DEFAULT_MAX_MESSAGES, DEFAULT_MAX_POSTS, DEFAULT_MAX_USERS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process-unique post identifier.
///
/// Assigned from a single counter owned by the application state, at publish
/// time for immediate posts and at scheduling time for deferred ones.
/// Monotonically increasing, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PostId(u64);

impl PostId {
    /// Wraps a raw id value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered account.
///
/// The password is stored and compared in plaintext, a deliberate toy-security
/// choice; nothing here is meant to guard real credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    username: String,
    password: String,
    /// Mirror of the follow graph's followers-list length for this user.
    pub followers: u32,
    /// Mirror of the follow graph's following-list length for this user.
    pub following: u32,
}

impl User {
    /// Creates a fresh account with zeroed counters. The caller is expected
    /// to have validated both fields.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            followers: 0,
            following: 0,
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Plaintext credential check.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// A published post. Immutable once stored; the log only appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique id, assigned at publish or scheduling time.
    pub id: PostId,
    /// Author username at publication time; the account is not guaranteed
    /// to still exist when the post is read.
    pub author: String,
    /// Post body.
    pub content: String,
    /// Publication time.
    pub created_at: Timestamp,
}

/// A post waiting in the schedule until its release time elapses.
///
/// Carries the id it was assigned at scheduling time; conversion into a
/// [`Post`] keeps that id and stamps the publication time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPost {
    /// Unique id, assigned when the post was scheduled.
    pub id: PostId,
    /// Author username at scheduling time.
    pub author: String,
    /// Post body.
    pub content: String,
    /// When the post was scheduled.
    pub created_at: Timestamp,
    /// Earliest time the post may be published.
    pub release_at: Timestamp,
}

/// An inter-user message. Fully immutable; consumed exactly once by dequeue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Sender username.
    pub from: String,
    /// Recipient username.
    pub to: String,
    /// Message body.
    pub content: String,
    /// When the message was enqueued.
    pub sent_at: Timestamp,
}

/// Runtime-adjustable capacity limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum registered users.
    pub max_users: usize,
    /// Hard cap on published posts.
    pub max_posts: usize,
    /// Message queue capacity.
    pub max_messages: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_users: DEFAULT_MAX_USERS,
            max_posts: DEFAULT_MAX_POSTS,
            max_messages: DEFAULT_MAX_MESSAGES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_ordering_and_display() {
        let a = PostId::new(1);
        let b = PostId::new(2);
        assert!(a < b);
        assert_eq!(a.to_string(), "1");
        assert_eq!(b.value(), 2);
    }

    #[test]
    fn test_password_check_is_exact() {
        let user = User::new("alice", "secret");
        assert!(user.password_matches("secret"));
        assert!(!user.password_matches("Secret"));
        assert!(!user.password_matches(""));
    }

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_users, DEFAULT_MAX_USERS);
        assert_eq!(limits.max_posts, DEFAULT_MAX_POSTS);
        assert_eq!(limits.max_messages, DEFAULT_MAX_MESSAGES);
    }
}
