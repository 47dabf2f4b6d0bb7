//! Bidirectional follow graph: per-user adjacency lists.
//!
//! Each graph user owns two singly-linked adjacency lists, `following` and
//! `followers`. The mirror invariant is the heart of this module: edge
//! (A → B) exists in A's following list iff the matching entry exists in
//! B's followers list, and every operation adds or removes both halves
//! together.
//!
//! Edges prepend to the list head, so traversal order is most-recent-first,
//! not alphabetical. Links are owned `Box`es; removal relinks through an
//! `&mut` cursor and no raw pointers exist to dangle.
//!
//! The graph knows nothing about the user index's follow counters; keeping
//! those mirrored is the application state's job.

use crate::error::{Result, SmmError};

struct AdjNode {
    username: String,
    next: Option<Box<AdjNode>>,
}

/// An owned singly-linked list of usernames.
#[derive(Default)]
struct AdjList {
    head: Option<Box<AdjNode>>,
    len: usize,
}

impl AdjList {
    /// Pushes a username onto the head. O(1).
    fn prepend(&mut self, username: &str) {
        let next = self.head.take();
        self.head = Some(Box::new(AdjNode {
            username: username.to_string(),
            next,
        }));
        self.len += 1;
    }

    /// Linear membership scan.
    fn contains(&self, username: &str) -> bool {
        self.iter().any(|u| u == username)
    }

    /// Unlinks the first node carrying `username`. Returns whether a node
    /// was found and removed.
    fn remove(&mut self, username: &str) -> bool {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return false,
                Some(node) if node.username == username => {
                    let next = node.next.take();
                    *cursor = next;
                    self.len -= 1;
                    return true;
                }
                Some(node) => cursor = &mut node.next,
            }
        }
    }

    fn iter(&self) -> AdjIter<'_> {
        AdjIter {
            next: self.head.as_deref(),
        }
    }
}

impl Drop for AdjList {
    // Unlink nodes one at a time; a long chain must not overflow the stack
    // through recursive Box drops.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

/// Iterator over the usernames in one adjacency list, most recent first.
pub struct AdjIter<'a> {
    next: Option<&'a AdjNode>,
}

impl<'a> Iterator for AdjIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.username)
    }
}

/// A user's entry in the follow graph.
pub struct GraphUser {
    username: String,
    following: AdjList,
    followers: AdjList,
}

impl GraphUser {
    fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            following: AdjList::default(),
            followers: AdjList::default(),
        }
    }

    /// Returns this user's name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Users this user follows, most recently followed first.
    pub fn following(&self) -> AdjIter<'_> {
        self.following.iter()
    }

    /// Users following this user, most recent first.
    pub fn followers(&self) -> AdjIter<'_> {
        self.followers.iter()
    }

    /// Length of the following list.
    pub fn following_count(&self) -> usize {
        self.following.len
    }

    /// Length of the followers list.
    pub fn followers_count(&self) -> usize {
        self.followers.len
    }
}

/// Per-user following/follower adjacency lists.
pub struct FollowGraph {
    users: Vec<GraphUser>,
    max_users: usize,
}

impl FollowGraph {
    /// Creates an empty graph admitting at most `max_users` users.
    pub fn new(max_users: usize) -> Self {
        Self {
            users: Vec::new(),
            max_users,
        }
    }

    fn position(&self, username: &str) -> Option<usize> {
        self.users.iter().position(|u| u.username == username)
    }

    /// Adds a user to the graph.
    ///
    /// Idempotent: adding a present user is a no-op success. Fails only when
    /// the configured maximum user count is reached.
    pub fn add_user(&mut self, username: &str) -> Result<()> {
        if self.position(username).is_some() {
            return Ok(());
        }
        if self.users.len() >= self.max_users {
            return Err(SmmError::capacity_exceeded(format!(
                "follow graph is at its limit of {} users",
                self.max_users
            )));
        }
        self.users.push(GraphUser::new(username));
        Ok(())
    }

    /// Adds the mirrored edge `from → to`.
    ///
    /// Fails on self-follow and on absent endpoints. Returns whether the
    /// forward entry was newly created: `Ok(false)` means the edge already
    /// existed and was silently absorbed, so the caller knows not to move
    /// any counters.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<bool> {
        if from == to {
            return Err(SmmError::invalid_input("users cannot follow themselves"));
        }
        let from_idx = self
            .position(from)
            .ok_or_else(|| SmmError::not_found(format!("user '{from}' is not in the graph")))?;
        let to_idx = self
            .position(to)
            .ok_or_else(|| SmmError::not_found(format!("user '{to}' is not in the graph")))?;

        let created = !self.users[from_idx].following.contains(to);
        if created {
            self.users[from_idx].following.prepend(to);
        }
        if !self.users[to_idx].followers.contains(from) {
            self.users[to_idx].followers.prepend(from);
        }
        Ok(created)
    }

    /// Removes the mirrored edge `from → to`.
    ///
    /// Succeeds only when both halves were present (strict AND). When
    /// neither half exists the edge is simply not found. When exactly one
    /// half exists the graph was already out of mirror: the stale half is
    /// removed (left applied, not rolled back) and the distinct
    /// `Inconsistent` error reports the repair.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        let from_idx = self
            .position(from)
            .ok_or_else(|| SmmError::not_found(format!("user '{from}' is not in the graph")))?;
        let to_idx = self
            .position(to)
            .ok_or_else(|| SmmError::not_found(format!("user '{to}' is not in the graph")))?;

        let removed_forward = self.users[from_idx].following.remove(to);
        let removed_mirror = self.users[to_idx].followers.remove(from);
        match (removed_forward, removed_mirror) {
            (true, true) => Ok(()),
            (false, false) => Err(SmmError::not_found(format!(
                "'{from}' does not follow '{to}'"
            ))),
            _ => Err(SmmError::inconsistent(format!(
                "edge '{from}' -> '{to}' was present on one side only; the stale half was removed"
            ))),
        }
    }

    /// Looks up a user's graph entry.
    pub fn find_user(&self, username: &str) -> Option<&GraphUser> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Number of users in the graph.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Adjusts the maximum user count. Lowering it below the current count
    /// only affects future additions.
    pub fn set_max_users(&mut self, max_users: usize) {
        self.max_users = max_users;
    }

    /// Plants one half of an edge without its mirror, to exercise the
    /// inconsistency-detection path.
    #[cfg(test)]
    fn plant_half_edge(&mut self, from: &str, to: &str) {
        if let Some(idx) = self.position(from) {
            self.users[idx].following.prepend(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(users: &[&str]) -> FollowGraph {
        let mut graph = FollowGraph::new(10);
        for user in users {
            graph.add_user(user).expect("under user limit");
        }
        graph
    }

    fn following_of(graph: &FollowGraph, user: &str) -> Vec<String> {
        graph
            .find_user(user)
            .expect("user in graph")
            .following()
            .map(str::to_string)
            .collect()
    }

    fn followers_of(graph: &FollowGraph, user: &str) -> Vec<String> {
        graph
            .find_user(user)
            .expect("user in graph")
            .followers()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_edge_add_and_remove_round_trip() {
        let mut graph = graph_with(&["alice", "bob"]);

        assert!(graph.add_edge("alice", "bob").expect("edge is legal"));
        assert_eq!(following_of(&graph, "alice"), vec!["bob"]);
        assert_eq!(followers_of(&graph, "bob"), vec!["alice"]);

        graph.remove_edge("alice", "bob").expect("edge exists");
        assert!(following_of(&graph, "alice").is_empty());
        assert!(followers_of(&graph, "bob").is_empty());

        // A second removal finds nothing.
        let err = graph.remove_edge("alice", "bob").expect_err("gone");
        assert!(matches!(err, SmmError::NotFound(_)));
    }

    #[test]
    fn test_self_follow_rejected() {
        let mut graph = graph_with(&["alice"]);
        let err = graph.add_edge("alice", "alice").expect_err("self-follow");
        assert!(matches!(err, SmmError::InvalidInput(_)));
        assert!(following_of(&graph, "alice").is_empty());
    }

    #[test]
    fn test_absent_endpoint_rejected() {
        let mut graph = graph_with(&["alice"]);
        assert!(matches!(
            graph.add_edge("alice", "ghost"),
            Err(SmmError::NotFound(_))
        ));
        assert!(matches!(
            graph.add_edge("ghost", "alice"),
            Err(SmmError::NotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_edge_silently_absorbed() {
        let mut graph = graph_with(&["alice", "bob"]);
        assert!(graph.add_edge("alice", "bob").expect("first add"));
        assert!(!graph.add_edge("alice", "bob").expect("absorbed"));
        assert_eq!(following_of(&graph, "alice"), vec!["bob"]);
        assert_eq!(followers_of(&graph, "bob"), vec!["alice"]);
    }

    #[test]
    fn test_adjacency_order_is_most_recent_first() {
        let mut graph = graph_with(&["alice", "bob", "carol", "dave"]);
        for target in ["bob", "carol", "dave"] {
            graph.add_edge("alice", target).expect("edge is legal");
        }
        assert_eq!(following_of(&graph, "alice"), vec!["dave", "carol", "bob"]);
    }

    #[test]
    fn test_add_user_idempotent_and_capped() {
        let mut graph = FollowGraph::new(2);
        graph.add_user("alice").expect("first");
        graph.add_user("alice").expect("idempotent no-op");
        assert_eq!(graph.user_count(), 1);

        graph.add_user("bob").expect("second");
        let err = graph.add_user("carol").expect_err("limit of 2");
        assert!(matches!(err, SmmError::CapacityExceeded(_)));
        assert_eq!(graph.user_count(), 2);

        // A present user still succeeds at the cap.
        graph.add_user("bob").expect("idempotent at cap");
    }

    #[test]
    fn test_one_sided_edge_reported_and_repaired() {
        let mut graph = graph_with(&["alice", "bob"]);
        graph.plant_half_edge("alice", "bob");
        assert_eq!(following_of(&graph, "alice"), vec!["bob"]);

        let err = graph.remove_edge("alice", "bob").expect_err("one-sided");
        assert!(matches!(err, SmmError::Inconsistent(_)));
        // The stale half is gone; a retry reports not-found.
        assert!(following_of(&graph, "alice").is_empty());
        assert!(matches!(
            graph.remove_edge("alice", "bob"),
            Err(SmmError::NotFound(_))
        ));
    }

    #[test]
    fn test_removal_relinks_middle_of_list() {
        let mut graph = graph_with(&["alice", "bob", "carol", "dave"]);
        for target in ["bob", "carol", "dave"] {
            graph.add_edge("alice", target).expect("edge is legal");
        }
        // "carol" sits mid-list: [dave, carol, bob].
        graph.remove_edge("alice", "carol").expect("edge exists");
        assert_eq!(following_of(&graph, "alice"), vec!["dave", "bob"]);
        assert!(followers_of(&graph, "carol").is_empty());
    }

    #[test]
    fn test_counts_track_list_lengths() {
        let mut graph = graph_with(&["alice", "bob", "carol"]);
        graph.add_edge("alice", "bob").expect("edge");
        graph.add_edge("carol", "bob").expect("edge");
        let bob = graph.find_user("bob").expect("bob in graph");
        assert_eq!(bob.followers_count(), 2);
        assert_eq!(bob.following_count(), 0);
    }
}
