//! Ordered user index: an unbalanced binary search tree keyed by username.
//!
//! The tree's shape is exactly what simple recursive insertion produces, with
//! no rebalancing, so lookup is O(height) and worst case O(n) for adversarial
//! insertion orders. That is an accepted trade at demo scale; the contract
//! here (ordered unique-key insert/find/traverse) would be unchanged by a
//! balanced replacement.
//!
//! The index exclusively owns its nodes. The only references that escape are
//! the transient borrows handed out by [`find`](UserIndex::find),
//! [`find_mut`](UserIndex::find_mut), and the in-order iterator.

use crate::social::types::User;
use std::cmp::Ordering;

struct UserNode {
    user: User,
    left: Option<Box<UserNode>>,
    right: Option<Box<UserNode>>,
}

/// Canonical store of user identity, credentials, and follow counters.
#[derive(Default)]
pub struct UserIndex {
    root: Option<Box<UserNode>>,
    len: usize,
}

impl UserIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts a user, keyed by username.
    ///
    /// Returns `false` and leaves the tree untouched if the username is
    /// already present; otherwise the user becomes a new leaf in the unique
    /// position lexicographic comparison determines.
    pub fn insert(&mut self, user: User) -> bool {
        let inserted = Self::insert_at(&mut self.root, user);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn insert_at(slot: &mut Option<Box<UserNode>>, user: User) -> bool {
        match slot {
            None => {
                *slot = Some(Box::new(UserNode {
                    user,
                    left: None,
                    right: None,
                }));
                true
            }
            Some(node) => match user.username().cmp(node.user.username()) {
                Ordering::Less => Self::insert_at(&mut node.left, user),
                Ordering::Greater => Self::insert_at(&mut node.right, user),
                Ordering::Equal => false,
            },
        }
    }

    /// Looks up a user by username. O(height).
    pub fn find(&self, username: &str) -> Option<&User> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match username.cmp(node.user.username()) {
                Ordering::Equal => return Some(&node.user),
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }

    /// Mutable lookup, used to adjust the follow counters. This is the only
    /// sanctioned mutation of a stored user and the borrow is transient.
    pub fn find_mut(&mut self, username: &str) -> Option<&mut User> {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match username.cmp(node.user.username()) {
                Ordering::Equal => return Some(&mut node.user),
                Ordering::Less => cur = node.left.as_deref_mut(),
                Ordering::Greater => cur = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Lazy in-order traversal: users in ascending username order.
    pub fn iter_inorder(&self) -> InorderIter<'_> {
        let mut iter = InorderIter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Number of users stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no users are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Drop for UserIndex {
    // Dropped iteratively: a degenerate (list-shaped) tree must not
    // overflow the stack through recursive Box drops.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
        }
    }
}

/// Iterator over users in ascending username order.
///
/// Drives the traversal lazily with an explicit node stack; nothing is
/// collected up front.
pub struct InorderIter<'a> {
    stack: Vec<&'a UserNode>,
}

impl<'a> InorderIter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a UserNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InorderIter<'a> {
    type Item = &'a User;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.user)
    }
}
