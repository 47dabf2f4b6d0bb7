//! # SMM - Terminal Social Media Manager
//!
//! An in-memory social-platform core built on hand-rolled data structures:
//! a binary search tree indexes accounts, a growable append log stores
//! published posts, a sorted singly-linked list holds scheduled posts until
//! they fall due, a fixed-capacity circular buffer queues inter-user
//! messages, and mirrored adjacency lists track who follows whom.
//!
//! ## Design
//!
//! - **Everything is process-lifetime state**: no persistence, no network,
//!   no concurrency. One [`social::App`] owns every structure.
//! - **All mutation is mediated**: operations check session, existence,
//!   validation, and capacity in that order and reject as values; nothing
//!   panics in normal operation.
//! - **Time is injected**: the [`clock::Clock`] trait makes scheduled-post
//!   processing a pure function of (state, now).
//!
//! ## Example
//!
//! ```rust
//! use smm::clock::SystemClock;
//! use smm::social::{App, Limits};
//!
//! # fn main() -> smm::Result<()> {
//! let mut app = App::new(Limits::default(), SystemClock);
//! app.register("alice", "wonderland")?;
//! app.register("bob", "builder")?;
//!
//! app.login("alice", "wonderland")?;
//! app.create_post("hello, world")?;
//! app.follow("bob")?;
//! app.send_message("bob", "meet at noon?")?;
//!
//! assert_eq!(app.posts().count(), 1);
//! assert_eq!(app.following()?, vec!["bob".to_string()]);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod clock;
pub mod error;
pub mod social;
pub mod validation;

pub use error::{Result, SmmError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
