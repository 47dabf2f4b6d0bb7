//! The social-platform core: hand-built structures and their orchestration.
//!
//! Five structures carry all state, each with one job:
//!
//! ```text
//! App (state)
//!  ├── UserIndex     binary search tree      identity, credentials, counters
//!  ├── PostLog       growable append array   published posts
//!  ├── ScheduleList  sorted linked list      deferred posts, by release time
//!  ├── MessageQueue  circular buffer         pending messages, FIFO
//!  └── FollowGraph   adjacency lists         who follows whom, mirrored
//! ```
//!
//! The structures never call each other. Invariants that span more than one
//! of them (counters mirroring adjacency lengths, edges only between
//! registered users, one id counter for immediate and deferred posts) live
//! in [`state::App`], which mediates every mutation.

pub mod constants;
pub mod graph;
pub mod post_log;
pub mod queue;
pub mod schedule;
pub mod state;
pub mod types;
pub mod user_index;

pub use graph::{FollowGraph, GraphUser};
pub use post_log::PostLog;
pub use queue::MessageQueue;
pub use schedule::ScheduleList;
pub use state::{App, DueReport};
pub use types::{Limits, Message, Post, PostId, ScheduledPost, User};
pub use user_index::UserIndex;
