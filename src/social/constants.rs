//! Shared capacity defaults and structural constants.
//!
//! These are the demo-scale defaults; every limit here can be raised or
//! lowered at runtime through [`App::set_limits`](crate::social::App::set_limits).

// =============================================================================
// Capacity Limits (runtime-adjustable defaults)
// =============================================================================

/// Default maximum number of registered users.
pub const DEFAULT_MAX_USERS: usize = 10;

/// Default hard cap on published posts.
pub const DEFAULT_MAX_POSTS: usize = 30;

/// Default message queue capacity.
pub const DEFAULT_MAX_MESSAGES: usize = 20;

// =============================================================================
// Structural Constants
// =============================================================================

/// Starting slot count for the post log; growth doubles from here.
pub const INITIAL_POST_CAPACITY: usize = 16;

/// Maximum scheduled posts published in one due-processing pass.
pub const DUE_BATCH_SIZE: usize = 256;

/// First post id ever assigned; ids count up from here and are never reused.
pub const FIRST_POST_ID: u64 = 1;
