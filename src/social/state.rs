//! Application state: composition and orchestration of the five structures.
//!
//! [`App`] owns the user index, post log, schedule, message queue, and
//! follow graph, plus the single optional session and the runtime capacity
//! limits. Every mutation flows through here, and the checks always run in
//! the same order: session present (where required), then target entities
//! exist, then content validation, then capacity. The first failure
//! short-circuits, so a rejected operation never half-applies.
//!
//! ## Cross-structure invariants
//!
//! - A follow edge is only ever added between two registered users, and the
//!   user index's follower/following counters move in the same operation as
//!   a successful edge change. A failed edge operation moves no counters.
//! - Post ids come from one counter owned by this struct: assigned at
//!   publish time for immediate posts, at scheduling time for deferred
//!   ones, and never reused.
//! - Registration inserts into the user index and the follow graph
//!   together; nothing else creates users, so the two stay in step.

use crate::clock::{Clock, Timestamp};
use crate::error::{Result, SmmError};
use crate::social::constants::FIRST_POST_ID;
use crate::social::graph::FollowGraph;
use crate::social::post_log::PostLog;
use crate::social::queue::MessageQueue;
use crate::social::schedule::ScheduleList;
use crate::social::types::{Limits, Message, Post, PostId, ScheduledPost, User};
use crate::social::user_index::UserIndex;
use crate::validation::Validator;
use tracing::{debug, info, warn};

/// Outcome of one due-processing pass.
#[derive(Debug)]
pub struct DueReport {
    /// Posts published by this pass, in release order.
    pub published: Vec<Post>,
    /// Posts still waiting in the schedule afterwards, due or not.
    pub still_scheduled: usize,
}

/// The whole application: five structures, one session, one id counter.
pub struct App<C: Clock> {
    users: UserIndex,
    posts: PostLog,
    scheduled: ScheduleList,
    messages: MessageQueue,
    graph: FollowGraph,
    session: Option<String>,
    limits: Limits,
    next_post_id: u64,
    clock: C,
}

impl<C: Clock> App<C> {
    /// Creates an empty application with the given limits and clock.
    pub fn new(limits: Limits, clock: C) -> Self {
        Self {
            users: UserIndex::new(),
            posts: PostLog::new(limits.max_posts),
            scheduled: ScheduleList::new(),
            messages: MessageQueue::with_capacity(limits.max_messages),
            graph: FollowGraph::new(limits.max_users),
            session: None,
            limits,
            next_post_id: FIRST_POST_ID,
            clock,
        }
    }

    fn allocate_post_id(&mut self) -> PostId {
        let id = self.next_post_id;
        self.next_post_id += 1;
        PostId::new(id)
    }

    fn require_session(&self) -> Result<&str> {
        self.session
            .as_deref()
            .ok_or_else(|| SmmError::unauthorized("login required"))
    }

    fn counter_entry(&mut self, username: &str) -> Result<&mut User> {
        self.users.find_mut(username).ok_or_else(|| {
            SmmError::inconsistent(format!(
                "user '{username}' is in the follow graph but missing from the index"
            ))
        })
    }

    // =========================================================================
    // Accounts and sessions
    // =========================================================================

    /// Registers a new account in the user index and the follow graph.
    pub fn register(&mut self, username: &str, password: &str) -> Result<()> {
        Validator::validate_username(username)?;
        Validator::validate_password(password)?;
        if self.users.find(username).is_some() {
            return Err(SmmError::duplicate(format!(
                "username '{username}' is already registered"
            )));
        }
        if self.graph.user_count() >= self.limits.max_users {
            return Err(SmmError::capacity_exceeded(format!(
                "user limit of {} reached",
                self.limits.max_users
            )));
        }
        self.graph.add_user(username)?;
        self.users.insert(User::new(username, password));
        info!("registered user '{username}'");
        Ok(())
    }

    /// Authenticates and opens a session, replacing any existing one.
    ///
    /// Plaintext comparison, and one error for both unknown user and wrong
    /// password: even a toy has no reason to hand out username oracles.
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let ok = self
            .users
            .find(username)
            .is_some_and(|u| u.password_matches(password));
        if !ok {
            return Err(SmmError::unauthorized("invalid credentials"));
        }
        self.session = Some(username.to_string());
        info!("'{username}' logged in");
        Ok(())
    }

    /// Clears the session, returning the username that was logged in.
    pub fn logout(&mut self) -> Result<String> {
        let username = self
            .session
            .take()
            .ok_or_else(|| SmmError::unauthorized("not logged in"))?;
        info!("'{username}' logged out");
        Ok(username)
    }

    /// The currently authenticated username, if any.
    pub fn current_user(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Registered users in ascending username order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter_inorder()
    }

    // =========================================================================
    // Posts
    // =========================================================================

    /// Publishes a post as the current user.
    pub fn create_post(&mut self, content: &str) -> Result<Post> {
        let author = self.require_session()?.to_string();
        Validator::validate_content(content)?;
        if self.posts.len() >= self.limits.max_posts {
            return Err(SmmError::capacity_exceeded(format!(
                "post limit of {} reached",
                self.limits.max_posts
            )));
        }
        let post = Post {
            id: self.allocate_post_id(),
            author,
            content: content.to_string(),
            created_at: self.clock.now(),
        };
        self.posts.append(post.clone())?;
        info!("published post {} by '{}'", post.id, post.author);
        Ok(post)
    }

    /// Defers a post until `release_at` as the current user.
    ///
    /// The id is assigned now and carried unchanged into the eventual
    /// published post.
    pub fn schedule_post(&mut self, content: &str, release_at: Timestamp) -> Result<ScheduledPost> {
        let author = self.require_session()?.to_string();
        Validator::validate_content(content)?;
        let post = ScheduledPost {
            id: self.allocate_post_id(),
            author,
            content: content.to_string(),
            created_at: self.clock.now(),
            release_at,
        };
        self.scheduled.add(post.clone());
        info!(
            "scheduled post {} by '{}' for {}",
            post.id, post.author, post.release_at
        );
        Ok(post)
    }

    /// Publishes every scheduled post now due, up to `max` in one pass.
    ///
    /// A due post that cannot be published (the log cap is reached, or
    /// growth fails) goes back to the front of the schedule along with
    /// everything behind it, and the pass stops. Nothing is dropped.
    pub fn process_due(&mut self, max: usize) -> DueReport {
        let now = self.clock.now();
        let mut published = Vec::new();
        let mut requeue: Vec<ScheduledPost> = Vec::new();
        let mut pending = self.scheduled.pop_due(now, max).into_iter();
        while let Some(scheduled) = pending.next() {
            if self.posts.len() >= self.limits.max_posts {
                warn!(
                    "post limit of {} reached; {} due post(s) stay scheduled",
                    self.limits.max_posts,
                    1 + pending.len()
                );
                requeue.push(scheduled);
                requeue.extend(pending);
                break;
            }
            let post = Post {
                id: scheduled.id,
                author: scheduled.author.clone(),
                content: scheduled.content.clone(),
                created_at: now,
            };
            match self.posts.append(post.clone()) {
                Ok(()) => {
                    info!("published scheduled post {} by '{}'", post.id, post.author);
                    published.push(post);
                }
                Err(e) => {
                    warn!("could not publish scheduled post {}: {e}", scheduled.id);
                    requeue.push(scheduled);
                    requeue.extend(pending);
                    break;
                }
            }
        }
        for scheduled in requeue.into_iter().rev() {
            self.scheduled.push_front(scheduled);
        }
        DueReport {
            published,
            still_scheduled: self.scheduled.len(),
        }
    }

    /// Published posts, most recent first.
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter_desc()
    }

    /// Pending scheduled posts, earliest release first.
    pub fn scheduled(&self) -> impl Iterator<Item = &ScheduledPost> {
        self.scheduled.iter()
    }

    /// Published-post tally per author, in order of each author's first
    /// published post.
    pub fn post_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for post in self.posts.iter() {
            match counts.iter_mut().find(|(author, _)| author == &post.author) {
                Some(entry) => entry.1 += 1,
                None => counts.push((post.author.clone(), 1)),
            }
        }
        counts
    }

    // =========================================================================
    // Follow graph
    // =========================================================================

    /// Follows `target` as the current user.
    ///
    /// Returns whether a new edge was created; following someone twice is
    /// absorbed silently and moves no counters.
    pub fn follow(&mut self, target: &str) -> Result<bool> {
        let me = self.require_session()?.to_string();
        if self.users.find(target).is_none() {
            return Err(SmmError::not_found(format!(
                "user '{target}' does not exist"
            )));
        }
        let created = self.graph.add_edge(&me, target)?;
        if created {
            self.counter_entry(&me)?.following += 1;
            self.counter_entry(target)?.followers += 1;
            info!("'{me}' now follows '{target}'");
        }
        Ok(created)
    }

    /// Unfollows `target` as the current user.
    ///
    /// Counters move only when the mirrored removal fully succeeds; the
    /// `NotFound` and `Inconsistent` outcomes leave them alone.
    pub fn unfollow(&mut self, target: &str) -> Result<()> {
        let me = self.require_session()?.to_string();
        self.graph.remove_edge(&me, target)?;
        let my_entry = self.counter_entry(&me)?;
        my_entry.following = my_entry.following.saturating_sub(1);
        let their_entry = self.counter_entry(target)?;
        their_entry.followers = their_entry.followers.saturating_sub(1);
        info!("'{me}' unfollowed '{target}'");
        Ok(())
    }

    /// Usernames the current user follows, most recently followed first.
    pub fn following(&self) -> Result<Vec<String>> {
        let me = self.require_session()?;
        let entry = self.graph.find_user(me).ok_or_else(|| {
            SmmError::inconsistent(format!("session user '{me}' missing from the follow graph"))
        })?;
        Ok(entry.following().map(str::to_string).collect())
    }

    /// Usernames following the current user, most recent first.
    pub fn followers(&self) -> Result<Vec<String>> {
        let me = self.require_session()?;
        let entry = self.graph.find_user(me).ok_or_else(|| {
            SmmError::inconsistent(format!("session user '{me}' missing from the follow graph"))
        })?;
        Ok(entry.followers().map(str::to_string).collect())
    }

    // =========================================================================
    // Messages
    // =========================================================================

    /// Queues a message from the current user.
    pub fn send_message(&mut self, to: &str, content: &str) -> Result<()> {
        let from = self.require_session()?.to_string();
        if self.users.find(to).is_none() {
            return Err(SmmError::not_found(format!("user '{to}' does not exist")));
        }
        Validator::validate_content(content)?;
        if self.messages.len() >= self.limits.max_messages {
            return Err(SmmError::capacity_exceeded(format!(
                "message limit of {} reached",
                self.limits.max_messages
            )));
        }
        let message = Message {
            from,
            to: to.to_string(),
            content: content.to_string(),
            sent_at: self.clock.now(),
        };
        if !self.messages.enqueue(message) {
            return Err(SmmError::capacity_exceeded("message queue is full"));
        }
        debug!("queued message to '{to}'");
        Ok(())
    }

    /// Delivers (dequeues) the oldest queued message, if any.
    ///
    /// No session is required: delivery is a worker-style action, not a
    /// user one.
    pub fn process_message(&mut self) -> Option<Message> {
        let message = self.messages.dequeue();
        if let Some(m) = &message {
            debug!("delivered message from '{}' to '{}'", m.from, m.to);
        }
        message
    }

    /// Snapshot of the queued messages, oldest first. Session required.
    pub fn messages(&self) -> Result<Vec<Message>> {
        self.require_session()?;
        Ok(self.messages.iter().cloned().collect())
    }

    // =========================================================================
    // Limits
    // =========================================================================

    /// Replaces the runtime limits, resizing the message queue to match.
    ///
    /// Rejected whole, with nothing changed, if any limit is zero or if
    /// more messages are queued than the new message limit holds.
    pub fn set_limits(&mut self, limits: Limits) -> Result<()> {
        if limits.max_users == 0 || limits.max_posts == 0 || limits.max_messages == 0 {
            return Err(SmmError::invalid_input("limits must be positive"));
        }
        self.messages.set_capacity(limits.max_messages)?;
        self.posts.set_cap(limits.max_posts);
        self.graph.set_max_users(limits.max_users);
        self.limits = limits;
        info!(
            "limits now users={} posts={} messages={}",
            limits.max_users, limits.max_posts, limits.max_messages
        );
        Ok(())
    }

    /// The current limits.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// The clock this application stamps records with.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
