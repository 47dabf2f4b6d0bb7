//! Command implementations for the SMM menu.
//!
//! Each function handles one menu action: prompt for whatever the operation
//! needs, call into the application state, and render the outcome. A
//! `None` from the line reader means the user (or stdin) bailed out, and
//! the action is silently abandoned, the same as declining it.

use crate::cli::utils::{format_timestamp, parse_number, read_line, read_password};
use crate::clock::{Clock, SystemClock};
use crate::social::constants::DUE_BATCH_SIZE;
use crate::social::App;

pub fn register(app: &mut App<SystemClock>) {
    let username = match read_line("New username: ") {
        Some(v) => v,
        None => return,
    };
    let password = match read_password("Set password") {
        Some(v) => v,
        None => return,
    };
    match app.register(&username, &password) {
        Ok(()) => println!("User created."),
        Err(e) => println!("{e}"),
    }
}

pub fn login(app: &mut App<SystemClock>) {
    let username = match read_line("Username: ") {
        Some(v) => v,
        None => return,
    };
    let password = match read_password("Password") {
        Some(v) => v,
        None => return,
    };
    match app.login(&username, &password) {
        Ok(()) => println!("Logged in as {username}"),
        Err(e) => println!("{e}"),
    }
}

pub fn logout(app: &mut App<SystemClock>) {
    match app.logout() {
        Ok(username) => println!("Goodbye, {username}"),
        Err(e) => println!("{e}"),
    }
}

pub fn create_post(app: &mut App<SystemClock>) {
    let content = match read_line("Content: ") {
        Some(v) => v,
        None => return,
    };
    match app.create_post(&content) {
        Ok(post) => println!("Posted #{}.", post.id),
        Err(e) => println!("{e}"),
    }
}

pub fn view_posts(app: &App<SystemClock>) {
    if app.posts().count() == 0 {
        println!("No posts yet.");
        return;
    }
    println!("Posts (newest first):");
    for post in app.posts() {
        println!(
            " #{} by {} at {}: {}",
            post.id,
            post.author,
            format_timestamp(post.created_at),
            post.content
        );
    }
}

pub fn schedule_post(app: &mut App<SystemClock>) {
    let now = app.clock().now();
    let prompt = format!("Release time as epoch seconds (e.g. {now} for now): ");
    let release_at = match read_line(&prompt).as_deref().and_then(parse_number) {
        Some(v) => v,
        None => {
            println!("Invalid time.");
            return;
        }
    };
    let content = match read_line("Content: ") {
        Some(v) => v,
        None => return,
    };
    match app.schedule_post(&content, release_at) {
        Ok(post) => println!(
            "Scheduled #{} for {}.",
            post.id,
            format_timestamp(post.release_at)
        ),
        Err(e) => println!("{e}"),
    }
}

pub fn view_scheduled(app: &App<SystemClock>) {
    if app.scheduled().count() == 0 {
        println!("No scheduled posts.");
        return;
    }
    println!("Scheduled posts (by release time):");
    for post in app.scheduled() {
        println!(
            " #{} by {} at {}: {}",
            post.id,
            post.author,
            format_timestamp(post.release_at),
            post.content
        );
    }
}

pub fn process_due(app: &mut App<SystemClock>) {
    let report = app.process_due(DUE_BATCH_SIZE);
    if report.published.is_empty() {
        println!("No scheduled posts due.");
    } else {
        for post in &report.published {
            println!("Published #{} by {}: {}", post.id, post.author, post.content);
        }
    }
    if report.still_scheduled > 0 {
        println!("{} post(s) remain scheduled.", report.still_scheduled);
    }
}

pub fn follow(app: &mut App<SystemClock>) {
    let target = match read_line("Follow username: ") {
        Some(v) => v,
        None => return,
    };
    match app.follow(&target) {
        Ok(true) => println!("Now following {target}"),
        Ok(false) => println!("Already following {target}"),
        Err(e) => println!("{e}"),
    }
}

pub fn unfollow(app: &mut App<SystemClock>) {
    let target = match read_line("Unfollow username: ") {
        Some(v) => v,
        None => return,
    };
    match app.unfollow(&target) {
        Ok(()) => println!("Unfollowed {target}"),
        Err(e) => println!("{e}"),
    }
}

pub fn show_following(app: &App<SystemClock>) {
    match app.following() {
        Ok(names) if names.is_empty() => println!(" (none)"),
        Ok(names) => {
            for name in names {
                println!(" - {name}");
            }
        }
        Err(e) => println!("{e}"),
    }
}

pub fn show_followers(app: &App<SystemClock>) {
    match app.followers() {
        Ok(names) if names.is_empty() => println!(" (none)"),
        Ok(names) => {
            for name in names {
                println!(" - {name}");
            }
        }
        Err(e) => println!("{e}"),
    }
}

pub fn send_message(app: &mut App<SystemClock>) {
    let to = match read_line("Send to: ") {
        Some(v) => v,
        None => return,
    };
    let content = match read_line("Message: ") {
        Some(v) => v,
        None => return,
    };
    match app.send_message(&to, &content) {
        Ok(()) => println!("Message queued."),
        Err(e) => println!("{e}"),
    }
}

pub fn process_message(app: &mut App<SystemClock>) {
    match app.process_message() {
        Some(m) => println!("Delivered: {} -> {} | {}", m.from, m.to, m.content),
        None => println!("No messages to deliver."),
    }
}

pub fn show_messages(app: &App<SystemClock>) {
    match app.messages() {
        Ok(messages) if messages.is_empty() => println!("Message queue is empty."),
        Ok(messages) => {
            println!("Messages in queue (front..back):");
            for m in messages {
                println!(
                    " from:{} -> to:{} at {} | {}",
                    m.from,
                    m.to,
                    format_timestamp(m.sent_at),
                    m.content
                );
            }
        }
        Err(e) => println!("{e}"),
    }
}

pub fn list_users(app: &App<SystemClock>) {
    if app.users().count() == 0 {
        println!("No users.");
        return;
    }
    println!("Users (in-order):");
    for user in app.users() {
        println!(
            " - {} (followers:{}, following:{})",
            user.username(),
            user.followers,
            user.following
        );
    }
}

pub fn post_counts(app: &App<SystemClock>) {
    let counts = app.post_counts();
    if counts.is_empty() {
        println!("No posts for analytics.");
        return;
    }
    println!("Post counts per author:");
    for (author, count) in counts {
        println!(" {author} -> {count} post(s)");
    }
}

pub fn change_limits(app: &mut App<SystemClock>) {
    let current = app.limits();
    println!("Current limits:");
    println!(" max users:    {}", current.max_users);
    println!(" max posts:    {}", current.max_posts);
    println!(" max messages: {}", current.max_messages);

    let mut next = current;
    for (label, slot) in [
        ("New max users", &mut next.max_users),
        ("New max posts", &mut next.max_posts),
        ("New max messages", &mut next.max_messages),
    ] {
        let prompt = format!("{label} (blank to keep): ");
        match read_line(&prompt) {
            None => return,
            Some(line) if line.is_empty() => {}
            Some(line) => match parse_number(&line) {
                Some(value) => *slot = value as usize,
                None => {
                    println!("Not a number; keeping the current value.");
                }
            },
        }
    }

    match app.set_limits(next) {
        Ok(()) => println!("Limits updated."),
        Err(e) => println!("{e}"),
    }
}
