//! Utility functions for CLI input and display.

use crate::clock::Timestamp;
use chrono::{Local, LocalResult, TimeZone};
use rpassword::prompt_password;
use std::io::{self, BufRead, Write};

/// Prints a prompt and reads one line from stdin.
///
/// Returns `None` on end-of-input or a read error, which callers treat the
/// same as the user declining the operation. The trailing newline is
/// stripped; nothing else is trimmed or truncated, since length limits are
/// the validator's job.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Prompts for a password with echo disabled.
///
/// Returns `None` on end-of-input or a terminal error, treated as declining
/// the operation.
pub fn read_password(prompt: &str) -> Option<String> {
    prompt_password(format!("{prompt}: ")).ok()
}

/// Renders an epoch-seconds timestamp as `dd/mm/yyyy hh:mm:ss am/pm` in
/// local time. Falls back to the raw number if the value does not map to a
/// representable local time.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    match Local.timestamp_opt(timestamp as i64, 0) {
        LocalResult::Single(datetime) => datetime.format("%d/%m/%Y %I:%M:%S %P").to_string(),
        _ => timestamp.to_string(),
    }
}

/// Parses a menu choice or numeric field, rejecting trailing garbage.
pub fn parse_number(input: &str) -> Option<u64> {
    input.trim().parse().ok()
}
