//! Terminal menu interface for SMM.
//!
//! A classic numbered-menu loop: print the menu, read a choice, dispatch to
//! the matching command, repeat until the user exits or stdin closes. All
//! state lives in one [`App`](crate::social::App) owned by the loop; the
//! commands only borrow it.

pub mod commands;
pub mod utils;

use crate::clock::SystemClock;
use crate::social::{App, Limits};
use crate::Result;
use utils::{parse_number, read_line};

fn print_menu() {
    println!("\n--- Terminal SMM ---");
    println!(" 1. Register user");
    println!(" 2. Login");
    println!(" 3. Logout");
    println!(" 4. Create post");
    println!(" 5. View posts");
    println!(" 6. Schedule post");
    println!(" 7. View scheduled posts");
    println!(" 8. Process due posts");
    println!(" 9. Follow user");
    println!("10. Unfollow user");
    println!("11. Show following");
    println!("12. Show followers");
    println!("13. Send message");
    println!("14. Process one message");
    println!("15. Show message queue");
    println!("16. List users");
    println!("17. Post counts per author");
    println!("18. Change limits");
    println!(" 0. Exit");
    println!("--------------------");
}

/// Runs the menu loop until exit or end-of-input.
pub fn run() -> Result<()> {
    let mut app = App::new(Limits::default(), SystemClock);
    println!("Welcome to Terminal SMM");

    loop {
        print_menu();
        let line = match read_line("Choice: ") {
            Some(line) => line,
            None => break,
        };
        let choice = match parse_number(&line) {
            Some(n) => n,
            None => {
                println!("Invalid input; please enter a number.");
                continue;
            }
        };
        match choice {
            1 => commands::register(&mut app),
            2 => commands::login(&mut app),
            3 => commands::logout(&mut app),
            4 => commands::create_post(&mut app),
            5 => commands::view_posts(&app),
            6 => commands::schedule_post(&mut app),
            7 => commands::view_scheduled(&app),
            8 => commands::process_due(&mut app),
            9 => commands::follow(&mut app),
            10 => commands::unfollow(&mut app),
            11 => commands::show_following(&app),
            12 => commands::show_followers(&app),
            13 => commands::send_message(&mut app),
            14 => commands::process_message(&mut app),
            15 => commands::show_messages(&app),
            16 => commands::list_users(&app),
            17 => commands::post_counts(&app),
            18 => commands::change_limits(&mut app),
            0 => {
                println!("Exiting.");
                break;
            }
            _ => println!("Unknown choice."),
        }
    }

    Ok(())
}
