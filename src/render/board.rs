use crate::board::group::Bucket;
use crate::models::ticket::{Priority, Ticket, User};
use crate::render::avatars;
use colored::*;

/// Print the grouped (and already sorted) columns. Empty columns are shown
/// too, the board always has its full set of headers.
pub fn print_board(buckets: &[Bucket], users: &[User]) {
    for bucket in buckets {
        let title = if bucket.title.is_empty() {
            "All tickets"
        } else {
            bucket.title.as_str()
        };

        println!(
            "{}  {}",
            title.cyan().bold(),
            format!("({})", bucket.tickets.len()).dimmed()
        );

        if bucket.tickets.is_empty() {
            println!("  {}", "no tickets".dimmed());
        }

        for ticket in &bucket.tickets {
            print_card(ticket, users);
        }

        println!();
    }
}

fn print_card(ticket: &Ticket, users: &[User]) {
    let priority = match ticket.priority {
        Priority::Urgent => ticket.priority.label().red().bold(),
        Priority::High => ticket.priority.label().yellow(),
        Priority::Medium => ticket.priority.label().blue(),
        Priority::Low => ticket.priority.label().green(),
        Priority::NoPriority => ticket.priority.label().dimmed(),
    };

    println!(
        "  {} [{}]  {}",
        ticket.id.bright_white().bold(),
        priority,
        ticket.title
    );

    let assignee = ticket
        .user_id
        .as_deref()
        .and_then(|id| users.iter().find(|user| user.id == id));

    if let Some(user) = assignee {
        match avatars::avatar_for(&user.name) {
            Some(asset) => println!(
                "      {} {} {}",
                "Assignee:".dimmed(),
                user.name,
                format!("({})", asset).dimmed()
            ),
            None => println!("      {} {}", "Assignee:".dimmed(), user.name),
        }
    }

    if !ticket.tag.is_empty() {
        println!("      {} {}", "Tags:".dimmed(), ticket.tag.join(", "));
    }
}
