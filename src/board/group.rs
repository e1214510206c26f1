use crate::models::ticket::{Priority, Status, Ticket, User};
use serde::Serialize;

/// How the board partitions tickets into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    Status,
    User,
    Priority,
    /// No recognized grouping: the whole feed as one pass-through column.
    None,
}

impl GroupMode {
    /// Never fails; anything unrecognized falls back to the pass-through mode.
    pub fn parse(s: &str) -> Self {
        match s {
            "status" => GroupMode::Status,
            "user" => GroupMode::User,
            "priority" => GroupMode::Priority,
            _ => GroupMode::None,
        }
    }
}

/// One board column: a title and the tickets that landed in it.
/// Columns are emitted even when empty so callers can render them.
#[derive(Debug, Clone, Serialize)]
pub struct Bucket {
    pub title: String,
    pub tickets: Vec<Ticket>,
}

/// Partition tickets into columns. Pure: same inputs, same output, inputs
/// untouched. Ticket order within a column follows the input order.
pub fn group_tickets(tickets: &[Ticket], mode: GroupMode, users: &[User]) -> Vec<Bucket> {
    match mode {
        GroupMode::Status => group_by_status(tickets),
        GroupMode::User => group_by_user(tickets, users),
        GroupMode::Priority => group_by_priority(tickets),
        GroupMode::None => vec![Bucket {
            title: String::new(),
            tickets: tickets.to_vec(),
        }],
    }
}

fn group_by_status(tickets: &[Ticket]) -> Vec<Bucket> {
    // Fixed column set; tickets with any other status are not shown.
    const COLUMNS: [Status; 3] = [Status::Todo, Status::InProgress, Status::Backlog];

    COLUMNS
        .iter()
        .map(|status| Bucket {
            title: status.to_string(),
            tickets: tickets
                .iter()
                .filter(|ticket| &ticket.status == status)
                .cloned()
                .collect(),
        })
        .collect()
}

fn group_by_user(tickets: &[Ticket], users: &[User]) -> Vec<Bucket> {
    // One column per user, in feed order. Unassigned tickets and tickets
    // pointing at an unknown user id are not shown.
    users
        .iter()
        .map(|user| Bucket {
            title: user.name.clone(),
            tickets: tickets
                .iter()
                .filter(|ticket| ticket.user_id.as_deref() == Some(user.id.as_str()))
                .cloned()
                .collect(),
        })
        .collect()
}

fn group_by_priority(tickets: &[Ticket]) -> Vec<Bucket> {
    Priority::DESCENDING
        .iter()
        .map(|priority| Bucket {
            title: priority.label().to_string(),
            tickets: tickets
                .iter()
                .filter(|ticket| ticket.priority == *priority)
                .cloned()
                .collect(),
        })
        .collect()
}
