use crate::models::ticket::Ticket;
use std::cmp::Ordering;

/// How tickets are ordered inside a single column. Sorting never moves a
/// ticket across columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Priority,
    Title,
    /// No selection: keep the feed order.
    None,
}

impl SortMode {
    /// Never fails; anything unrecognized keeps the feed order.
    pub fn parse(s: &str) -> Self {
        match s {
            "priority" => SortMode::Priority,
            "title" => SortMode::Title,
            _ => SortMode::None,
        }
    }
}

/// Returns a newly ordered vector; the input is left untouched. Both sorts
/// are stable, so ties keep their original relative order.
pub fn sort_tickets(tickets: &[Ticket], mode: SortMode) -> Vec<Ticket> {
    let mut sorted = tickets.to_vec();
    match mode {
        SortMode::Priority => sorted.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortMode::Title => sorted.sort_by(|a, b| title_cmp(&a.title, &b.title)),
        SortMode::None => {}
    }
    sorted
}

/// Case-insensitive comparison so "apple" sorts before "Banana", matching
/// how locale-aware collation orders titles.
fn title_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
