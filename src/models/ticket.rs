use serde::{Deserialize, Serialize};
use std::fmt;

/// One unit of work on the board.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tag: Vec<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    pub status: Status,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// The two collections the feed returns, exactly as they arrive.
/// Fetched once per run and never mutated; every view is derived.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// Workflow status. The feed sends free-form strings; only the three exact
/// column names are recognized, everything else lands in `Unrecognized` and
/// is skipped when grouping by status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Todo,
    InProgress,
    Backlog,
    Unrecognized(String),
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Todo" => Status::Todo,
            "In progress" => Status::InProgress,
            "Backlog" => Status::Backlog,
            _ => Status::Unrecognized(s),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Todo => write!(f, "Todo"),
            Status::InProgress => write!(f, "In progress"),
            Status::Backlog => write!(f, "Backlog"),
            Status::Unrecognized(s) => write!(f, "{}", s),
        }
    }
}

/// Ticket priority, 0 through 4 on the wire. Ordered so that `Urgent` is the
/// greatest, which makes descending sorts read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    NoPriority,
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Board column order when grouping by priority.
    pub const DESCENDING: [Priority; 5] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::NoPriority,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::NoPriority => "No Priority",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Priority::NoPriority),
            1 => Ok(Priority::Low),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            4 => Ok(Priority::Urgent),
            other => Err(format!("priority {} is outside the 0-4 range", other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority as u8
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_deserialization() {
        let json = r#"{
            "id": "CAM-1",
            "title": "Update User Profile Page UI",
            "tag": ["Feature Request"],
            "userId": "usr-1",
            "status": "Todo",
            "priority": 4
        }"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, "CAM-1");
        assert_eq!(ticket.tag, vec!["Feature Request".to_string()]);
        assert_eq!(ticket.user_id.as_deref(), Some("usr-1"));
        assert_eq!(ticket.status, Status::Todo);
        assert_eq!(ticket.priority, Priority::Urgent);
    }

    #[test]
    fn test_ticket_without_assignee_or_tags() {
        let json = r#"{"id": "CAM-2", "title": "Orphan", "status": "Backlog", "priority": 0}"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.user_id, None);
        assert!(ticket.tag.is_empty());
        assert_eq!(ticket.priority, Priority::NoPriority);
    }

    #[test]
    fn test_unrecognized_status_keeps_original_string() {
        let status = Status::from("Done".to_string());
        assert_eq!(status, Status::Unrecognized("Done".to_string()));
        assert_eq!(status.to_string(), "Done");
    }

    #[test]
    fn test_status_match_is_exact() {
        // "In Progress" with a capital P is not the feed's column name
        let status = Status::from("In Progress".to_string());
        assert!(matches!(status, Status::Unrecognized(_)));
        assert_eq!(Status::from("In progress".to_string()), Status::InProgress);
    }

    #[test]
    fn test_priority_out_of_range_is_rejected() {
        let result: Result<Ticket, _> = serde_json::from_str(
            r#"{"id": "X", "title": "Bad", "status": "Todo", "priority": 7}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Urgent > Priority::High);
        assert!(Priority::Low > Priority::NoPriority);
        assert_eq!(u8::from(Priority::Urgent), 4);
        assert_eq!(Priority::try_from(2).unwrap(), Priority::Medium);
    }

    #[test]
    fn test_snapshot_defaults_to_empty_collections() {
        let snapshot: BoardSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.tickets.is_empty());
        assert!(snapshot.users.is_empty());
    }
}
