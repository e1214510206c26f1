use colored::*;
use std::fmt;

#[derive(Debug)]
pub enum BoardError {
    // Configuration errors
    ConfigInvalid(String),

    // Feed errors
    FeedUnavailable(String),
    FeedApiError(u16, String),

    // Generic error
    Other(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::ConfigInvalid(msg) => {
                write!(f, "{}\n", "Invalid configuration".red().bold())?;
                write!(f, "   {}\n\n", msg.dimmed())?;
                write!(f, "   To fix:\n")?;
                write!(f, "   1. Check your config file: ~/.kanban/config.toml\n")?;
                write!(f, "   2. Or set the feed URL: {}", "kanban config set board.url <url>".green())
            }

            BoardError::FeedUnavailable(msg) => {
                write!(f, "{}\n", "Could not reach the ticket feed".red().bold())?;
                write!(f, "   {}\n\n", msg.dimmed())?;
                write!(f, "   To fix:\n")?;
                write!(f, "   1. Check your internet connection\n")?;
                write!(f, "   2. Verify the endpoint: {}", "kanban config show".green())
            }

            BoardError::FeedApiError(status, msg) => {
                write!(f, "{}\n", format!("Ticket feed error ({})", status).red().bold())?;
                write!(f, "   {}\n\n", msg.dimmed())?;
                write!(f, "   Try again or check the feed URL with: {}", "kanban config show".green())
            }

            BoardError::Other(msg) => {
                write!(f, "{}\n", "Error".red().bold())?;
                write!(f, "   {}", msg.dimmed())
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            BoardError::FeedUnavailable(err.to_string())
        } else if let Some(status) = err.status() {
            BoardError::FeedApiError(status.as_u16(), err.to_string())
        } else {
            BoardError::Other(err.to_string())
        }
    }
}
