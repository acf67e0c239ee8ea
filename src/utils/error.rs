use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Mark for {subject} cannot be greater than {max_mark}.  Entered mark was: {mark}")]
    InvalidMark {
        subject: String,
        mark: i32,
        max_mark: i32,
    },

    #[error("Not a number: {input:?}")]
    MalformedNumber { input: String },

    #[error("Choice {choice} is not on the menu")]
    ChoiceOutOfRange { choice: i32 },

    #[error("Console input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RosterError {
    /// Errors caused by a single bad line of user input. The session goes on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RosterError::InvalidMark { .. }
                | RosterError::MalformedNumber { .. }
                | RosterError::ChoiceOutOfRange { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::ConfigError { message } => {
                format!("Could not load configuration: {}", message)
            }
            RosterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            RosterError::IoError(e) => format!("Console I/O failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
