use thiserror::Error;

pub type Result<T> = std::result::Result<T, NamedrawError>;

/// Raised while turning raw input text into a participant list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Please enter at least {min} names, one per line (found {found})")]
    InsufficientParticipants { found: usize, min: usize },
}

#[derive(Error, Debug)]
pub enum NamedrawError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl NamedrawError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn dialog(msg: impl Into<String>) -> Self {
        Self::Dialog(msg.into())
    }
}

// conversion from dialoguer::Error
impl From<dialoguer::Error> for NamedrawError {
    fn from(err: dialoguer::Error) -> Self {
        NamedrawError::Dialog(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_is_surfaced_unchanged() {
        let err: NamedrawError = ParseError::InsufficientParticipants { found: 1, min: 2 }.into();
        assert_eq!(
            err.to_string(),
            "Please enter at least 2 names, one per line (found 1)"
        );
    }

    #[test]
    fn test_helpers_pick_variant() {
        assert!(matches!(NamedrawError::config("x"), NamedrawError::Config(_)));
        assert!(matches!(
            NamedrawError::dialog("no tty"),
            NamedrawError::Dialog(msg) if msg == "no tty"
        ));
    }
}
