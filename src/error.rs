use thiserror::Error;

/// Every failure a demonstration can surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Wrong dress type passed: '{0}'")]
    UnknownDressType(String),

    #[error("No prototype registered under key '{0}'")]
    UnknownPrototype(String),

    #[error("Failed to parse expression: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to send notification over {channel}: {reason}")]
    Notification { channel: String, reason: String },

    #[error("Unknown pattern '{name}'")]
    UnknownPattern {
        name: String,
        suggestion: Option<String>,
    },
}

impl CatalogError {
    pub fn notification(channel: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Notification {
            channel: channel.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_pattern(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownPattern {
            name: name.into(),
            suggestion,
        }
    }

    /// A "did you mean" hint, when one exists.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::UnknownPattern { suggestion, .. } => suggestion.as_deref(),
            _ => None,
        }
    }
}

/// Errors raised while turning postfix text into an expression tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("invalid token '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },

    #[error("operator '{operator}' at position {position} needs two operands")]
    MissingOperand { operator: char, position: usize },

    #[error("expression leaves {0} values on the stack")]
    Unbalanced(usize),
}
