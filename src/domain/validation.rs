use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidFormat { field: &'static str, input: String },
    InvalidCharacters { field: &'static str, input: String },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    Missing { field: &'static str },
}

impl ValidationError {
    /// Name of the message field that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidFormat { field, .. }
            | Self::InvalidCharacters { field, .. }
            | Self::TooLong { field, .. }
            | Self::Missing { field } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { field, input } => write!(f, "invalid {field}: {input}"),
            Self::InvalidCharacters { field, input } => {
                write!(f, "{field} contains invalid characters: {input}")
            }
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} too long: {actual} (max {max})")
            }
            Self::Missing { field } => write!(f, "{field} must be set before submitting"),
        }
    }
}

impl std::error::Error for ValidationError {}
