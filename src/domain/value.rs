use crate::domain::validation::ValidationError;

/// Replace a leading `+` with the international `00` prefix.
fn normalize_international_prefix(value: &str) -> String {
    match value.strip_prefix('+') {
        Some(rest) => format!("00{rest}"),
        None => value.to_owned(),
    }
}

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Receiver mobile number (`receiver`).
///
/// Invariant: starts with `00` and contains only ASCII digits. A leading `+` is
/// normalized to `00`.
pub struct Receiver(String);

impl Receiver {
    /// Query parameter name used by the gateway (`receiver`).
    pub const FIELD: &'static str = "receiver";

    /// Create a normalized, validated [`Receiver`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = normalize_international_prefix(value.as_ref());
        if !normalized.starts_with("00") || !is_all_digits(&normalized) {
            return Err(ValidationError::InvalidFormat {
                field: Self::FIELD,
                input: value.as_ref().to_owned(),
            });
        }
        Ok(Self(normalized))
    }

    /// Borrow the normalized number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender mobile number or alphanumeric sender name (`sender`).
///
/// Invariant: matches `[A-Za-z0-9]+`; at most 16 characters when all digits,
/// at most 11 characters otherwise. A leading `+` is normalized to `00`.
pub struct Sender(String);

impl Sender {
    /// Query parameter name used by the gateway (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Maximum length of a numeric sender.
    pub const MAX_NUMERIC_LEN: usize = 16;
    /// Maximum length of an alphanumeric sender.
    pub const MAX_ALPHANUMERIC_LEN: usize = 11;

    /// Create a normalized, validated [`Sender`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = normalize_international_prefix(value.as_ref());
        if normalized.is_empty() || !normalized.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidCharacters {
                field: Self::FIELD,
                input: value.as_ref().to_owned(),
            });
        }

        let max = if is_all_digits(&normalized) {
            Self::MAX_NUMERIC_LEN
        } else {
            Self::MAX_ALPHANUMERIC_LEN
        };
        if normalized.len() > max {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max,
                actual: normalized.len(),
            });
        }
        Ok(Self(normalized))
    }

    /// Borrow the normalized sender.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the sender is a phone number rather than a name.
    pub fn is_numeric(&self) -> bool {
        is_all_digits(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`msg`).
///
/// Invariant: at most [`MessageText::MAX_TEXT_SMS_BYTES`] UTF-8 bytes when built
/// for [`MessageType::Text`]. The value is preserved as provided.
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by the gateway (`msg`).
    pub const FIELD: &'static str = "msg";

    /// Byte limit of a single text SMS.
    pub const MAX_TEXT_SMS_BYTES: usize = 160;

    /// Create message text validated against the length rule of `message_type`.
    pub fn new(
        value: impl Into<String>,
        message_type: MessageType,
    ) -> Result<Self, ValidationError> {
        let value = value.into();
        Self::check_length(&value, message_type)?;
        Ok(Self(value))
    }

    /// Check this text against the length rule of `message_type`.
    pub fn validate_for(&self, message_type: MessageType) -> Result<(), ValidationError> {
        Self::check_length(&self.0, message_type)
    }

    fn check_length(value: &str, message_type: MessageType) -> Result<(), ValidationError> {
        if message_type == MessageType::Text && value.len() > Self::MAX_TEXT_SMS_BYTES {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_TEXT_SMS_BYTES,
                actual: value.len(),
            });
        }
        Ok(())
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Message type (`msgtype`).
pub enum MessageType {
    /// Plain text SMS, limited to 160 bytes.
    #[default]
    Text,
    /// Concatenated SMS, billed per segment.
    Overlong,
    /// UTF-8 encoded SMS.
    Utf8Encoded,
}

impl MessageType {
    /// Query parameter name used by the gateway (`msgtype`).
    pub const FIELD: &'static str = "msgtype";

    /// Wire code sent to the gateway.
    pub fn code(self) -> &'static str {
        match self {
            Self::Text => "t",
            Self::Overlong => "c",
            Self::Utf8Encoded => "utf8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Submission plan.
///
/// Only has an effect when a combined-rate contract is booked on the account.
pub enum SubmissionPlan {
    #[default]
    Basic,
    Economy,
    Quality,
}

impl SubmissionPlan {
    /// Gateway plan code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Basic => "OA",
            Self::Economy => "MA",
            Self::Quality => "PM",
        }
    }
}
