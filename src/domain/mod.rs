//! Domain layer: strong types with validation and invariants (no I/O).

mod message;
mod response;
mod validation;
mod value;

pub use message::Message;
pub use response::SubmissionReceipt;
pub use validation::ValidationError;
pub use value::{MessageText, MessageType, Receiver, Sender, SubmissionPlan};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_receiver_equals_zero_zero_receiver() {
        let digits = "4915112345678";
        let mut with_plus = Message::new();
        with_plus.set_receiver(format!("+{digits}")).unwrap();
        let mut with_zeros = Message::new();
        with_zeros.set_receiver(format!("00{digits}")).unwrap();
        assert_eq!(with_plus.receiver(), with_zeros.receiver());
        assert_eq!(with_plus.receiver(), Some("004915112345678"));
    }

    #[test]
    fn invalid_receiver_is_rejected() {
        assert!(matches!(
            Message::new().set_receiver("this-is-invalid"),
            Err(ValidationError::InvalidFormat {
                field: Receiver::FIELD,
                ..
            })
        ));
    }

    #[test]
    fn sender_boundaries() {
        let mut message = Message::new();
        assert!(message.set_sender("1".repeat(16)).is_ok());
        assert!(message.set_sender("a".repeat(11)).is_ok());
        assert!(message.set_sender("1".repeat(17)).is_err());
        assert!(message.set_sender("a".repeat(12)).is_err());
        assert!(message.set_sender("äöü").is_err());
    }

    #[test]
    fn sender_name_is_stored_unchanged() {
        let mut message = Message::new();
        message.set_sender("Sendername").unwrap();
        assert_eq!(message.sender(), Some("Sendername"));
    }
}
