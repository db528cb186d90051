use chrono::{DateTime, FixedOffset, TimeZone};

use crate::domain::response::SubmissionReceipt;
use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, MessageType, Receiver, Sender, SubmissionPlan};

#[derive(Debug, Clone, Default)]
/// Outbound SMS with its gateway options and, after a successful submission,
/// the gateway's receipt.
///
/// Validating setters reject bad input immediately, so a value that was set is
/// always well-formed. All setters return `&mut Self` for chaining.
pub struct Message {
    receiver: Option<Receiver>,
    sender: Option<Sender>,
    text: Option<MessageText>,
    message_type: MessageType,
    submission_plan: SubmissionPlan,
    account_id: Option<String>,
    account_password: Option<String>,
    delayed_submission: bool,
    submission_date: DateTime<FixedOffset>,
    debug_mode: bool,
    receipt: Option<SubmissionReceipt>,
}

impl Message {
    /// Create a message with default options (text SMS, basic plan, immediate
    /// delivery, debug mode off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized receiver number, if set.
    pub fn receiver(&self) -> Option<&str> {
        self.receiver.as_ref().map(Receiver::as_str)
    }

    /// Set the receiver number. See [`Receiver::new`] for the accepted format.
    pub fn set_receiver(&mut self, value: impl AsRef<str>) -> Result<&mut Self, ValidationError> {
        self.receiver = Some(Receiver::new(value)?);
        Ok(self)
    }

    /// Normalized sender number or name, if set.
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_ref().map(Sender::as_str)
    }

    /// Set the sender number or name. See [`Sender::new`] for the accepted format.
    pub fn set_sender(&mut self, value: impl AsRef<str>) -> Result<&mut Self, ValidationError> {
        self.sender = Some(Sender::new(value)?);
        Ok(self)
    }

    /// Message text as provided, if set.
    pub fn message(&self) -> Option<&str> {
        self.text.as_ref().map(MessageText::as_str)
    }

    /// Set the message text, validated against the current message type.
    ///
    /// Set the message type first when sending more than 160 bytes.
    pub fn set_message(&mut self, text: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.text = Some(MessageText::new(text, self.message_type)?);
        Ok(self)
    }

    /// Current message type; defaults to [`MessageType::Text`].
    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn set_message_type(&mut self, message_type: MessageType) -> &mut Self {
        self.message_type = message_type;
        self
    }

    /// Current submission plan; defaults to [`SubmissionPlan::Basic`].
    pub fn submission_plan(&self) -> SubmissionPlan {
        self.submission_plan
    }

    pub fn set_submission_plan(&mut self, plan: SubmissionPlan) -> &mut Self {
        self.submission_plan = plan;
        self
    }

    /// Gateway account id, if set.
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn set_account_id(&mut self, account_id: impl Into<String>) -> &mut Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Gateway account password, if set.
    pub fn account_password(&self) -> Option<&str> {
        self.account_password.as_deref()
    }

    pub fn set_account_password(&mut self, password: impl Into<String>) -> &mut Self {
        self.account_password = Some(password.into());
        self
    }

    /// Whether delivery is scheduled for [`Message::submission_date`].
    pub fn has_delayed_submission(&self) -> bool {
        self.delayed_submission
    }

    /// When enabled, the gateway delivers the message at [`Message::submission_date`].
    pub fn set_delayed_submission(&mut self, delayed: bool) -> &mut Self {
        self.delayed_submission = delayed;
        self
    }

    /// Planned delivery time; the Unix epoch until set.
    pub fn submission_date(&self) -> DateTime<FixedOffset> {
        self.submission_date
    }

    /// Set the planned delivery time. The wall-clock time is sent in the offset
    /// of the given date.
    pub fn set_submission_date<Tz: TimeZone>(&mut self, date: DateTime<Tz>) -> &mut Self {
        self.submission_date = date.fixed_offset();
        self
    }

    /// Whether the gateway is asked to validate without sending.
    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// In debug mode the gateway validates the request without sending the SMS.
    pub fn set_debug_mode(&mut self, debug: bool) -> &mut Self {
        self.debug_mode = debug;
        self
    }

    /// Gateway message id of the last successful submission.
    pub fn message_id(&self) -> Option<i64> {
        self.receipt.map(|it| it.message_id)
    }

    /// Number of SMS sent by the last successful submission.
    pub fn message_count(&self) -> Option<i64> {
        self.receipt.map(|it| it.message_count)
    }

    /// Receipt of the last successful submission.
    pub fn receipt(&self) -> Option<SubmissionReceipt> {
        self.receipt
    }

    pub(crate) fn receiver_value(&self) -> Option<&Receiver> {
        self.receiver.as_ref()
    }

    pub(crate) fn sender_value(&self) -> Option<&Sender> {
        self.sender.as_ref()
    }

    pub(crate) fn text_value(&self) -> Option<&MessageText> {
        self.text.as_ref()
    }

    /// Check the fields that can only be judged together, right before sending.
    pub(crate) fn check_submittable(&self) -> Result<(), ValidationError> {
        if self.receiver.is_none() {
            return Err(ValidationError::Missing {
                field: Receiver::FIELD,
            });
        }
        let text = self.text.as_ref().ok_or(ValidationError::Missing {
            field: MessageText::FIELD,
        })?;
        // the type may have been switched back to text after a long message was set
        text.validate_for(self.message_type)
    }

    pub(crate) fn clear_receipt(&mut self) {
        self.receipt = None;
    }

    pub(crate) fn record_receipt(&mut self, receipt: SubmissionReceipt) {
        self.receipt = Some(receipt);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone, Utc};

    use super::*;

    #[test]
    fn defaults() {
        let message = Message::new();
        assert_eq!(message.message_type(), MessageType::Text);
        assert_eq!(message.submission_plan(), SubmissionPlan::Basic);
        assert!(!message.has_delayed_submission());
        assert!(!message.is_debug_mode());
        assert_eq!(message.submission_date().timestamp(), 0);
        assert_eq!(message.receiver(), None);
        assert_eq!(message.message_id(), None);
        assert_eq!(message.message_count(), None);
    }

    #[test]
    fn setters_chain_and_getters_return_normalized_values() {
        let date = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 0)
            .unwrap();

        let mut message = Message::new();
        message
            .set_account_id("1627101")
            .set_account_password("secret")
            .set_debug_mode(true)
            .set_delayed_submission(true)
            .set_submission_date(date)
            .set_submission_plan(SubmissionPlan::Quality)
            .set_message_type(MessageType::Overlong)
            .set_receiver("+4915112345678")
            .unwrap()
            .set_sender("+4915112345678")
            .unwrap()
            .set_message("Curabitur blandit tempus porttitor.")
            .unwrap();

        assert_eq!(message.account_id(), Some("1627101"));
        assert_eq!(message.account_password(), Some("secret"));
        assert!(message.is_debug_mode());
        assert!(message.has_delayed_submission());
        assert_eq!(message.submission_date(), date);
        assert_eq!(message.submission_plan(), SubmissionPlan::Quality);
        assert_eq!(message.message_type(), MessageType::Overlong);
        assert_eq!(message.receiver(), Some("004915112345678"));
        assert_eq!(message.sender(), Some("004915112345678"));
        assert_eq!(message.message(), Some("Curabitur blandit tempus porttitor."));
    }

    #[test]
    fn rejected_value_leaves_previous_value_in_place() {
        let mut message = Message::new();
        message.set_sender("Sendername").unwrap();
        assert!(message.set_sender("äöü").is_err());
        assert_eq!(message.sender(), Some("Sendername"));
    }

    #[test]
    fn message_length_depends_on_type_at_assignment() {
        let mut message = Message::new();
        assert!(message.set_message("a".repeat(160)).is_ok());
        assert!(message.set_message("a".repeat(161)).is_err());

        message.set_message_type(MessageType::Overlong);
        assert!(message.set_message("a".repeat(161)).is_ok());
    }

    #[test]
    fn submission_date_keeps_offset_of_input() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut message = Message::new();
        message.set_submission_date(utc);
        assert_eq!(message.submission_date().offset().local_minus_utc(), 0);
        assert_eq!(message.submission_date(), utc);
    }

    #[test]
    fn check_submittable_requires_receiver_and_text() {
        let mut message = Message::new();
        assert_eq!(
            message.check_submittable(),
            Err(ValidationError::Missing { field: "receiver" })
        );

        message.set_receiver("0049151").unwrap();
        assert_eq!(
            message.check_submittable(),
            Err(ValidationError::Missing { field: "msg" })
        );

        message.set_message("hi").unwrap();
        assert_eq!(message.check_submittable(), Ok(()));
    }

    #[test]
    fn check_submittable_rejects_long_text_after_switching_back_to_text() {
        let mut message = Message::new();
        message
            .set_receiver("0049151")
            .unwrap()
            .set_message_type(MessageType::Overlong)
            .set_message("a".repeat(200))
            .unwrap();
        message.set_message_type(MessageType::Text);

        assert!(matches!(
            message.check_submittable(),
            Err(ValidationError::TooLong {
                max: 160,
                actual: 200,
                ..
            })
        ));
    }
}
