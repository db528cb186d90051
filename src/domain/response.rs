#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Result of a successful submission as reported by the gateway.
pub struct SubmissionReceipt {
    /// Gateway-assigned message id.
    pub message_id: i64,
    /// Number of SMS segments actually sent.
    pub message_count: i64,
}
