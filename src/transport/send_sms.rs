use url::form_urlencoded::byte_serialize;

use crate::domain::{Message, MessageText, MessageType, Receiver, Sender, SubmissionReceipt};
use crate::transport::latin1;

const ACCOUNT_ID_FIELD: &str = "id";
const ACCOUNT_PASSWORD_FIELD: &str = "pw";
const TIME_FIELD: &str = "time";
const DELIVERY_TIME_FORMAT: &str = "%H%M%d%m%Y";
const OK_PREFIX: &str = "OK";

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("gateway rejected the request: {body}")]
    NotOk { body: String },

    #[error("unexpected response body: {body}")]
    UnexpectedBody { body: String },
}

/// Delivery time as expected by the gateway: `0` for immediate delivery, or
/// `HHmmddMMYYYY` in the offset of the submission date.
pub fn format_delivery_time(message: &Message) -> String {
    if !message.has_delayed_submission() {
        return "0".to_owned();
    }
    message
        .submission_date()
        .format(DELIVERY_TIME_FORMAT)
        .to_string()
}

/// Build the ordered query parameters for `sendsms.asp`.
///
/// Values are raw bytes because the message text is sent as ISO-8859-1.
/// Unset optional fields are left out.
pub fn encode_send_sms_query(message: &Message) -> Vec<(&'static str, Vec<u8>)> {
    let mut params = Vec::<(&'static str, Vec<u8>)>::new();

    if let Some(receiver) = message.receiver_value() {
        params.push((Receiver::FIELD, receiver.as_str().into()));
    }
    if let Some(sender) = message.sender_value() {
        params.push((Sender::FIELD, sender.as_str().into()));
    }
    if let Some(text) = message.text_value() {
        params.push((MessageText::FIELD, latin1::encode_lossy(text.as_str())));
    }
    if let Some(account_id) = message.account_id() {
        params.push((ACCOUNT_ID_FIELD, account_id.into()));
    }
    if let Some(password) = message.account_password() {
        params.push((ACCOUNT_PASSWORD_FIELD, password.into()));
    }
    params.push((TIME_FIELD, format_delivery_time(message).into_bytes()));
    params.push((MessageType::FIELD, message.message_type().code().into()));
    params.push(("getId", b"1".to_vec()));
    params.push(("countMsg", b"1".to_vec()));
    let test = if message.is_debug_mode() { "1" } else { "0" };
    params.push(("test", test.into()));

    params
}

/// Form-urlencode `params` into a query string (without the leading `?`).
pub fn build_query(params: &[(&str, Vec<u8>)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            let key = byte_serialize(key.as_bytes()).collect::<String>();
            let value = byte_serialize(value).collect::<String>();
            format!("{key}={value}")
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse the gateway's text response, e.g. `OK (12345,1)`.
pub fn decode_send_sms_text_response(body: &str) -> Result<SubmissionReceipt, ResponseError> {
    if !body.starts_with(OK_PREFIX) {
        return Err(ResponseError::NotOk {
            body: body.to_owned(),
        });
    }

    // strips the characters `O`, `K` and space, not just the literal prefix
    let rest = body
        .trim_start_matches(['O', 'K', ' '])
        .trim_matches([' ', '(', ')']);
    let parts = rest.split(',').collect::<Vec<_>>();
    if parts.len() < 2 {
        return Err(ResponseError::UnexpectedBody {
            body: rest.to_owned(),
        });
    }

    Ok(SubmissionReceipt {
        message_id: parse_int_lossy(parts[0]),
        message_count: parse_int_lossy(parts[1]),
    })
}

/// Parse the leading integer of `value` after trimming whitespace.
///
/// Returns 0 when there are no leading digits and saturates on overflow.
fn parse_int_lossy(value: &str) -> i64 {
    let value = value.trim();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let mut result: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        result = result.saturating_mul(10);
        result = if negative {
            result.saturating_sub(digit)
        } else {
            result.saturating_add(digit)
        };
    }
    result
}
