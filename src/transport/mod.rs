//! Transport layer: query-string and response wire-format details.

mod latin1;
mod send_sms;

pub use send_sms::{
    ResponseError, build_query, decode_send_sms_text_response, encode_send_sms_query,
};
