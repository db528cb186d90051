//! Typed Rust client for the Goyya Mobile SMS gateway.
//!
//! The crate is split into a domain layer of validated types, a transport layer
//! for the gateway's wire-format quirks, and a small client layer that performs
//! the blocking HTTP call.
//!
//! ```rust,no_run
//! use goyyamobile::{Message, MessageType};
//!
//! fn main() -> Result<(), goyyamobile::GoyyaError> {
//!     let mut message = Message::new();
//!     message
//!         .set_account_id("1234567")
//!         .set_account_password("secret")
//!         .set_message_type(MessageType::Overlong)
//!         .set_receiver("+4915112345678")?
//!         .set_sender("Sendername")?
//!         .set_message("hello")?;
//!     message.submit()?;
//!     println!("id={:?} count={:?}", message.message_id(), message.message_count());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ErrorKind, GoyyaClient, GoyyaClientBuilder, GoyyaError};
pub use domain::{
    Message, MessageText, MessageType, Receiver, Sender, SubmissionPlan, SubmissionReceipt,
    ValidationError,
};
