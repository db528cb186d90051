//! Client layer: performs the HTTP call and maps transport ↔ domain.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{Message, SubmissionReceipt, ValidationError};
use crate::transport::ResponseError;

const DEFAULT_ENDPOINT: &str = "https://gate1.goyyamobile.com/sms/sendsms.asp";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_USER_AGENT: &str = concat!("goyyamobile-rust/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;
// used when the response does not declare a charset
const GATEWAY_CHARSET: &str = "ISO-8859-1";

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        // the query carries the account password, so errors must not echo the URL
        let response = self
            .client
            .get(url)
            .send()
            .map_err(reqwest::Error::without_url)?;
        let status = response.status().as_u16();
        let body = response
            .text_with_charset(GATEWAY_CHARSET)
            .map_err(reqwest::Error::without_url)?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Coarse classification of [`GoyyaError`].
pub enum ErrorKind {
    /// A message field was rejected before any request was made.
    InvalidInput,
    /// The request did not complete with a 2xx response.
    Network,
    /// The gateway answered, but reported a failure or an unparseable body.
    Gateway,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned when configuring a [`GoyyaClient`] or submitting a [`Message`].
pub enum GoyyaError {
    /// One of the message fields was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The gateway answered with a body that does not start with `OK`.
    #[error("gateway rejected the request: {body}")]
    Gateway { body: String },

    /// The gateway answered `OK` but the message id or count is missing.
    #[error("unexpected response body: {body}")]
    UnexpectedBody { body: String },
}

impl GoyyaError {
    /// Classify this error as invalid input, network or gateway failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::InvalidInput,
            Self::Transport(_) | Self::HttpStatus { .. } => ErrorKind::Network,
            Self::Gateway { .. } | Self::UnexpectedBody { .. } => ErrorKind::Gateway,
        }
    }
}

impl From<ResponseError> for GoyyaError {
    fn from(value: ResponseError) -> Self {
        match value {
            ResponseError::NotOk { body } => Self::Gateway { body },
            ResponseError::UnexpectedBody { body } => Self::UnexpectedBody { body },
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`GoyyaClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct GoyyaClientBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for GoyyaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GoyyaClientBuilder {
    /// Create a builder with the default endpoint, a 10 second timeout and the
    /// crate's user-agent.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the `sendsms.asp` endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a [`GoyyaClient`].
    pub fn build(self) -> Result<GoyyaClient, GoyyaError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|err| GoyyaError::Transport(Box::new(err)))?;

        Ok(GoyyaClient {
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Blocking Goyya Mobile client.
///
/// Sends each [`Message`] as a single `GET` request to
/// `https://gate1.goyyamobile.com/sms/sendsms.asp` unless configured otherwise.
/// Cloning is cheap and clones share the underlying connection pool.
pub struct GoyyaClient {
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl GoyyaClient {
    /// Create a client with the default settings.
    pub fn new() -> Result<Self, GoyyaError> {
        GoyyaClientBuilder::new().build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> GoyyaClientBuilder {
        GoyyaClientBuilder::new()
    }

    /// Submit `message` and record the gateway's receipt on it.
    ///
    /// Any receipt from an earlier submission is cleared first. Nothing is
    /// retried.
    ///
    /// Errors:
    /// - [`GoyyaError::Validation`] when the receiver or text is missing, or the
    ///   text is too long for the current message type (no request is made),
    /// - [`GoyyaError::Transport`] / [`GoyyaError::HttpStatus`] for network failures,
    /// - [`GoyyaError::Gateway`] / [`GoyyaError::UnexpectedBody`] when the
    ///   gateway does not confirm the submission.
    pub fn submit(&self, message: &mut Message) -> Result<SubmissionReceipt, GoyyaError> {
        message.clear_receipt();
        message.check_submittable()?;

        let params = crate::transport::encode_send_sms_query(message);
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}{separator}{}",
            self.endpoint,
            crate::transport::build_query(&params)
        );

        debug!(
            receiver = message.receiver(),
            msgtype = message.message_type().code(),
            debug_mode = message.is_debug_mode(),
            "submitting message"
        );

        let response = self.http.get(&url).map_err(|err| {
            warn!(error = %err, "gateway request failed");
            GoyyaError::Transport(err)
        })?;

        if !(200..=299).contains(&response.status) {
            warn!(status = response.status, "gateway returned unexpected HTTP status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(GoyyaError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let receipt =
            crate::transport::decode_send_sms_text_response(&response.body).map_err(|err| {
                warn!(error = %err, "gateway did not confirm the submission");
                GoyyaError::from(err)
            })?;

        debug!(
            message_id = receipt.message_id,
            message_count = receipt.message_count,
            "message accepted"
        );
        message.record_receipt(receipt);
        Ok(receipt)
    }
}

impl Message {
    /// Submit through a client with default settings.
    ///
    /// See [`GoyyaClient::submit`].
    pub fn submit(&mut self) -> Result<SubmissionReceipt, GoyyaError> {
        GoyyaClient::new()?.submit(self)
    }

    /// Submit through an already configured `client`.
    pub fn submit_with(&mut self, client: &GoyyaClient) -> Result<SubmissionReceipt, GoyyaError> {
        client.submit(self)
    }
}
