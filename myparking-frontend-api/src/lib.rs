use myparking_boundary::ValidationErrors;
use thiserror::Error;

mod client;
mod session;
mod transport;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use self::{client::*, session::*, transport::*};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("unable to decode response: {0}")]
    Decode(String),

    #[error("the given data was invalid")]
    Validation(ValidationErrors),

    #[error("unauthorized")]
    Unauthorized,

    #[error("request failed with status {status}{}", message_suffix(.message))]
    Api { status: u16, message: String },
}

impl Error {
    /// Field errors of a rejected request, if any.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

fn message_suffix(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
