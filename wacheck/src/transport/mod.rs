pub mod webapi;

use thiserror::Error;

pub use webapi::WebApiTransport;

use crate::api_responses::VerificationResult;

/// One lookup against the verification endpoint. The token travels as the
/// `Token` request header.
#[derive(Debug, Clone)]
pub struct LookupRequest {
	pub phone: String,
	pub token: String,
}

impl LookupRequest {
	pub fn new(phone: impl Into<String>, token: impl Into<String>) -> Self {
		Self {
			phone: phone.into(),
			token: token.into(),
		}
	}
}

pub trait Transport {
	fn lookup(&self, req: &LookupRequest) -> Result<VerificationResult, TransportError>;
}

/// Failure classes on the network path. Callers collapse these into a single
/// message for display, but the kinds stay distinguishable.
#[derive(Debug, Error)]
pub enum TransportError {
	/// A response arrived with a non-success status. The message comes from
	/// the response body when it carries one.
	#[error("API error: {status} - {message}")]
	Api { status: u16, message: String },
	/// The request went out but nothing came back.
	#[error("No response received from Wassenger API")]
	NoResponse,
	/// The request could not even be built or sent.
	#[error("Request error: {0}")]
	Request(String),
}
