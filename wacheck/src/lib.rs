use log::debug;
use thiserror::Error;

#[macro_use]
extern crate lazy_static;

pub mod api_responses;
pub mod batch;
pub mod input;
pub mod transport;

pub use api_responses::{BusinessInfo, CountryInfo, VerificationResult};
pub use batch::verify_numbers;
pub use input::{parse_input_file, InputError};
pub use transport::{Transport, TransportError, WebApiTransport};

use transport::LookupRequest;

/// A client for the number verification endpoint.
///
/// The API token is handed over at construction; callers resolve it from
/// wherever it lives (a flag, the environment) before building the client.
#[derive(Debug)]
pub struct NumberClient<T>
where
	T: Transport,
{
	transport: T,
	token: String,
}

impl<T> NumberClient<T>
where
	T: Transport,
{
	#[must_use]
	pub fn new(transport: T, token: impl Into<String>) -> Self {
		Self {
			transport,
			token: token.into(),
		}
	}

	/// Look up a single phone number. Arguments are validated before any
	/// network interaction.
	pub fn verify(&self, phone: &str) -> Result<VerificationResult, VerifyError> {
		if phone.is_empty() {
			return Err(VerifyError::MissingPhoneNumber);
		}
		if self.token.is_empty() {
			return Err(VerifyError::MissingApiToken);
		}

		debug!("verifying phone number: {}", phone);
		let req = LookupRequest::new(phone, self.token.as_str());
		let result = self.transport.lookup(&req)?;
		Ok(result)
	}
}

#[derive(Debug, Error)]
pub enum VerifyError {
	#[error("Phone number is required")]
	MissingPhoneNumber,
	#[error("API token is required")]
	MissingApiToken,
	#[error(transparent)]
	Transport(#[from] TransportError),
}
