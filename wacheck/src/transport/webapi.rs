use log::{debug, trace};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};

use super::{LookupRequest, Transport, TransportError};
use crate::api_responses::VerificationResult;

lazy_static! {
	static ref DEFAULT_API_URL: Url = "https://api.wassenger.com/v1/numbers/exists"
		.parse::<Url>()
		.unwrap();
}

/// `Transport` implementation that talks to the live Wassenger web API.
#[derive(Debug)]
pub struct WebApiTransport {
	client: Client,
	api_url: Url,
}

impl WebApiTransport {
	pub fn new() -> Self {
		Self::with_api_url(DEFAULT_API_URL.clone())
	}

	/// Point the transport at a different endpoint, eg. a staging
	/// deployment or a local stub.
	pub fn with_api_url(api_url: Url) -> Self {
		Self {
			client: Client::new(),
			api_url,
		}
	}
}

impl Default for WebApiTransport {
	fn default() -> Self {
		Self::new()
	}
}

impl Transport for WebApiTransport {
	fn lookup(&self, req: &LookupRequest) -> Result<VerificationResult, TransportError> {
		let mut url = self.api_url.clone();
		url.query_pairs_mut().append_pair("phone", &req.phone);
		debug!("HTTP Request: GET {}", url);

		let resp = self
			.client
			.get(url)
			.header(CONTENT_TYPE, "application/json")
			.header("Token", &req.token)
			.send()
			.map_err(classify_send_error)?;

		let status = resp.status();
		debug!("Response HTTP status: {}", status);
		if !status.is_success() {
			return Err(api_error(status, resp));
		}

		let bytes = resp
			.bytes()
			.map_err(|e| TransportError::Request(e.to_string()))?;
		trace!("Response body: {:?}", bytes);
		serde_json::from_slice(&bytes).map_err(|e| TransportError::Request(e.to_string()))
	}
}

/// A send error that never produced a response counts as no-response; an
/// error raised while still building the request never left the process.
fn classify_send_error(err: reqwest::Error) -> TransportError {
	if err.is_builder() {
		TransportError::Request(err.to_string())
	} else {
		TransportError::NoResponse
	}
}

fn api_error(status: StatusCode, resp: Response) -> TransportError {
	let message = resp
		.json::<serde_json::Value>()
		.ok()
		.and_then(|body| {
			body.get("message")
				.and_then(|m| m.as_str())
				.map(str::to_owned)
		})
		.unwrap_or_else(|| "Unknown error".to_owned());
	TransportError::Api {
		status: status.as_u16(),
		message,
	}
}
