use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum UserError {
	#[error("No phone numbers provided")]
	NoPhoneNumbers,
}
