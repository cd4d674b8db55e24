use log::warn;

use crate::api_responses::VerificationResult;
use crate::transport::Transport;
use crate::NumberClient;

/// Verify a batch of numbers, one lookup at a time, in input order.
///
/// Each lookup fully completes before the next begins. Failures never abort
/// the batch: an entry whose lookup fails yields a record with
/// `exists: false` and the failure message, and processing moves on. The
/// output always holds one result per input entry, in the same order.
pub fn verify_numbers<T>(client: &NumberClient<T>, numbers: &[String]) -> Vec<VerificationResult>
where
	T: Transport,
{
	let mut results = Vec::with_capacity(numbers.len());
	for number in numbers {
		match client.verify(number) {
			Ok(result) => results.push(result),
			Err(err) => {
				warn!("verification failed for {}: {}", number, err);
				results.push(VerificationResult::failed(number.clone(), err.to_string()));
			}
		}
	}
	results
}
