use serde::{Deserialize, Serialize};

/// Outcome of a single number lookup, as returned by the `numbers/exists`
/// endpoint. Exactly one of "verified data" or `error` is meaningful:
/// synthetic failure records always carry `exists: false` and a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
	pub phone: String,
	#[serde(default)]
	pub exists: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub wid: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_business: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub business_info: Option<BusinessInfo>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub country: Option<CountryInfo>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl VerificationResult {
	/// Synthetic record for an entry whose lookup failed.
	pub fn failed(phone: impl Into<String>, error: impl Into<String>) -> Self {
		Self {
			phone: phone.into(),
			exists: false,
			wid: None,
			is_business: None,
			business_info: None,
			country: None,
			error: Some(error.into()),
		}
	}

	pub fn is_business(&self) -> bool {
		self.is_business.unwrap_or(false)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default)]
	pub is_api: bool,
	#[serde(default)]
	pub is_smb: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
	pub code: String,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub flag: Option<String>,
}
