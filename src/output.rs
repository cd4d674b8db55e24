use std::fs;
use std::path::Path;

use colored::Colorize;
use wacheck::{BusinessInfo, VerificationResult};

/// Render results as the human-readable console report, one block per
/// number.
pub(crate) fn render_console(results: &[VerificationResult]) -> String {
	results.iter().map(render_result).collect()
}

fn render_result(result: &VerificationResult) -> String {
	let mut out = String::new();
	let symbol = if result.exists {
		"✓".green()
	} else {
		"✗".red()
	};
	out.push_str(&format!("\n{} Phone: {}\n", symbol, result.phone.bold()));

	let presence = if result.exists {
		"Exists".green()
	} else {
		"Does not exist".red()
	};
	out.push_str(&format!("  WhatsApp: {}\n", presence));

	if result.exists {
		if let Some(wid) = &result.wid {
			out.push_str(&format!("  WhatsApp ID: {}\n", wid));
		}
		let business = if result.is_business() {
			"Yes".yellow().to_string()
		} else {
			"No".to_owned()
		};
		out.push_str(&format!("  Business: {}\n", business));

		if result.is_business() {
			if let Some(info) = &result.business_info {
				out.push_str("  Business Info:\n");
				out.push_str(&format!(
					"    Name: {}\n",
					info.name.as_deref().unwrap_or("Unknown")
				));
				out.push_str(&format!("    Type: {}\n", business_type(info)));
			}
		}

		if let Some(country) = &result.country {
			let label = format!("{} ({})", country.name, country.code);
			match &country.flag {
				Some(flag) => out.push_str(&format!("  Country: {} {}\n", flag, label)),
				None => out.push_str(&format!("  Country: {}\n", label)),
			}
		}
	}

	if let Some(error) = &result.error {
		out.push_str(&format!("  Error: {}\n", error.red()));
	}

	out
}

fn business_type(info: &BusinessInfo) -> &'static str {
	if info.is_api {
		"API"
	} else if info.is_smb {
		"SMB"
	} else {
		"Regular"
	}
}

pub(crate) fn render_json(results: &[VerificationResult]) -> serde_json::Result<String> {
	serde_json::to_string_pretty(results)
}

pub(crate) fn save_results(path: &Path, results: &[VerificationResult]) -> anyhow::Result<()> {
	fs::write(path, render_json(results)?)?;
	Ok(())
}
