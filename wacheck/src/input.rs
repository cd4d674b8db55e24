//! Turns structured input files of unknown internal layout into an ordered
//! list of phone numbers. Numbers are passed through as-is; format
//! validation is the remote endpoint's job.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

/// Field names probed, in order, when extracting a phone number from a JSON
/// record.
const JSON_PHONE_FIELDS: &[&str] = &["phone", "phoneNumber", "number", "phone_number"];

/// Column names probed, in order, for CSV rows. Not the same order as the
/// JSON probe: here `phone_number` outranks `number`.
const CSV_PHONE_COLUMNS: &[&str] = &["phone", "phoneNumber", "phone_number", "number"];

/// Keys that may hold the number collection when the document is a single
/// object.
const COLLECTION_KEYS: &[&str] = &["phoneNumbers", "phones", "numbers"];

#[derive(Debug, Error)]
pub enum InputError {
	#[error("Unsupported file format: {extension}. Only .json and .csv files are supported.")]
	UnsupportedFormat { extension: String },
	#[error("Invalid JSON structure")]
	InvalidStructure,
	#[error("Failed to parse JSON file: {0}")]
	JsonParseFailed(#[source] serde_json::Error),
	#[error("Failed to parse CSV file: {0}")]
	CsvParseFailed(#[source] csv::Error),
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Read an ordered list of phone numbers out of a structured input file.
///
/// The parser is picked by the file extension; anything but `.json` or
/// `.csv` is rejected before the file is opened. Duplicates are kept and an
/// empty list is a valid outcome.
pub fn parse_input_file(path: &Path) -> Result<Vec<String>, InputError> {
	let extension = path
		.extension()
		.map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
		.unwrap_or_default();

	match extension.as_str() {
		".json" => parse_json_file(path),
		".csv" => parse_csv_file(path),
		_ => Err(InputError::UnsupportedFormat { extension }),
	}
}

fn parse_json_file(path: &Path) -> Result<Vec<String>, InputError> {
	let mut text = String::new();
	File::open(path)?.read_to_string(&mut text)?;
	let value: Value = serde_json::from_str(&text).map_err(InputError::JsonParseFailed)?;
	normalize_json(&value)
}

/// Decision tree over the JSON shapes the tool accepts.
///
/// - array led by a string: every element must be a string, taken in order
/// - array led by an object: per record, the first string under a known
///   phone field wins; records without one are dropped
/// - single object: the first of `phoneNumbers`/`phones`/`numbers` holding
///   an array wins and is normalized by the array rules; with no such key,
///   every top-level string value is collected in document key order
/// - anything else is a structural error
pub fn normalize_json(value: &Value) -> Result<Vec<String>, InputError> {
	match value {
		Value::Array(items) => normalize_array(items),
		Value::Object(fields) => normalize_object(fields),
		_ => Err(InputError::InvalidStructure),
	}
}

fn normalize_array(items: &[Value]) -> Result<Vec<String>, InputError> {
	match items.first() {
		None => Ok(vec![]),
		Some(Value::String(_)) => items
			.iter()
			.map(|item| match item {
				Value::String(s) => Ok(s.clone()),
				_ => Err(InputError::InvalidStructure),
			})
			.collect(),
		Some(Value::Object(_)) => Ok(items
			.iter()
			.filter_map(|item| item.as_object().and_then(record_phone_value))
			.collect()),
		Some(_) => Err(InputError::InvalidStructure),
	}
}

fn normalize_object(fields: &Map<String, Value>) -> Result<Vec<String>, InputError> {
	for key in COLLECTION_KEYS {
		if let Some(Value::Array(items)) = fields.get(*key) {
			return normalize_array(items);
		}
	}

	// No recognized collection key: any top-level string value is taken to
	// be a phone number, in document order. This sweeps up unrelated fields
	// (a "version": "1.0" would qualify) and is kept for compatibility.
	Ok(fields
		.values()
		.filter_map(|v| v.as_str().map(str::to_owned))
		.collect())
}

fn record_phone_value(record: &Map<String, Value>) -> Option<String> {
	JSON_PHONE_FIELDS
		.iter()
		.find_map(|field| record.get(*field).and_then(Value::as_str))
		.map(str::to_owned)
}

fn parse_csv_file(path: &Path) -> Result<Vec<String>, InputError> {
	read_csv(File::open(path)?)
}

fn read_csv<R: Read>(reader: R) -> Result<Vec<String>, InputError> {
	let mut reader = csv::Reader::from_reader(reader);
	let headers = reader
		.headers()
		.map_err(InputError::CsvParseFailed)?
		.clone();

	let mut numbers = Vec::new();
	for record in reader.records() {
		let record = record.map_err(InputError::CsvParseFailed)?;
		if let Some(number) = row_phone_value(&headers, &record) {
			numbers.push(number);
		}
	}
	Ok(numbers)
}

/// Pick the value for one row: the first known column holding a non-empty
/// value, else the first column. Whitespace is trimmed, and rows left with
/// nothing usable are skipped.
fn row_phone_value(headers: &csv::StringRecord, record: &csv::StringRecord) -> Option<String> {
	let named = CSV_PHONE_COLUMNS.iter().find_map(|column| {
		let idx = headers.iter().position(|h| h == *column)?;
		match record.get(idx) {
			Some(value) if !value.is_empty() => Some(value),
			_ => None,
		}
	});

	let value = named.or_else(|| record.get(0))?.trim();
	if value.is_empty() {
		None
	} else {
		Some(value.to_owned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn normalize(json: &str) -> Result<Vec<String>, InputError> {
		let value: Value = serde_json::from_str(json).expect("test case JSON must parse");
		normalize_json(&value)
	}

	#[test]
	fn should_normalize_accepted_json_shapes() {
		struct Test {
			json: &'static str,
			expected: &'static [&'static str],
		}
		let cases = vec![
			Test {
				json: r#"["+1234567890", "+14155552671"]"#,
				expected: &["+1234567890", "+14155552671"],
			},
			Test {
				json: r#"[]"#,
				expected: &[],
			},
			Test {
				json: r#"{"phoneNumbers": ["+1111111111"]}"#,
				expected: &["+1111111111"],
			},
			Test {
				json: r#"{"phones": ["+1111111111", "+1222222222"]}"#,
				expected: &["+1111111111", "+1222222222"],
			},
			Test {
				json: r#"{"numbers": ["+1333333333"]}"#,
				expected: &["+1333333333"],
			},
			Test {
				json: r#"{"phoneNumbers": []}"#,
				expected: &[],
			},
			Test {
				json: r#"[{"phone": "+1222222222"}, {"other": "x"}]"#,
				expected: &["+1222222222"],
			},
			// duplicates survive
			Test {
				json: r#"["+1111111111", "+1111111111"]"#,
				expected: &["+1111111111", "+1111111111"],
			},
			// records under a collection key get the same field extraction
			Test {
				json: r#"{"phones": [{"phoneNumber": "+1444444444"}]}"#,
				expected: &["+1444444444"],
			},
			// no collection key: string values in document order
			Test {
				json: r#"{"alice": "+1555555555", "version": "1.0", "count": 2}"#,
				expected: &["+1555555555", "1.0"],
			},
		];
		for case in cases {
			let numbers = normalize(case.json)
				.unwrap_or_else(|e| panic!("{} should normalize, got {}", case.json, e));
			assert_eq!(numbers, case.expected, "json: {}", case.json);
		}
	}

	#[test]
	fn should_respect_json_record_field_priority() {
		struct Test {
			json: &'static str,
			expected: &'static str,
		}
		let cases = vec![
			Test {
				json: r#"[{"number": "+2", "phone": "+1"}]"#,
				expected: "+1",
			},
			Test {
				json: r#"[{"number": "+2", "phoneNumber": "+1"}]"#,
				expected: "+1",
			},
			// in JSON records, `number` outranks `phone_number`
			Test {
				json: r#"[{"phone_number": "+2", "number": "+1"}]"#,
				expected: "+1",
			},
		];
		for case in cases {
			assert_eq!(
				normalize(case.json).unwrap(),
				vec![case.expected.to_owned()],
				"json: {}",
				case.json
			);
		}
	}

	#[test]
	fn should_reject_structurally_invalid_json() {
		let cases = vec![
			r#""+1234567890""#,
			r#"42"#,
			r#"true"#,
			r#"null"#,
			r#"[42]"#,
			r#"[["+1111111111"]]"#,
			// a string-led array must be strings throughout
			r#"["+1111111111", 42]"#,
		];
		for json in cases {
			let err = normalize(json).unwrap_err();
			assert!(
				matches!(err, InputError::InvalidStructure),
				"json {} should be a structural error, got {}",
				json,
				err
			);
		}
	}

	#[test]
	fn first_collection_key_holding_an_array_wins() {
		let numbers =
			normalize(r#"{"phoneNumbers": "not a list", "phones": ["+1111111111"]}"#).unwrap();
		assert_eq!(numbers, vec!["+1111111111".to_owned()]);
	}

	#[test]
	fn records_with_non_string_phone_values_are_dropped() {
		let numbers = normalize(r#"[{"phone": 1222222222}, {"phone": "+1333333333"}]"#).unwrap();
		assert_eq!(numbers, vec!["+1333333333".to_owned()]);
	}

	#[test]
	fn should_normalize_csv_rows() {
		struct Test {
			csv: &'static str,
			expected: &'static [&'static str],
		}
		let cases = vec![
			Test {
				csv: "number\n +1333333333 \n",
				expected: &["+1333333333"],
			},
			Test {
				csv: "phone\n+1111111111\n+1222222222\n",
				expected: &["+1111111111", "+1222222222"],
			},
			// named column wins over first column
			Test {
				csv: "name,phone\nAlice,+1111111111\n",
				expected: &["+1111111111"],
			},
			// in CSV rows, `phone_number` outranks `number`
			Test {
				csv: "number,phone_number\n+2,+1\n",
				expected: &["+1"],
			},
			// no known column: first column wins
			Test {
				csv: "contact,age\n+1444444444,30\n",
				expected: &["+1444444444"],
			},
			// an empty named value falls through to the next candidate
			Test {
				csv: "phone,number\n,+1555555555\n",
				expected: &["+1555555555"],
			},
			// rows with nothing usable are skipped
			Test {
				csv: "phone\n+1111111111\n\"\"\n",
				expected: &["+1111111111"],
			},
			Test {
				csv: "phone\n",
				expected: &[],
			},
		];
		for case in cases {
			let numbers = read_csv(case.csv.as_bytes())
				.unwrap_or_else(|e| panic!("{:?} should parse, got {}", case.csv, e));
			assert_eq!(numbers, case.expected, "csv: {:?}", case.csv);
		}
	}

	#[test]
	fn corrupt_csv_fails_with_a_parse_error() {
		let err = read_csv("a,b\n1,2,3\n".as_bytes()).unwrap_err();
		assert!(
			matches!(err, InputError::CsvParseFailed(_)),
			"got {}",
			err
		);
		assert!(err.to_string().starts_with("Failed to parse CSV file:"));
	}

	#[test]
	fn should_dispatch_files_by_extension() -> anyhow::Result<()> {
		let numbers = parse_input_file(Path::new("src/fixtures/numbers.json"))?;
		assert_eq!(numbers, vec!["+1234567890", "+14155552671"]);

		let numbers = parse_input_file(Path::new("src/fixtures/contacts.json"))?;
		assert_eq!(numbers, vec!["+1222222222"]);

		let numbers = parse_input_file(Path::new("src/fixtures/numbers.csv"))?;
		assert_eq!(numbers, vec!["+1333333333", "+14155552671"]);

		// extension matching is case-insensitive
		let numbers = parse_input_file(Path::new("src/fixtures/upper.JSON"))?;
		assert_eq!(numbers, vec!["+1999999999"]);
		Ok(())
	}

	#[test]
	fn unrecognized_extensions_are_rejected_by_name() {
		let err = parse_input_file(Path::new("src/fixtures/numbers.txt")).unwrap_err();
		assert!(matches!(
			err,
			InputError::UnsupportedFormat { ref extension } if extension == ".txt"
		));
		assert_eq!(
			err.to_string(),
			"Unsupported file format: .txt. Only .json and .csv files are supported."
		);
	}

	#[test]
	fn malformed_json_fails_with_a_parse_error() {
		let err = parse_input_file(Path::new("src/fixtures/malformed.json")).unwrap_err();
		assert!(matches!(err, InputError::JsonParseFailed(_)), "got {}", err);
		assert!(err.to_string().starts_with("Failed to parse JSON file:"));
	}

	#[test]
	fn missing_files_surface_the_io_error() {
		let err = parse_input_file(Path::new("src/fixtures/does-not-exist.json")).unwrap_err();
		assert!(matches!(err, InputError::Io(_)), "got {}", err);
	}
}
