//! Loading candidate strings from the lending server.

use crate::error::{Error, Result};
use js_sys::Promise;
use serde_json::Value;
use tracing::{instrument, trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Extracts the string `field` of each record in a JSON array of objects, sorted ascending.
///
/// Sorting compares UTF-16 code units, like `Array.prototype.sort` in the page's scripts,
/// so text outside the Basic Multilingual Plane orders before U+E000 to U+FFFF.
///
/// A payload that isn't a JSON array is [`Error::DataUnavailable`].
/// Records that aren't objects or lack a string `field` are skipped with a warning.
///
/// ```
/// use lending_autocomplete::candidates::extract;
///
/// let books = r#"[{"Title": "Emma", "Id": "2"}, {"Title": "Dune", "Id": "1"}]"#;
/// assert_eq!(extract(books, "Title").unwrap(), ["Dune", "Emma"]);
/// ```
#[instrument(skip(payload), fields(payload_len = payload.len()))]
pub fn extract(payload: &str, field: &str) -> Result<Vec<String>> {
	let records = match serde_json::from_str::<Value>(payload) {
		Ok(Value::Array(records)) => records,
		Ok(other) => return Err(Error::DataUnavailable(format!("expected a JSON array but found {}", kind(&other)))),
		Err(error) => return Err(Error::DataUnavailable(format!("unparseable payload: {}", error))),
	};

	let record_count = records.len();
	let mut extracted: Vec<String> = records
		.into_iter()
		.enumerate()
		.filter_map(|(i, record)| match record {
			Value::Object(mut record) => match record.remove(field) {
				Some(Value::String(value)) => Some(value),
				Some(other) => {
					warn!("Record {} has a {} instead of a string in {:?}; skipping it.", i, kind(&other), field);
					None
				}
				None => {
					warn!("Record {} has no field {:?}; skipping it.", i, field);
					None
				}
			},
			other => {
				warn!("Record {} is a {} instead of an object; skipping it.", i, kind(&other));
				None
			}
		})
		.collect();
	extracted.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));

	trace!("Extracted {} of {} record(s).", extracted.len(), record_count);
	Ok(extracted)
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// `GET`s `path` relative to the current page and returns the response body.
///
/// Network failures and non-success statuses are [`Error::DataUnavailable`].
/// There is no retry and no timeout, so this may never resolve.
#[instrument]
pub async fn fetch_text(path: &str) -> Result<String> {
	let window = web_sys::window().ok_or(Error::NoDocument)?;
	let request: Promise = window.fetch_with_str(path);
	let response = JsFuture::from(request).await.map_err(|error| Error::DataUnavailable(format!("request failed: {:?}", error)))?;
	let response: web_sys::Response = response.dyn_into()?;
	if !response.ok() {
		return Err(Error::DataUnavailable(format!("{} responded with status {}", path, response.status())));
	}

	let body: Promise = response.text()?;
	let text = JsFuture::from(body).await.map_err(|error| Error::DataUnavailable(format!("unreadable body: {:?}", error)))?;
	text.as_string().ok_or_else(|| Error::DataUnavailable("response body is not text".to_owned()))
}

/// Fetches `path` and [`extract`]s `field` from the records it returns.
pub async fn fetch(path: &str, field: &str) -> Result<Vec<String>> {
	let payload = fetch_text(path).await?;
	extract(&payload, field)
}
