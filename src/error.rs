use wasm_bindgen::JsValue;

/// Everything that can go wrong while decorating a field.
///
/// Only [`Error::DataUnavailable`] is expected during normal operation.
/// It makes the decorator lock the field instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// The candidate fetch failed or its payload could not be used.
	#[error("no candidate data available: {0}")]
	DataUnavailable(String),

	/// There is no `window` or no `document` (not running in a browser page).
	#[error("no document to operate on")]
	NoDocument,

	/// No element with this id exists in the document.
	#[error("no element with id {0:?}")]
	FieldNotFound(String),

	/// The element with this id exists, but isn't an `<input>`.
	#[error("element {0:?} is not an <input>")]
	NotAnInput(String),

	/// A DOM call threw.
	#[error("DOM operation failed: {0}")]
	Dom(String),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Self::Dom(format!("{:?}", value))
	}
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
