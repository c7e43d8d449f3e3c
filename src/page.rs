//! Wiring fields to their candidate sources when the page loads.

use crate::{candidates, config::Config, decorator, decorator::Decoration};
use hashbrown::HashMap;
use std::cell::RefCell;
use tracing::{error, info, instrument};
use wasm_bindgen::prelude::wasm_bindgen;

thread_local! {
	/// Live decorations by field id.
	///
	/// Entries are only replaced, never removed by the page itself, so popups stay wired for the whole page load.
	static DECORATIONS: RefCell<HashMap<String, Decoration>> = RefCell::new(HashMap::new());
}

/// A text input, the path its candidates are `GET` from and the record field holding each candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSource<'a> {
	pub field_id: &'a str,
	pub path: &'a str,
	pub record_field: &'a str,
}

/// The fields of the lending form.
pub const LENDING_FORM: [FieldSource<'static>; 2] = [
	FieldSource { field_id: "lend_book", path: "book", record_field: "Title" },
	FieldSource { field_id: "lend_borrower", path: "borrower", record_field: "Name" },
];

/// Fetches the candidates of `source` and decorates its field once they arrive.
///
/// The resulting [`Decoration`] is kept alive in a per-field registry,
/// replacing (and so deactivating) any earlier decoration of the same field id.
/// Problems with the page structure are logged, not returned, since nobody awaits this at page load.
#[instrument(skip(config))]
pub async fn decorate(source: FieldSource<'_>, config: &Config) {
	let candidates = candidates::fetch(source.path, source.record_field).await;
	match decorator::attach(source.field_id, candidates, config) {
		Ok(decoration) => {
			info!("Decorated {:?} as {:?}.", source.field_id, decoration.presentation());
			register(source.field_id, decoration);
		}
		Err(error) => error!("Could not decorate {:?}: {}", source.field_id, error),
	}
}

/// Keeps `decoration` alive until the field is decorated again or [`release`]d.
pub fn register(field_id: &str, decoration: Decoration) {
	let previous = DECORATIONS.with(|decorations| decorations.borrow_mut().insert(field_id.to_owned(), decoration));
	// Dropped outside of the registry borrow.
	drop(previous);
}

/// Removes the registered decoration of `field_id`, if any.
///
/// Dropping the returned value deactivates a popup and removes its listeners.
/// The DOM changes of locked and dropdown fields are permanent.
pub fn release(field_id: &str) -> Option<Decoration> {
	DECORATIONS.with(|decorations| decorations.borrow_mut().remove(field_id))
}

/// Decorates the book and borrower inputs of the lending form, each from its own endpoint.
///
/// Both fetches start immediately and resolve independently.
#[wasm_bindgen]
pub fn enhance_lending_form() {
	install_console_log();
	for source in LENDING_FORM {
		wasm_bindgen_futures::spawn_local(async move { decorate(source, &Config::default()).await });
	}
}

#[cfg(feature = "console-log")]
fn install_console_log() {
	if tracing_wasm::try_set_as_global_default().is_err() {
		tracing::debug!("A global tracing subscriber is already set.");
	}
}

#[cfg(not(feature = "console-log"))]
fn install_console_log() {}
