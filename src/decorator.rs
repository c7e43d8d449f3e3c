//! Choosing and applying a presentation for a field, once its candidates are known.

use crate::{
	config::Config,
	error::{Error, Result},
	popup::PopupListController,
};
use tracing::{instrument, trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

/// How a field is presented, depending on how many candidates it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
	/// Disabled, with a placeholder explaining why.
	Locked,
	/// Replaced by a native `<select>` with one option per candidate.
	Dropdown,
	/// Kept as text input, with a [`PopupListController`] attached.
	Popup,
}

impl Presentation {
	/// Picks the presentation for `candidate_count` candidates, [`None`] meaning no data could be loaded.
	///
	/// ```
	/// use lending_autocomplete::{Config, Presentation};
	///
	/// let config = Config::default();
	/// assert_eq!(Presentation::choose(None, &config), Presentation::Locked);
	/// assert_eq!(Presentation::choose(Some(0), &config), Presentation::Locked);
	/// assert_eq!(Presentation::choose(Some(9), &config), Presentation::Dropdown);
	/// assert_eq!(Presentation::choose(Some(10), &config), Presentation::Popup);
	/// ```
	#[must_use]
	pub fn choose(candidate_count: Option<usize>, config: &Config) -> Self {
		match candidate_count {
			None | Some(0) => Self::Locked,
			Some(count) if count < config.dropdown_threshold => Self::Dropdown,
			Some(_) => Self::Popup,
		}
	}
}

/// A decorated field. Popup decorations stay active only while this value is alive.
#[derive(Debug)]
pub enum Decoration {
	Locked(HtmlInputElement),
	/// The `<select>` that took the original field's place.
	Dropdown(HtmlSelectElement),
	Popup(PopupListController),
}

impl Decoration {
	#[must_use]
	pub fn presentation(&self) -> Presentation {
		match self {
			Self::Locked(_) => Presentation::Locked,
			Self::Dropdown(_) => Presentation::Dropdown,
			Self::Popup(_) => Presentation::Popup,
		}
	}
}

/// Decorates the `<input>` with id `field_id` in the current page's document.
///
/// See [`attach_to`].
///
/// # Errors
///
/// Iff there is no document, no element with that id, or the element isn't an `<input>`,
/// or if the DOM rejects a change.
pub fn attach(field_id: &str, candidates: Result<Vec<String>>, config: &Config) -> Result<Decoration> {
	let document = web_sys::window().and_then(|window| window.document()).ok_or(Error::NoDocument)?;
	attach_in(&document, field_id, candidates, config)
}

/// Like [`attach`], but looks the field up in `document`.
///
/// # Errors
///
/// See [`attach`].
pub fn attach_in(document: &Document, field_id: &str, candidates: Result<Vec<String>>, config: &Config) -> Result<Decoration> {
	let field = document.get_element_by_id(field_id).ok_or_else(|| Error::FieldNotFound(field_id.to_owned()))?;
	let field = field.dyn_into::<HtmlInputElement>().map_err(|_| Error::NotAnInput(field_id.to_owned()))?;
	attach_to(field, candidates, config)
}

/// Decorates `field` according to [`Presentation::choose`].
///
/// Unavailable candidates lock the field. That is the expected outcome of a failed fetch, not an error.
///
/// # Errors
///
/// Iff the DOM rejects a change, or `field` isn't in a document.
#[instrument(skip(candidates), fields(field_id = %field.id()))]
pub fn attach_to(field: HtmlInputElement, candidates: Result<Vec<String>>, config: &Config) -> Result<Decoration> {
	let candidates = match candidates {
		Ok(candidates) => Some(candidates),
		Err(error) => {
			warn!("Locking field: {}", error);
			None
		}
	};

	let presentation = Presentation::choose(candidates.as_ref().map(Vec::len), config);
	trace!("Decorating field as {:?}.", presentation);
	match (presentation, candidates) {
		(Presentation::Dropdown, Some(candidates)) => replace_with_dropdown(&field, &candidates, config).map(Decoration::Dropdown),
		(Presentation::Popup, Some(candidates)) => PopupListController::new(field, candidates, config).map(Decoration::Popup),
		_ => {
			lock(&field, config);
			Ok(Decoration::Locked(field))
		}
	}
}

/// Disables `field` and explains why in its placeholder.
pub fn lock(field: &HtmlInputElement, config: &Config) {
	field.set_placeholder(&config.locked_placeholder);
	field.set_disabled(true);
}

/// Swaps `field` for a `<select>` with the same `id` and `name`, offering `candidates` in order.
///
/// The select ends in a pre-selected, disabled and hidden placeholder option,
/// so the form can't be submitted with a value the user didn't choose.
///
/// # Errors
///
/// Iff `field` has no parent or isn't in a document, or if the DOM rejects a change.
#[instrument(skip(candidates), fields(candidate_count = candidates.len()))]
pub fn replace_with_dropdown(field: &HtmlInputElement, candidates: &[String], config: &Config) -> Result<HtmlSelectElement> {
	let document = field.owner_document().ok_or(Error::NoDocument)?;
	let parent = field.parent_node().ok_or_else(|| Error::Dom(format!("field {:?} has no parent", field.id())))?;

	let select: HtmlSelectElement = document.create_element("select")?.unchecked_into();
	select.set_id(&field.id());
	if let Some(name) = field.get_attribute("name") {
		select.set_name(&name);
	}

	for candidate in candidates {
		let option: HtmlOptionElement = document.create_element("option")?.unchecked_into();
		option.set_value(candidate);
		option.set_text(candidate);
		select.append_child(&option)?;
	}

	let placeholder: HtmlOptionElement = document.create_element("option")?.unchecked_into();
	placeholder.set_text(&config.dropdown_placeholder);
	for attribute in ["selected", "disabled", "hidden"] {
		placeholder.set_attribute(attribute, "")?;
	}
	select.append_child(&placeholder)?;

	parent.replace_child(&select, field)?;
	Ok(select)
}
