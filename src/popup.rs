//! The live-filtering suggestion popup beneath a text input.
//!
//! # DOM Layout
//!
//! While open, the popup is a sibling inserted right after the field:
//!
//! ```html
//! <input id="lend_book">
//! <div id="lend_book_searchbox" class="searchbox">
//!   <ul id="lend_book_searchlist">
//!     <li data="Dune">Dune</li>
//!     <li data="Dracula">Dracula</li>
//!   </ul>
//! </div>
//! ```
//!
//! Closing removes the `div` and everything in it.

use crate::{config::Config, error::Result, filter::filter, listener::EventListener};
use std::{
	cell::RefCell,
	rc::{Rc, Weak},
};
use tracing::{error, instrument, trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FocusEvent, HtmlInputElement, KeyboardEvent, Node};

/// Whether a field's popup is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
	Closed,
	Open,
}

/// Id of the popup container for the field with id `field_id`.
#[must_use]
pub fn searchbox_id(field_id: &str) -> String {
	format!("{}_searchbox", field_id)
}

/// Id of the suggestion list inside the popup container for the field with id `field_id`.
#[must_use]
pub fn searchlist_id(field_id: &str) -> String {
	format!("{}_searchlist", field_id)
}

/// Drives the suggestion popup of one text input.
///
/// Typing into or clicking the field opens the popup with the candidates that contain its current text.
/// Emptying the field, pressing Escape, clicking elsewhere or tabbing to another element closes it,
/// as does clicking one of the suggestions, which first copies that suggestion into the field.
///
/// A blur without a `relatedTarget` (focus left the window, or went to something unfocusable) is ignored.
///
/// All event listeners, including the ones on the document, belong to this instance.
/// Dropping it closes the popup and removes them.
#[derive(Debug)]
pub struct PopupListController {
	popup: Rc<RefCell<Popup>>,
	_listeners: [EventListener; 5],
}

#[derive(Debug)]
struct Popup {
	document: Document,
	field: HtmlInputElement,
	field_id: String,
	candidates: Rc<[String]>,
	limit: usize,
	open: Option<OpenPopup>,
}

#[derive(Debug)]
struct OpenPopup {
	container: Element,
	list: Element,
	query: String,
	suggestions: Vec<String>,
}

impl PopupListController {
	/// Wires a popup over `candidates` to `field`.
	///
	/// The popup starts out closed.
	///
	/// # Errors
	///
	/// Iff `field` isn't part of a document.
	#[instrument(skip(candidates))]
	pub fn new(field: HtmlInputElement, candidates: impl Into<Rc<[String]>>, config: &Config) -> Result<Self> {
		let document = field.owner_document().ok_or(crate::Error::NoDocument)?;
		let popup = Rc::new(RefCell::new(Popup {
			field_id: field.id(),
			document: document.clone(),
			field: field.clone(),
			candidates: candidates.into(),
			limit: config.popup_limit,
			open: None,
		}));

		let listeners = [
			EventListener::new(&field, "keyup", on(&popup, |popup, event| {
				if event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key).as_deref() != Some("Escape") {
					popup.refresh()
				}
			})),
			EventListener::new(&field, "click", on(&popup, |popup, _| popup.refresh())),
			EventListener::new(&field, "blur", on(&popup, |popup, event| {
				if event.dyn_ref::<FocusEvent>().and_then(FocusEvent::related_target).is_some() {
					popup.close()
				} else {
					trace!("Ignoring blur without related target.")
				}
			})),
			EventListener::new(&document, "keydown", on(&popup, |popup, event| {
				if event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key).as_deref() == Some("Escape") {
					popup.close()
				}
			})),
			EventListener::new(&document, "click", on(&popup, Popup::handle_document_click)),
		];

		Ok(Self { popup, _listeners: listeners })
	}

	#[must_use]
	pub fn state(&self) -> PopupState {
		if self.popup.borrow().open.is_some() {
			PopupState::Open
		} else {
			PopupState::Closed
		}
	}

	/// The text the shown suggestions were filtered by, if open.
	#[must_use]
	pub fn query(&self) -> Option<String> {
		self.popup.borrow().open.as_ref().map(|open| open.query.clone())
	}

	/// The suggestions currently shown, in display order. Empty while closed.
	#[must_use]
	pub fn suggestions(&self) -> Vec<String> {
		self.popup.borrow().open.as_ref().map(|open| open.suggestions.clone()).unwrap_or_default()
	}

	#[must_use]
	pub fn field(&self) -> HtmlInputElement {
		self.popup.borrow().field.clone()
	}

	/// Re-filters by the field's current text, opening the popup or closing it if the field is empty.
	///
	/// This is what a keystroke or a click on the field does.
	pub fn refresh(&self) {
		self.popup.borrow_mut().refresh()
	}

	pub fn close(&self) {
		self.popup.borrow_mut().close()
	}

	/// Puts `text` into the field and closes the popup, like clicking a suggestion.
	pub fn select(&self, text: &str) {
		self.popup.borrow_mut().select(text)
	}
}

impl Drop for PopupListController {
	fn drop(&mut self) {
		match self.popup.try_borrow_mut() {
			Ok(mut popup) => popup.close(),
			Err(_) => error!("Popup controller dropped from inside its own event handler; its container may be left behind."),
		}
	}
}

/// Adapts a handler on [`Popup`] into an event callback that does nothing once the popup is gone.
fn on(popup: &Rc<RefCell<Popup>>, handler: impl 'static + Fn(&mut Popup, &web_sys::Event)) -> impl 'static + FnMut(web_sys::Event) {
	let popup: Weak<RefCell<Popup>> = Rc::downgrade(popup);
	move |event| {
		let popup = match popup.upgrade() {
			Some(popup) => popup,
			None => return trace!("Event {:?} after controller drop.", event.type_()),
		};
		let mut popup = match popup.try_borrow_mut() {
			Ok(popup) => popup,
			Err(_) => return warn!("Re-entrant {:?} event ignored.", event.type_()),
		};
		handler(&mut *popup, &event)
	}
}

impl Popup {
	#[instrument(skip(self), fields(field_id = %self.field_id))]
	fn refresh(&mut self) {
		let query = self.field.value();
		if query.is_empty() {
			return self.close();
		}

		if let Err(error) = self.render(query) {
			error!("Failed to render popup: {}", error);
			self.close()
		}
	}

	fn render(&mut self, query: String) -> Result<()> {
		let suggestions: Vec<String> = filter(&self.candidates, &query, self.limit).into_iter().map(ToOwned::to_owned).collect();
		if cfg!(feature = "dangerous-logging") {
			trace!("Showing {} suggestion(s) for {:?}: {:?}", suggestions.len(), query, suggestions);
		} else {
			trace!("Showing {} suggestion(s).", suggestions.len());
		}

		let document = self.document.clone();
		let open = self.ensure_open()?;
		open.list.set_text_content(None);
		for suggestion in &suggestions {
			let item = document.create_element("li")?;
			item.set_attribute("data", suggestion)?;
			item.set_text_content(Some(suggestion));
			open.list.append_child(&item)?;
		}
		open.query = query;
		open.suggestions = suggestions;
		Ok(())
	}

	/// Returns the open popup, creating its container first if necessary.
	fn ensure_open(&mut self) -> Result<&mut OpenPopup> {
		let open = match self.open.take() {
			Some(open) if open.container.is_connected() => open,
			Some(_) => {
				warn!("Popup container was removed externally; recreating it.");
				self.create_container()?
			}
			None => self.create_container()?,
		};
		Ok(self.open.insert(open))
	}

	/// Builds an empty popup right after the field.
	///
	/// A foreign element already using this field's container id is removed first.
	fn create_container(&self) -> Result<OpenPopup> {
		let searchbox_id = searchbox_id(&self.field_id);
		if let Some(stale) = self.document.get_element_by_id(&searchbox_id) {
			warn!("Replacing existing element with id {:?}.", searchbox_id);
			stale.remove();
		}

		let container = self.document.create_element("div")?;
		container.set_id(&searchbox_id);
		container.set_class_name("searchbox");
		let list = self.document.create_element("ul")?;
		list.set_id(&searchlist_id(&self.field_id));
		container.append_child(&list)?;
		self.field.insert_adjacent_element("afterend", &container)?;
		trace!("Opened popup.");

		Ok(OpenPopup { container, list, query: String::new(), suggestions: Vec::new() })
	}

	fn close(&mut self) {
		if let Some(open) = self.open.take() {
			open.container.remove();
			trace!(field_id = %self.field_id, "Closed popup.");
		}
	}

	fn select(&mut self, text: &str) {
		if cfg!(feature = "dangerous-logging") {
			trace!(field_id = %self.field_id, "Selected {:?}.", text);
		} else {
			trace!(field_id = %self.field_id, "Selected a suggestion.");
		}
		self.field.set_value(text);
		self.close()
	}

	/// Selects a clicked suggestion, or closes the popup on a click outside of both it and the field.
	fn handle_document_click(&mut self, event: &web_sys::Event) {
		let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
		let open = match &self.open {
			Some(open) => open,
			None => return,
		};

		if !target.as_ref().map_or(false, |target| open.container.contains(Some(target))) {
			let field: &Node = &self.field;
			if !target.as_ref().map_or(false, |target| field.is_same_node(Some(target))) {
				self.close()
			}
			return;
		}

		let item = target
			.and_then(|target| match target.dyn_into::<Element>() {
				Ok(element) => Some(element),
				Err(node) => node.parent_element(),
			})
			.and_then(|element| element.closest("li").ok().flatten())
			.filter(|item| {
				let item: &Node = item;
				open.list.contains(Some(item))
			});
		match item {
			Some(item) => {
				let text = item.get_attribute("data").or_else(|| item.text_content()).unwrap_or_default();
				self.select(&text)
			}
			None => trace!("Click inside popup, but not on a suggestion."),
		}
	}
}
