use tracing::{error, instrument, trace};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::EventTarget;

/// An event listener that stays registered for as long as this handle lives.
///
/// Dropping the handle removes the listener from its target and frees the Wasm closure,
/// so a listener can never outlive the state it refers to.
pub(crate) struct EventListener {
	target: EventTarget,
	name: &'static str,
	callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
	/// Registers `callback` for `name` events on `target`, in the bubbling phase.
	///
	/// If the browser rejects the registration, this is logged and the returned handle is inert.
	#[instrument(skip(target, callback))]
	pub(crate) fn new(target: &EventTarget, name: &'static str, callback: impl 'static + FnMut(web_sys::Event)) -> Self {
		let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
		match target.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref()) {
			Ok(()) => trace!("Added event listener {:?}.", name),
			Err(error) => error!("Failed to add event listener {:?}: {:?}", name, error),
		}
		Self { target: target.clone(), name, callback }
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		let name = self.name;
		match self.target.remove_event_listener_with_callback(name, self.callback.as_ref().unchecked_ref()) {
			Ok(()) => trace!("Removed event listener {:?}.", name),
			Err(error) => error!("Failed to remove event listener {:?}: {:?}", name, error),
		}
	}
}

impl core::fmt::Debug for EventListener {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("EventListener").field("name", &self.name).finish()
	}
}
