//! Viewport dimensions and scoped event subscriptions.

use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, Window};

/// Drawable area in CSS pixels. Both sides are at least 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	/// Zero, negative and NaN dimensions are clamped to 1 pixel.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width: width.max(1.0),
			height: height.max(1.0),
		}
	}

	pub fn from_window(window: &Window) -> Self {
		let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		Self::new(read(window.inner_width()), read(window.inner_height()))
	}
}

/// An event listener that stays registered for as long as this value lives.
///
/// Dropping the subscription removes the listener from its target.
pub struct Subscription {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl Subscription {
	pub fn new(
		target: &EventTarget,
		event: &'static str,
		callback: impl FnMut(Event) + 'static,
	) -> Result<Self, JsValue> {
		let callback = Closure::<dyn FnMut(Event)>::new(callback);
		target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			event,
			callback,
		})
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}
