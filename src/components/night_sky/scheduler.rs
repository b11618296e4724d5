//! `requestAnimationFrame` driven loop with a single outstanding request.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Tracks the one pending frame request of a loop.
#[derive(Debug, Default)]
pub struct FrameSlot {
	pending: Option<i32>,
	stopped: bool,
}

impl FrameSlot {
	/// Submits a request unless one is already pending or the loop stopped.
	///
	/// Returns whether `submit` was called.
	pub fn request<E>(&mut self, submit: impl FnOnce() -> Result<i32, E>) -> Result<bool, E> {
		if self.stopped || self.pending.is_some() {
			return Ok(false);
		}
		self.pending = Some(submit()?);
		Ok(true)
	}

	/// Marks the pending request as delivered. Returns whether the frame
	/// should run.
	pub fn fire(&mut self) -> bool {
		self.pending = None;
		!self.stopped
	}

	/// Stops the loop, handing back any request that still needs cancelling.
	pub fn stop(&mut self) -> Option<i32> {
		self.stopped = true;
		self.pending.take()
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	pub fn is_stopped(&self) -> bool {
		self.stopped
	}
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Calls `on_frame` with the frame timestamp once per display refresh until
/// stopped.
pub struct FrameLoop {
	window: Window,
	slot: Rc<RefCell<FrameSlot>>,
	callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
	pub fn start(window: &Window, mut on_frame: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
		let slot = Rc::new(RefCell::new(FrameSlot::default()));
		let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

		let (slot_inner, callback_inner, window_inner) =
			(slot.clone(), callback.clone(), window.clone());
		*callback.borrow_mut() = Some(Closure::new(move |now: f64| {
			if !slot_inner.borrow_mut().fire() {
				return;
			}
			on_frame(now);
			if let Some(ref cb) = *callback_inner.borrow() {
				let requested = slot_inner
					.borrow_mut()
					.request(|| window_inner.request_animation_frame(cb.as_ref().unchecked_ref()));
				if let Err(e) = requested {
					log::error!("night-sky: failed to request animation frame: {:?}", e);
				}
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			slot.borrow_mut()
				.request(|| window.request_animation_frame(cb.as_ref().unchecked_ref()))?;
		}

		Ok(Self {
			window: window.clone(),
			slot,
			callback,
		})
	}

	/// Cancels the pending frame and releases the callback.
	pub fn stop(&self) {
		if let Some(id) = self.slot.borrow_mut().stop() {
			let _ = self.window.cancel_animation_frame(id);
		}
		self.callback.borrow_mut().take();
	}
}
