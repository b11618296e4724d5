//! Leptos component wrapping the star field canvas and the parallax layers.
//!
//! The component creates the canvas, subscribes to window `resize` and
//! `mousemove`, and runs the animation loop via `requestAnimationFrame`,
//! advancing and painting the sky each frame. Everything it acquires is
//! released again in `on_cleanup`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::pointer::ParallaxOffset;
use super::scene::{SceneLayer, SceneLayerView};
use super::scheduler::FrameLoop;
use super::state::SkyState;
use super::theme::SkyConfig;
use super::viewport::{Subscription, Viewport};

/// Everything a mounted sky holds on to. Dropping it after [`SkyHandle::stop`]
/// removes the listeners.
struct SkyHandle {
	frame_loop: FrameLoop,
	_resize: Subscription,
	_pointer: Subscription,
}

impl SkyHandle {
	fn start(
		window: &Window,
		canvas_ref: NodeRef<leptos::html::Canvas>,
		config: SkyConfig,
		offset: RwSignal<ParallaxOffset>,
	) -> Result<Self, JsValue> {
		let viewport = Viewport::from_window(window);
		if let Some(canvas) = canvas_ref.get_untracked() {
			size_canvas(&canvas.into(), viewport);
		}
		let state = Rc::new(RefCell::new(SkyState::from_entropy(config, viewport)));
		log::info!(
			"night-sky: started with {} stars at {}x{}",
			state.borrow().stars().len(),
			viewport.width,
			viewport.height
		);

		let state_resize = state.clone();
		let resize = Subscription::new(window, "resize", move |_| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let viewport = Viewport::from_window(&win);
			if let Some(canvas) = canvas_ref.get_untracked() {
				size_canvas(&canvas.into(), viewport);
			}
			state_resize.borrow_mut().resize(viewport);
		})?;

		let state_pointer = state.clone();
		let pointer = Subscription::new(window, "mousemove", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let viewport = state_pointer.borrow().viewport();
			offset.set(ParallaxOffset::from_pointer(
				ev.client_x() as f64,
				ev.client_y() as f64,
				viewport,
			));
		})?;

		let frame_loop = FrameLoop::start(window, move |now| {
			let ctx = canvas_ref
				.get_untracked()
				.and_then(|canvas| context_2d(&canvas.into()));
			if let Err(e) = state.borrow_mut().frame(now, ctx.as_ref()) {
				log::warn!("night-sky: frame draw failed: {:?}", e);
			}
		})?;

		Ok(Self {
			frame_loop,
			_resize: resize,
			_pointer: pointer,
		})
	}

	fn stop(self) {
		self.frame_loop.stop();
		log::info!("night-sky: stopped");
	}
}

fn size_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
	canvas.set_width(viewport.width as u32);
	canvas.set_height(viewport.height as u32);
}

/// The canvas' 2D context, if the canvas can provide one.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Renders the animated night sky as a fixed, full-viewport backdrop.
///
/// Place it anywhere in the tree; it sits behind the page content
/// (`z-index: -10`) and follows the pointer with a gentle parallax.
#[component]
pub fn NightSkyBackground(#[prop(optional)] config: SkyConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let offset = RwSignal::new(ParallaxOffset::default());
	let handle: Rc<RefCell<Option<SkyHandle>>> = Rc::new(RefCell::new(None));
	let handle_init = handle.clone();

	Effect::new(move |_| {
		if canvas_ref.get().is_none() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(previous) = handle_init.borrow_mut().take() {
			previous.stop();
		}
		match SkyHandle::start(&window, canvas_ref, config.clone(), offset) {
			Ok(started) => *handle_init.borrow_mut() = Some(started),
			Err(e) => log::error!("night-sky: failed to start: {:?}", e),
		}
	});

	let handle_cleanup = SendWrapper::new(handle);
	on_cleanup(move || {
		if let Some(handle) = handle_cleanup.borrow_mut().take() {
			handle.stop();
		}
	});

	let offset = Signal::from(offset);
	let stars = SceneLayer::Stars;

	view! {
		<div class="night-sky" style="position: fixed; inset: 0; z-index: -10; overflow: hidden;">
			<SceneLayerView layer=SceneLayer::Sky offset=offset />
			<SceneLayerView layer=SceneLayer::Nebula offset=offset />
			<SceneLayerView layer=SceneLayer::Moon offset=offset />
			<SceneLayerView layer=SceneLayer::Clouds offset=offset />
			<canvas
				node_ref=canvas_ref
				class=stars.class()
				style=move || stars.style(offset.get())
			/>
			<SceneLayerView layer=SceneLayer::Mountains offset=offset />
			<SceneLayerView layer=SceneLayer::Water offset=offset />
		</div>
	}
}
