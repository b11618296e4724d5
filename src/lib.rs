//! night-sky: Animated star field backdrop for a portfolio page.
//!
//! This crate provides a WASM-based canvas component that renders twinkling
//! and shooting stars with glow and trail effects, plus pointer parallax on
//! the decorative layers behind the page.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;

pub use components::night_sky::{NightSkyBackground, ParallaxOffset, SkyConfig, Star, StarKind};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("night-sky: logging initialized");
}

/// Load sky configuration from a script element with id="sky-config".
/// Any field may be omitted; missing fields keep their defaults.
fn load_sky_config() -> Option<SkyConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("sky-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SkyConfig>(&json_text) {
		Ok(config) => {
			info!(
				"night-sky: loaded config ({} twinkling, {} shooting, {:?} paint)",
				config.population.twinkling_count,
				config.population.shooting_count,
				config.paint
			);
			Some(config)
		}
		Err(e) => {
			warn!("night-sky: failed to parse sky config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the sky configuration from the DOM and mounts the animated backdrop.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_sky_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Night Sky" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<NightSkyBackground config=config />
	}
}
