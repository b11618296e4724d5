//! Static backdrop layers shifted by the parallax offset.
//!
//! Layers are plain positioned `<div>`s. Nearer layers use larger depth
//! factors so they move further for the same pointer offset.

use leptos::prelude::*;

use super::pointer::ParallaxOffset;

/// A decorative layer and how strongly it follows the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneLayer {
	Sky,
	Nebula,
	Moon,
	Clouds,
	Stars,
	Mountains,
	Water,
}

impl SceneLayer {
	/// Back to front.
	pub const ALL: [SceneLayer; 7] = [
		SceneLayer::Sky,
		SceneLayer::Nebula,
		SceneLayer::Moon,
		SceneLayer::Clouds,
		SceneLayer::Stars,
		SceneLayer::Mountains,
		SceneLayer::Water,
	];

	pub fn depth(self) -> f64 {
		match self {
			SceneLayer::Sky => 0.1,
			SceneLayer::Nebula => 0.05,
			SceneLayer::Moon => 0.3,
			SceneLayer::Clouds => 0.2,
			SceneLayer::Stars => 0.1,
			SceneLayer::Mountains => 0.05,
			SceneLayer::Water => 0.02,
		}
	}

	pub fn class(self) -> &'static str {
		match self {
			SceneLayer::Sky => "sky-layer sky",
			SceneLayer::Nebula => "sky-layer nebula",
			SceneLayer::Moon => "sky-layer moon",
			SceneLayer::Clouds => "sky-layer clouds",
			SceneLayer::Stars => "sky-layer stars",
			SceneLayer::Mountains => "sky-layer mountains",
			SceneLayer::Water => "sky-layer water",
		}
	}

	fn background(self) -> &'static str {
		match self {
			SceneLayer::Sky => concat!(
				"radial-gradient(ellipse at 30% 20%, rgba(75, 0, 130, 0.4) 0%, transparent 50%), ",
				"radial-gradient(ellipse at 70% 80%, rgba(25, 25, 112, 0.3) 0%, transparent 50%), ",
				"linear-gradient(180deg, #0a0a1a 0%, #1a1a3a 25%, #2a2a5a 50%, #1a1a3a 75%, #0a0a1a 100%)",
			),
			SceneLayer::Nebula => concat!(
				"radial-gradient(ellipse 800px 400px at 20% 30%, rgba(138, 43, 226, 0.1) 0%, transparent 70%), ",
				"radial-gradient(ellipse 600px 300px at 80% 70%, rgba(72, 61, 139, 0.1) 0%, transparent 70%)",
			),
			SceneLayer::Moon => {
				"radial-gradient(circle at 40% 40%, #f3f4f6 0%, #dbeafe 55%, #d1d5db 100%)"
			}
			SceneLayer::Clouds => concat!(
				"radial-gradient(ellipse 384px 96px at 40% 25%, rgba(191, 219, 254, 0.05) 0%, transparent 70%), ",
				"radial-gradient(ellipse 320px 80px at 70% 33%, rgba(233, 213, 255, 0.05) 0%, transparent 70%)",
			),
			SceneLayer::Stars => "none",
			SceneLayer::Mountains => "linear-gradient(to top, rgba(10, 10, 26, 0.9) 0%, transparent 100%)",
			SceneLayer::Water => concat!(
				"linear-gradient(to bottom, rgba(100, 150, 255, 0.1) 0%, ",
				"rgba(50, 100, 200, 0.05) 50%, rgba(20, 50, 150, 0.02) 100%)",
			),
		}
	}

	/// Placement that does not depend on the pointer.
	fn placement(self) -> &'static str {
		match self {
			SceneLayer::Sky | SceneLayer::Clouds | SceneLayer::Stars => "inset: 0;",
			SceneLayer::Nebula => "inset: 0; opacity: 0.3;",
			SceneLayer::Moon => {
				"top: 15%; right: 20%; width: 8rem; height: 8rem; border-radius: 50%; \
				 box-shadow: 0 0 60px 20px rgba(191, 219, 254, 0.2);"
			}
			SceneLayer::Mountains => {
				"left: 0; right: 0; bottom: 0; height: 12rem; clip-path: polygon(0% 100%, 15% 60%, \
				 25% 80%, 40% 40%, 55% 70%, 70% 30%, 85% 65%, 100% 45%, 100% 100%);"
			}
			SceneLayer::Water => "left: 0; right: 0; bottom: 0; height: 8rem;",
		}
	}

	/// Full inline style for the current offset.
	pub fn style(self, offset: ParallaxOffset) -> String {
		let easing = match self {
			SceneLayer::Stars => "pointer-events: none;",
			_ => "transition: transform 1s ease-out;",
		};
		format!(
			"position: absolute; {} background: {}; transform: {}; {}",
			self.placement(),
			self.background(),
			offset.translate(self.depth()),
			easing,
		)
	}
}

/// Renders one decorative layer tracking `offset`.
#[component]
pub fn SceneLayerView(layer: SceneLayer, #[prop(into)] offset: Signal<ParallaxOffset>) -> impl IntoView {
	view! { <div class=layer.class() style=move || layer.style(offset.get()) /> }
}
