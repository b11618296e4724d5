//! Pointer position to parallax offset.

use super::viewport::Viewport;

/// Largest offset magnitude on either axis, in pixels.
pub const MAX_OFFSET: f64 = 10.0;

/// Pointer displacement from the viewport center, scaled to `[-10, 10]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffset {
	pub x: f64,
	pub y: f64,
}

impl ParallaxOffset {
	pub fn from_pointer(client_x: f64, client_y: f64, viewport: Viewport) -> Self {
		let axis = |pos: f64, extent: f64| {
			((pos / extent - 0.5) * MAX_OFFSET * 2.0).clamp(-MAX_OFFSET, MAX_OFFSET)
		};
		Self {
			x: axis(client_x, viewport.width),
			y: axis(client_y, viewport.height),
		}
	}

	/// CSS transform shifting a layer by this offset times `depth`.
	pub fn translate(self, depth: f64) -> String {
		format!("translate({}px, {}px)", self.x * depth, self.y * depth)
	}
}
