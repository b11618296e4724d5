//! Drawing primitives the renderer needs, and their canvas implementation.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// A color at a relative position along a radial gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
	pub offset: f32,
	pub color: Color,
}

impl GradientStop {
	pub const fn new(offset: f32, color: Color) -> Self {
		Self { offset, color }
	}
}

/// A filled disc whose fill is a radial gradient centered on the disc.
///
/// The gradient runs from radius 0 to `extent`, which may be larger than the
/// disc itself, in which case only the inner part of the gradient shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Glow<'a> {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub extent: f64,
	pub stops: &'a [GradientStop],
}

/// A 2D raster target.
pub trait Surface {
	type Error;

	/// Erases the `width` x `height` area anchored at the origin.
	fn clear(&self, width: f64, height: f64);

	fn fill_glow(&self, glow: &Glow<'_>) -> Result<(), Self::Error>;
}

impl Surface for CanvasRenderingContext2d {
	type Error = JsValue;

	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_glow(&self, glow: &Glow<'_>) -> Result<(), JsValue> {
		let gradient = self.create_radial_gradient(glow.x, glow.y, 0.0, glow.x, glow.y, glow.extent)?;
		for stop in glow.stops {
			gradient.add_color_stop(stop.offset, &stop.color.to_css())?;
		}

		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.begin_path();
		self.arc(glow.x, glow.y, glow.radius, 0.0, PI * 2.0)?;
		self.fill();
		Ok(())
	}
}
