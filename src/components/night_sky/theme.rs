//! Visual theming and tunables for the night sky.
//!
//! Everything here has a `Default` matching the stock look, and derives
//! `Deserialize` with `#[serde(default)]` so a page can override any subset
//! of fields through the `sky-config` JSON element.

use rand::Rng;
use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		let a = self.a.clamp(0.0, 1.0);
		if (a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
		}
	}
}

/// A half-open sampling interval `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
	pub min: f64,
	pub max: f64,
}

impl Span {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Uniform sample; a collapsed span (`min == max`) returns `min`.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
		self.min + rng.r#gen::<f64>() * (self.max - self.min)
	}

	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value < self.max
	}
}

/// Initial population policy.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PopulationStyle {
	/// Number of twinkling stars
	pub twinkling_count: usize,
	/// Number of shooting stars
	pub shooting_count: usize,
	/// Twinkling stars spawn in the top `fraction` of the viewport
	pub twinkling_height_fraction: f64,
	pub twinkling_size: Span,
	pub twinkling_opacity: Span,
	/// Phase advance per millisecond
	pub twinkle_speed: Span,
	/// Shooting stars spawn in the top `fraction` of the viewport
	pub shooting_height_fraction: f64,
	pub shooting_size: Span,
	pub shooting_opacity: f64,
	pub shooting_speed: Span,
}

impl Default for PopulationStyle {
	fn default() -> Self {
		Self {
			twinkling_count: 200,
			shooting_count: 10,
			twinkling_height_fraction: 0.7,
			twinkling_size: Span::new(0.5, 2.5),
			twinkling_opacity: Span::new(0.2, 1.0),
			twinkle_speed: Span::new(0.01, 0.03),
			shooting_height_fraction: 0.3,
			shooting_size: Span::new(1.0, 2.5),
			shooting_opacity: 0.8,
			shooting_speed: Span::new(1.0, 3.0),
		}
	}
}

/// Shooting star motion and recycling.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShootingStyle {
	/// Horizontal distance per frame, as a multiple of speed
	pub drift_x: f64,
	/// Vertical distance per frame, as a multiple of speed
	pub drift_y: f64,
	/// Maximum retained trail samples
	pub trail_capacity: usize,
	/// How far past the surface edge a star may travel before recycling
	pub recycle_margin: f64,
	/// Horizontal restart position after recycling
	pub respawn_x: f64,
	/// Recycled stars restart in the top `fraction` of the surface
	pub respawn_height_fraction: f64,
}

impl Default for ShootingStyle {
	fn default() -> Self {
		Self {
			drift_x: 0.5,
			drift_y: 0.3,
			trail_capacity: 15,
			recycle_margin: 50.0,
			respawn_x: -50.0,
			respawn_height_fraction: 0.3,
		}
	}
}

/// Glow gradient colors and proportions.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlowStyle {
	/// Center color of every core glow
	pub core: Color,
	/// Mid-stop color shared by both variants
	pub halo: Color,
	/// Outer stop of twinkling stars
	pub twinkling_edge: Color,
	/// Outer stop of shooting stars and their trails
	pub shooting_edge: Color,
	/// Center color of trail samples
	pub trail: Color,
	pub twinkling_mid_stop: f32,
	pub twinkling_mid_alpha: f64,
	pub shooting_mid_stop: f32,
	pub shooting_mid_alpha: f64,
	/// Glow extent as a multiple of star size
	pub core_extent: f64,
	/// Trail sample extent as a multiple of star size
	pub trail_extent: f64,
	/// Peak trail alpha relative to the sample opacity
	pub trail_alpha: f64,
}

impl Default for GlowStyle {
	fn default() -> Self {
		Self {
			core: Color::rgb(255, 255, 255),
			halo: Color::rgb(200, 220, 255),
			twinkling_edge: Color::rgba(180, 200, 255, 0.0),
			shooting_edge: Color::rgba(150, 180, 255, 0.0),
			trail: Color::rgb(200, 220, 255),
			twinkling_mid_stop: 0.5,
			twinkling_mid_alpha: 0.6,
			shooting_mid_stop: 0.3,
			shooting_mid_alpha: 0.8,
			core_extent: 3.0,
			trail_extent: 2.0,
			trail_alpha: 0.6,
		}
	}
}

/// Which particle set a frame paints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintPolicy {
	/// Advance, then paint the advanced set.
	#[default]
	Updated,
	/// Paint the set as it was before this frame's advance, one frame behind.
	Previous,
}

/// Complete sky configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
	pub population: PopulationStyle,
	pub shooting: ShootingStyle,
	pub glow: GlowStyle,
	pub paint: PaintPolicy,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand_pcg::Pcg32;

	#[test]
	fn css_uses_hex_when_opaque() {
		assert_eq!(Color::rgb(255, 255, 255).to_css(), "#ffffff");
		assert_eq!(
			Color::rgb(200, 220, 255).with_alpha(0.5).to_css(),
			"rgba(200, 220, 255, 0.5)"
		);
	}

	#[test]
	fn css_alpha_is_clamped() {
		assert_eq!(
			Color::rgba(1, 2, 3, -0.25).to_css(),
			"rgba(1, 2, 3, 0)"
		);
	}

	#[test]
	fn collapsed_span_is_constant() {
		let mut rng = Pcg32::seed_from_u64(3);
		let span = Span::new(0.8, 0.8);
		for _ in 0..10 {
			assert_eq!(span.sample(&mut rng), 0.8);
		}
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config: SkyConfig = serde_json::from_str(
			r#"{ "population": { "shooting_count": 4 }, "paint": "previous" }"#,
		)
		.unwrap();
		assert_eq!(config.population.shooting_count, 4);
		assert_eq!(config.population.twinkling_count, 200);
		assert_eq!(config.paint, PaintPolicy::Previous);
		assert_eq!(config.shooting, ShootingStyle::default());
	}

	#[test]
	fn color_alpha_defaults_to_opaque() {
		let color: Color = serde_json::from_str(r#"{ "r": 10, "g": 20, "b": 30 }"#).unwrap();
		assert_eq!(color, Color::rgb(10, 20, 30));
	}
}
