//! Star field painting.
//!
//! Stars are painted in population order. A shooting star's trail goes down
//! first, oldest sample to newest, so its head glow lands on top:
//! 1. Trail samples: small discs growing and brightening toward the head
//! 2. Core glow: white center fading through a blue halo to transparent

use super::star::{Star, StarKind, Trail};
use super::surface::{Glow, GradientStop, Surface};
use super::theme::GlowStyle;

/// Paints `stars` onto `surface`, or does nothing when no surface is attached.
///
/// Stops at the first failing draw call and reports it.
pub fn render<S: Surface>(
	surface: Option<&S>,
	stars: &[Star],
	style: &GlowStyle,
) -> Result<(), S::Error> {
	let Some(surface) = surface else {
		return Ok(());
	};

	for star in stars {
		if let StarKind::Shooting { trail, .. } = &star.kind {
			draw_trail(surface, star, trail, style)?;
		}
		draw_core(surface, star, style)?;
	}
	Ok(())
}

fn draw_trail<S: Surface>(
	surface: &S,
	star: &Star,
	trail: &Trail,
	style: &GlowStyle,
) -> Result<(), S::Error> {
	let len = trail.len() as f64;

	for (index, point) in trail.iter().enumerate() {
		let t = index as f64 / len;
		let stops = [
			GradientStop::new(0.0, style.trail.with_alpha(t * point.opacity * style.trail_alpha)),
			GradientStop::new(1.0, style.shooting_edge),
		];
		surface.fill_glow(&Glow {
			x: point.x,
			y: point.y,
			radius: star.size * (t + 0.5),
			extent: star.size * style.trail_extent,
			stops: &stops,
		})?;
	}
	Ok(())
}

fn draw_core<S: Surface>(surface: &S, star: &Star, style: &GlowStyle) -> Result<(), S::Error> {
	let (mid_stop, mid_alpha, edge) = match star.kind {
		StarKind::Shooting { .. } => (
			style.shooting_mid_stop,
			style.shooting_mid_alpha,
			style.shooting_edge,
		),
		StarKind::Twinkling { .. } => (
			style.twinkling_mid_stop,
			style.twinkling_mid_alpha,
			style.twinkling_edge,
		),
	};

	let stops = [
		GradientStop::new(0.0, style.core.with_alpha(star.opacity)),
		GradientStop::new(mid_stop, style.halo.with_alpha(star.opacity * mid_alpha)),
		GradientStop::new(1.0, edge),
	];
	surface.fill_glow(&Glow {
		x: star.x,
		y: star.y,
		radius: star.size,
		extent: star.size * style.core_extent,
		stops: &stops,
	})
}
