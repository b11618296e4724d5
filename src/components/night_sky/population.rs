//! Initial star population.

use rand::Rng;

use super::star::{Star, StarKind, Trail};
use super::theme::{PopulationStyle, ShootingStyle};
use super::viewport::Viewport;

/// Builds a fresh population for `viewport`.
///
/// Twinkling stars take ids `0..twinkling_count`, shooting stars follow.
/// The caller swaps the result in whole; nothing here touches live state.
pub fn generate<R: Rng + ?Sized>(
	viewport: Viewport,
	population: &PopulationStyle,
	shooting: &ShootingStyle,
	rng: &mut R,
) -> Vec<Star> {
	let Viewport { width, height } = viewport;
	let total = population.twinkling_count + population.shooting_count;
	let mut stars = Vec::with_capacity(total);

	for _ in 0..population.twinkling_count {
		stars.push(Star {
			id: stars.len() as u32,
			x: rng.r#gen::<f64>() * width,
			y: rng.r#gen::<f64>() * height * population.twinkling_height_fraction,
			size: population.twinkling_size.sample(rng),
			opacity: population.twinkling_opacity.sample(rng),
			kind: StarKind::Twinkling {
				twinkle_speed: population.twinkle_speed.sample(rng),
			},
		});
	}

	for _ in 0..population.shooting_count {
		stars.push(Star {
			id: stars.len() as u32,
			x: rng.r#gen::<f64>() * width,
			y: rng.r#gen::<f64>() * height * population.shooting_height_fraction,
			size: population.shooting_size.sample(rng),
			opacity: population.shooting_opacity,
			kind: StarKind::Shooting {
				speed: population.shooting_speed.sample(rng),
				trail: Trail::new(shooting.trail_capacity),
			},
		});
	}

	stars
}
