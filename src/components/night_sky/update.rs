//! Per-frame star advancement.

use rand::Rng;

use super::star::{Star, StarKind, TrailPoint, twinkle_opacity};
use super::theme::ShootingStyle;
use super::viewport::Viewport;

/// Returns the population one frame later.
///
/// `now` is a monotonic clock reading in milliseconds. Twinkling stars only
/// change opacity; shooting stars move diagonally, extend their trail and are
/// recycled once they pass the surface edge plus the margin. The RNG is only
/// drawn from when a star is recycled.
pub fn advance<R: Rng + ?Sized>(
	stars: &[Star],
	now: f64,
	surface: Viewport,
	style: &ShootingStyle,
	rng: &mut R,
) -> Vec<Star> {
	stars
		.iter()
		.map(|star| {
			let mut next = star.clone();
			step(&mut next, now, surface, style, rng);
			next
		})
		.collect()
}

fn step<R: Rng + ?Sized>(
	star: &mut Star,
	now: f64,
	surface: Viewport,
	style: &ShootingStyle,
	rng: &mut R,
) {
	match &mut star.kind {
		StarKind::Twinkling { twinkle_speed } => {
			star.opacity = twinkle_opacity(now, *twinkle_speed);
		}
		StarKind::Shooting { speed, trail } => {
			star.x += *speed * style.drift_x;
			star.y += *speed * style.drift_y;
			trail.push(TrailPoint {
				x: star.x,
				y: star.y,
				opacity: star.opacity,
			});

			if star.x > surface.width + style.recycle_margin
				|| star.y > surface.height + style.recycle_margin
			{
				star.x = style.respawn_x;
				star.y = rng.r#gen::<f64>() * surface.height * style.respawn_height_fraction;
				trail.clear();
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::night_sky::star::Trail;
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand_pcg::Pcg32;

	fn shooting(x: f64, y: f64, speed: f64) -> Star {
		Star {
			id: 205,
			x,
			y,
			size: 1.5,
			opacity: 0.8,
			kind: StarKind::Shooting {
				speed,
				trail: Trail::new(15),
			},
		}
	}

	fn twinkling(x: f64, y: f64) -> Star {
		Star {
			id: 7,
			x,
			y,
			size: 1.0,
			opacity: 0.25,
			kind: StarKind::Twinkling { twinkle_speed: 0.02 },
		}
	}

	fn advance_one(star: Star, surface: Viewport) -> Star {
		let mut rng = Pcg32::seed_from_u64(11);
		advance(&[star], 0.0, surface, &ShootingStyle::default(), &mut rng).remove(0)
	}

	#[test]
	fn shooting_star_moves_diagonally() {
		let next = advance_one(shooting(100.0, 100.0, 2.0), Viewport::new(1000.0, 800.0));
		assert_eq!(next.x, 101.0);
		assert!((next.y - 100.6).abs() < 1e-9);

		let trail: Vec<_> = next.trail().unwrap().iter().copied().collect();
		assert_eq!(
			trail,
			vec![TrailPoint {
				x: next.x,
				y: next.y,
				opacity: 0.8
			}]
		);
	}

	#[test]
	fn exact_margin_does_not_recycle() {
		let next = advance_one(shooting(1049.0, 100.0, 2.0), Viewport::new(1000.0, 800.0));
		assert_eq!(next.x, 1050.0);
		assert!((next.y - 100.6).abs() < 1e-9);
		assert_eq!(next.trail().unwrap().len(), 1);
	}

	#[test]
	fn past_margin_recycles_and_keeps_identity() {
		let next = advance_one(shooting(1059.0, 100.0, 2.0), Viewport::new(1000.0, 800.0));
		assert_eq!(next.id, 205);
		assert_eq!(next.x, -50.0);
		assert!((0.0..240.0).contains(&next.y));
		assert!(next.trail().unwrap().is_empty());
	}

	#[test]
	fn vertical_threshold_alone_recycles() {
		let next = advance_one(shooting(10.0, 850.0, 3.0), Viewport::new(1000.0, 800.0));
		assert_eq!(next.x, -50.0);
		assert!(next.trail().unwrap().is_empty());
	}

	#[test]
	fn twinkling_star_only_changes_opacity() {
		let star = twinkling(12.0, 34.0);
		let mut rng = Pcg32::seed_from_u64(1);
		let next = advance(
			std::slice::from_ref(&star),
			1000.0,
			Viewport::new(100.0, 100.0),
			&ShootingStyle::default(),
			&mut rng,
		)
		.remove(0);

		assert_eq!((next.x, next.y, next.size), (12.0, 34.0, 1.0));
		assert_eq!(next.opacity, twinkle_opacity(1000.0, 0.02));
		assert_eq!(next.kind, star.kind);
	}

	#[test]
	fn input_is_left_untouched() {
		let stars = vec![shooting(1059.0, 100.0, 2.0), twinkling(1.0, 2.0)];
		let before = stars.clone();
		let mut rng = Pcg32::seed_from_u64(2);
		let _ = advance(&stars, 500.0, Viewport::new(1000.0, 800.0), &ShootingStyle::default(), &mut rng);
		assert_eq!(stars, before);
	}

	#[test]
	fn trail_fills_to_capacity() {
		let mut stars = vec![shooting(0.0, 0.0, 1.0)];
		let mut rng = Pcg32::seed_from_u64(3);
		let surface = Viewport::new(10_000.0, 10_000.0);
		for frame in 1..=40 {
			stars = advance(&stars, frame as f64, surface, &ShootingStyle::default(), &mut rng);
			assert_eq!(stars[0].trail().unwrap().len(), frame.min(15));
		}
		let newest = stars[0].trail().unwrap().iter().last().copied().unwrap();
		assert_eq!((newest.x, newest.y), (stars[0].x, stars[0].y));
	}

	proptest! {
		#[test]
		fn recycles_iff_past_margin(
			x in -60.0f64..1100.0,
			y in -60.0f64..900.0,
			speed in 1.0f64..3.0,
		) {
			let surface = Viewport::new(1000.0, 800.0);
			let moved_x = x + speed * 0.5;
			let moved_y = y + speed * 0.3;
			let expect_recycle = moved_x > 1050.0 || moved_y > 850.0;

			let next = advance_one(shooting(x, y, speed), surface);
			let trail_len = next.trail().unwrap().len();
			if expect_recycle {
				prop_assert_eq!(next.x, -50.0);
				prop_assert_eq!(trail_len, 0);
			} else {
				prop_assert_eq!(next.x, moved_x);
				prop_assert_eq!(trail_len, 1);
			}
		}
	}
}
