//! Live sky state advanced once per animation frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::population;
use super::render;
use super::star::Star;
use super::surface::Surface;
use super::theme::{PaintPolicy, SkyConfig};
use super::update;
use super::viewport::Viewport;

/// Star population plus everything needed to advance and paint it.
///
/// Created once when the component mounts. The resize handler calls
/// [`SkyState::resize`] and the frame loop calls [`SkyState::frame`]; both run
/// on the same thread and each replaces the population in a single
/// assignment.
pub struct SkyState {
	config: SkyConfig,
	viewport: Viewport,
	stars: Vec<Star>,
	rng: Pcg32,
	frames: u64,
}

impl SkyState {
	pub fn new(config: SkyConfig, viewport: Viewport, rng: Pcg32) -> Self {
		let mut state = Self {
			config,
			viewport,
			stars: Vec::new(),
			rng,
			frames: 0,
		};
		state.regenerate();
		state
	}

	/// Seeds the RNG from the platform entropy source.
	pub fn from_entropy(config: SkyConfig, viewport: Viewport) -> Self {
		Self::new(config, viewport, Pcg32::from_entropy())
	}

	pub fn stars(&self) -> &[Star] {
		&self.stars
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Adopts new surface dimensions and rebuilds the whole population.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.regenerate();
	}

	fn regenerate(&mut self) {
		self.stars = population::generate(
			self.viewport,
			&self.config.population,
			&self.config.shooting,
			&mut self.rng,
		);
		log::debug!(
			"night-sky: generated {} stars for {}x{}",
			self.stars.len(),
			self.viewport.width,
			self.viewport.height
		);
	}

	/// Runs one frame: clear, advance, paint.
	///
	/// Without a surface the population still advances and nothing is drawn.
	pub fn frame<S: Surface>(&mut self, now: f64, surface: Option<&S>) -> Result<(), S::Error> {
		if let Some(surface) = surface {
			surface.clear(self.viewport.width, self.viewport.height);
		}

		let next = update::advance(
			&self.stars,
			now,
			self.viewport,
			&self.config.shooting,
			&mut self.rng,
		);
		self.frames += 1;

		match self.config.paint {
			PaintPolicy::Updated => {
				self.stars = next;
				render::render(surface, &self.stars, &self.config.glow)
			}
			PaintPolicy::Previous => {
				let previous = std::mem::replace(&mut self.stars, next);
				render::render(surface, &previous, &self.config.glow)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::night_sky::render::tests::{Op, RecordingSurface};

	fn sky(policy: PaintPolicy, seed: u64) -> SkyState {
		let config = SkyConfig {
			paint: policy,
			..SkyConfig::default()
		};
		SkyState::new(config, Viewport::new(800.0, 600.0), Pcg32::seed_from_u64(seed))
	}

	fn positions(stars: &[Star]) -> Vec<(f64, f64)> {
		stars.iter().map(|s| (s.x, s.y)).collect()
	}

	#[test]
	fn resize_regenerates_full_population() {
		let mut state = sky(PaintPolicy::Updated, 9);
		let before = positions(state.stars());

		state.resize(Viewport::new(1920.0, 1080.0));
		let after = state.stars();

		assert_eq!(after.len(), 210);
		assert_eq!(after.iter().filter(|s| s.is_shooting()).count(), 10);
		assert!(after.iter().all(|s| !before.contains(&(s.x, s.y))));
		assert_eq!(state.viewport(), Viewport::new(1920.0, 1080.0));
	}

	#[test]
	fn repeated_resizes_never_accumulate() {
		let mut state = sky(PaintPolicy::Updated, 10);
		for i in 0..50 {
			state.resize(Viewport::new(100.0 + i as f64, 100.0));
		}
		assert_eq!(state.stars().len(), 210);
	}

	#[test]
	fn frame_clears_before_painting() {
		let mut state = sky(PaintPolicy::Updated, 1);
		let surface = RecordingSurface::default();
		state.frame(16.0, Some(&surface)).unwrap();

		let ops = surface.take();
		assert_eq!(ops[0], Op::Clear(800.0, 600.0));
		assert!(ops[1..].iter().all(|op| matches!(op, Op::Glow { .. })));
		// One core per star plus one trail sample per shooting star.
		assert_eq!(ops.len(), 1 + 210 + 10);
	}

	#[test]
	fn frame_without_surface_still_advances() {
		let mut state = sky(PaintPolicy::Updated, 2);
		let shooting_before: Vec<f64> = state
			.stars()
			.iter()
			.filter(|s| s.is_shooting())
			.map(|s| s.x)
			.collect();

		state.frame::<RecordingSurface>(16.0, None).unwrap();

		let shooting_after: Vec<f64> = state
			.stars()
			.iter()
			.filter(|s| s.is_shooting())
			.map(|s| s.x)
			.collect();
		assert_ne!(shooting_before, shooting_after);
		assert_eq!(state.frames(), 1);
	}

	#[test]
	fn previous_policy_paints_one_frame_behind() {
		let mut state = sky(PaintPolicy::Previous, 4);
		let initial = state.stars().to_vec();
		let surface = RecordingSurface::default();

		state.frame(16.0, Some(&surface)).unwrap();
		let first = surface.take();

		// The first frame paints the freshly generated population: no trails yet.
		assert_eq!(first.len(), 1 + initial.len());
		let painted_x: Vec<f64> = first[1..]
			.iter()
			.map(|op| match op {
				Op::Glow { x, .. } => *x,
				Op::Clear(..) => unreachable!(),
			})
			.collect();
		assert_eq!(painted_x, initial.iter().map(|s| s.x).collect::<Vec<_>>());
	}

	#[test]
	fn policies_agree_in_steady_state() {
		let mut updated = sky(PaintPolicy::Updated, 5);
		let mut previous = sky(PaintPolicy::Previous, 5);
		let updated_surface = RecordingSurface::default();
		let previous_surface = RecordingSurface::default();

		// Frame n of `Previous` paints what frame n-1 of `Updated` painted.
		let mut updated_frames = Vec::new();
		let mut previous_frames = Vec::new();
		for frame in 1..=4 {
			let now = frame as f64 * 16.0;
			updated.frame(now, Some(&updated_surface)).unwrap();
			previous.frame(now, Some(&previous_surface)).unwrap();
			updated_frames.push(updated_surface.take());
			previous_frames.push(previous_surface.take());
		}

		for n in 1..4 {
			assert_eq!(previous_frames[n], updated_frames[n - 1]);
		}
		assert_eq!(updated.stars(), previous.stars());
	}

	#[test]
	fn trails_stay_bounded_over_many_frames() {
		let mut state = sky(PaintPolicy::Updated, 6);
		for frame in 0..600 {
			state.frame::<RecordingSurface>(frame as f64 * 16.7, None).unwrap();
			for star in state.stars() {
				if let Some(trail) = star.trail() {
					assert!(trail.len() <= 15);
				}
			}
		}
		assert_eq!(state.stars().len(), 210);
	}
}
