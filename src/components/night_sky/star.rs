//! Star particles: twinkling background stars and shooting stars with trails.

use std::collections::VecDeque;

/// Lowest opacity a twinkling star reaches.
pub const TWINKLE_MIN: f64 = 0.4;
/// Highest opacity a twinkling star reaches.
pub const TWINKLE_MAX: f64 = 1.0;

const TWINKLE_BASE: f64 = 0.7;
const TWINKLE_AMPLITUDE: f64 = 0.3;

/// A single point of light in the sky.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
	/// Stable for the lifetime of the population, including across recycles.
	pub id: u32,
	pub x: f64,
	pub y: f64,
	/// Radius scale used by the renderer.
	pub size: f64,
	/// Current alpha in `[0, 1]`.
	pub opacity: f64,
	pub kind: StarKind,
}

/// Variant-specific state.
#[derive(Clone, Debug, PartialEq)]
pub enum StarKind {
	/// Stationary star whose opacity oscillates with time.
	Twinkling { twinkle_speed: f64 },
	/// Moving star leaving a fading trail.
	Shooting { speed: f64, trail: Trail },
}

impl Star {
	pub fn is_shooting(&self) -> bool {
		matches!(self.kind, StarKind::Shooting { .. })
	}

	pub fn trail(&self) -> Option<&Trail> {
		match &self.kind {
			StarKind::Shooting { trail, .. } => Some(trail),
			StarKind::Twinkling { .. } => None,
		}
	}
}

/// Opacity of a twinkling star at `now` milliseconds.
///
/// `sin(now * speed) * 0.3 + 0.7`, kept inside `[TWINKLE_MIN, TWINKLE_MAX]`.
pub fn twinkle_opacity(now: f64, twinkle_speed: f64) -> f64 {
	((now * twinkle_speed).sin() * TWINKLE_AMPLITUDE + TWINKLE_BASE).clamp(TWINKLE_MIN, TWINKLE_MAX)
}

/// One recorded position of a shooting star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
	pub x: f64,
	pub y: f64,
	pub opacity: f64,
}

/// Bounded history of recent positions, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
	points: VecDeque<TrailPoint>,
	capacity: usize,
}

impl Trail {
	pub fn new(capacity: usize) -> Self {
		Self {
			points: VecDeque::with_capacity(capacity),
			capacity,
		}
	}

	/// Appends a sample, evicting the oldest ones past capacity.
	pub fn push(&mut self, point: TrailPoint) {
		self.points.push_back(point);
		while self.points.len() > self.capacity {
			self.points.pop_front();
		}
	}

	pub fn clear(&mut self) {
		self.points.clear();
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn iter(&self) -> impl ExactSizeIterator<Item = &TrailPoint> {
		self.points.iter()
	}
}
