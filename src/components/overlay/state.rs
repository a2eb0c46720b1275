use rand::SeedableRng;
use rand::rngs::StdRng;

use super::field::ParticleField;
use super::pointer::PointerTracker;
use super::render::Surface;
use super::types::Bounds;

/// All simulation state for one overlay instance: bounds, the particle
/// collection, the pointer tracker and the RNG used for (re)seeding.
pub struct OverlayState {
	pub bounds: Bounds,
	field: ParticleField,
	pointer: PointerTracker,
	rng: StdRng,
}

impl OverlayState {
	pub fn new(width: f64, height: f64) -> Self {
		Self::with_rng(width, height, StdRng::from_entropy())
	}

	pub fn with_rng(width: f64, height: f64, mut rng: StdRng) -> Self {
		let bounds = Bounds::new(width, height);
		let mut field = ParticleField::default();
		field.init(bounds, &mut rng);
		Self {
			bounds,
			field,
			pointer: PointerTracker::default(),
			rng,
		}
	}

	/// One animation frame: wipe the surface, advance and draw every
	/// particle, then draw the connecting edges. The caller decides how
	/// often (and whether) to keep calling this.
	pub fn frame(&mut self, surface: &impl Surface) {
		surface.clear(self.bounds);
		self.field.step(self.bounds, &self.pointer, surface);
		self.field.connect(self.bounds, surface);
	}

	/// Adopt new surface dimensions and reseed the field from scratch.
	/// Prior motion state is deliberately lost.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.bounds = Bounds::new(width, height);
		self.field.init(self.bounds, &mut self.rng);
	}

	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer.observe(x, y);
	}

	pub fn particle_count(&self) -> usize {
		self.field.len()
	}
}

#[cfg(test)]
mod tests {
	use super::super::render::test_surface::RecordingSurface;
	use super::*;

	fn seeded(width: f64, height: f64) -> OverlayState {
		OverlayState::with_rng(width, height, StdRng::seed_from_u64(42))
	}

	#[test]
	fn new_state_is_seeded_to_the_area_rule() {
		assert_eq!(seeded(900.0, 900.0).particle_count(), 90);
	}

	#[test]
	fn frame_clears_once_and_draws_every_particle() {
		let mut state = seeded(900.0, 900.0);
		let surface = RecordingSurface::default();
		state.frame(&surface);
		assert_eq!(surface.clears(), 1);
		assert_eq!(surface.circles().len(), 90);
	}

	#[test]
	fn loop_runs_for_an_injected_number_of_frames() {
		let mut state = seeded(450.0, 450.0);
		let surface = RecordingSurface::default();
		let frames = 10;
		for _ in 0..frames {
			state.frame(&surface);
		}
		assert_eq!(surface.clears(), frames);
		assert_eq!(surface.circles().len(), frames * state.particle_count());
	}

	#[test]
	fn resize_reseeds_the_field() {
		let mut state = seeded(900.0, 900.0);
		state.resize(300.0, 300.0);
		assert_eq!(state.bounds, Bounds::new(300.0, 300.0));
		assert_eq!(state.particle_count(), 10);
	}

	#[test]
	fn pointer_moves_reach_the_particles() {
		// Identically seeded states, one with the pointer parked next to
		// an interior particle: the repel nudge must make the frames differ.
		let mut quiet = seeded(900.0, 900.0);
		let mut poked = seeded(900.0, 900.0);
		let (idx, px, py) = quiet
			.field
			.particles()
			.iter()
			.enumerate()
			.find(|(_, p)| p.x > 50.0 && p.x < 850.0 && p.y > 50.0 && p.y < 850.0)
			.map(|(i, p)| (i, p.x + 5.0, p.y + 5.0))
			.unwrap();
		poked.pointer_moved(px, py);

		let (quiet_surface, poked_surface) =
			(RecordingSurface::default(), RecordingSurface::default());
		quiet.frame(&quiet_surface);
		poked.frame(&poked_surface);
		assert_ne!(quiet_surface.circles()[idx], poked_surface.circles()[idx]);
	}
}
