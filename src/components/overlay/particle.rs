use super::pointer::PointerTracker;
use super::render::Surface;
use super::types::Bounds;

/// How far a particle is pushed per axis per frame while the pointer is near.
const REPEL_STEP: f64 = 2.0;

/// The two fixed particle hues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleColor {
	Cyan,
	Magenta,
}

impl ParticleColor {
	pub fn css(self) -> &'static str {
		match self {
			ParticleColor::Cyan => "#00ffff",
			ParticleColor::Magenta => "#ff00aa",
		}
	}
}

/// A single moving point: position, velocity, radius and one of two colors.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub dx: f64,
	pub dy: f64,
	pub radius: f64,
	pub color: ParticleColor,
}

impl Particle {
	/// One motion step: reflect off the bounds, drift away from a nearby
	/// pointer, advance by velocity, then draw.
	pub fn update(&mut self, bounds: Bounds, pointer: &PointerTracker, surface: &impl Surface) {
		if self.x >= bounds.width || self.x <= 0.0 {
			self.dx = -self.dx;
		}
		if self.y >= bounds.height || self.y <= 0.0 {
			self.dy = -self.dy;
		}

		if let Some((px, py)) = pointer.position() {
			let (dx, dy) = (px - self.x, py - self.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance < pointer.radius() + self.radius {
				// Per-axis nudge with a 10x-radius edge margin on the
				// side being pushed toward. The guards are asymmetric on
				// purpose; treating this as anything more principled than
				// "roughly repel" would change the look.
				let margin = self.radius * 10.0;
				if px < self.x && self.x < bounds.width - margin {
					self.x += REPEL_STEP;
				}
				if px > self.x && self.x > margin {
					self.x -= REPEL_STEP;
				}
				if py < self.y && self.y < bounds.height - margin {
					self.y += REPEL_STEP;
				}
				if py > self.y && self.y > margin {
					self.y -= REPEL_STEP;
				}
			}
		}

		self.x += self.dx;
		self.y += self.dy;
		self.draw(surface);
	}

	/// Render as a glowing filled circle.
	pub fn draw(&self, surface: &impl Surface) {
		surface.fill_circle(self.x, self.y, self.radius, self.color);
	}
}

#[cfg(test)]
mod tests {
	use super::super::render::test_surface::RecordingSurface;
	use super::*;

	fn particle(x: f64, y: f64, dx: f64, dy: f64) -> Particle {
		Particle {
			x,
			y,
			dx,
			dy,
			radius: 2.0,
			color: ParticleColor::Cyan,
		}
	}

	fn bounds() -> Bounds {
		Bounds::new(900.0, 900.0)
	}

	#[test]
	fn reflects_at_exact_zero_and_exact_bound() {
		let surface = RecordingSurface::default();
		let pointer = PointerTracker::default();

		let mut left = particle(0.0, 450.0, -0.5, 0.0);
		left.update(bounds(), &pointer, &surface);
		assert_eq!(left.dx, 0.5);
		assert_eq!(left.x, 0.5);

		let mut bottom = particle(450.0, 900.0, 0.0, 0.75);
		bottom.update(bounds(), &pointer, &surface);
		assert_eq!(bottom.dy, -0.75);
		assert_eq!(bottom.y, 899.25);
	}

	#[test]
	fn interior_particle_keeps_its_velocity() {
		let surface = RecordingSurface::default();
		let pointer = PointerTracker::default();

		let mut p = particle(100.0, 200.0, 0.5, -0.25);
		p.update(bounds(), &pointer, &surface);
		assert_eq!((p.dx, p.dy), (0.5, -0.25));
		assert_eq!((p.x, p.y), (100.5, 199.75));
	}

	#[test]
	fn unset_pointer_never_nudges() {
		let surface = RecordingSurface::default();
		let pointer = PointerTracker::default();

		// Zero velocity, so any displacement would come from the nudge.
		let mut p = particle(100.0, 100.0, 0.0, 0.0);
		p.update(bounds(), &pointer, &surface);
		assert_eq!((p.x, p.y), (100.0, 100.0));
	}

	#[test]
	fn nearby_pointer_pushes_away_on_each_axis() {
		let surface = RecordingSurface::default();
		let mut pointer = PointerTracker::default();
		pointer.observe(110.0, 80.0);

		let mut p = particle(100.0, 100.0, 0.0, 0.0);
		p.update(bounds(), &pointer, &surface);
		// Pointer is to the right and above: pushed left and down.
		assert_eq!((p.x, p.y), (98.0, 102.0));
	}

	#[test]
	fn nudge_respects_edge_margin() {
		let surface = RecordingSurface::default();
		let mut pointer = PointerTracker::default();
		pointer.observe(40.0, 100.0);

		// x == 15 is inside the 10x-radius (20 unit) margin, so the
		// leftward push is suppressed even though the pointer is in range.
		let mut p = particle(15.0, 100.0, 0.0, 0.0);
		p.update(bounds(), &pointer, &surface);
		assert_eq!((p.x, p.y), (15.0, 100.0));
	}

	#[test]
	fn pointer_out_of_range_is_ignored() {
		let surface = RecordingSurface::default();
		let mut pointer = PointerTracker::default();
		pointer.observe(500.0, 500.0);

		let mut p = particle(100.0, 100.0, 0.0, 0.0);
		p.update(bounds(), &pointer, &surface);
		assert_eq!((p.x, p.y), (100.0, 100.0));
	}

	#[test]
	fn update_draws_the_particle_once() {
		let surface = RecordingSurface::default();
		let pointer = PointerTracker::default();

		let mut p = particle(100.0, 100.0, 1.0, 1.0);
		p.update(bounds(), &pointer, &surface);

		let circles = surface.circles();
		assert_eq!(circles.len(), 1);
		assert_eq!(circles[0], (101.0, 101.0, 2.0, ParticleColor::Cyan));
	}
}
