use rand::Rng;

use super::particle::{Particle, ParticleColor};
use super::pointer::PointerTracker;
use super::render::Surface;
use super::types::Bounds;

/// One particle per this many square units of canvas.
const AREA_PER_PARTICLE: f64 = 9000.0;

/// Squared distance at which a connecting edge fades out entirely.
const EDGE_FADE: f64 = 20000.0;

/// Uniform position along one axis keeping `2 * radius` clear of both edges.
/// A dimension too narrow for that clearance leaves an empty sampling range,
/// so such particles sit at the axis midpoint instead.
fn sample_axis(rng: &mut impl Rng, dimension: f64, radius: f64) -> f64 {
	if dimension > radius * 4.0 {
		rng.gen_range(radius * 2.0..dimension - radius * 2.0)
	} else {
		dimension / 2.0
	}
}

/// The particle collection: seeds itself from the canvas area, advances every
/// particle per frame and draws the connecting edges between close pairs.
#[derive(Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
}

impl ParticleField {
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Replace all particles with a fresh batch sized to the canvas area.
	///
	/// Count is `floor(area / 9000)`; each particle gets a radius in [1, 3),
	/// a position keeping it `2 * radius` clear of every edge, velocity
	/// components in [-1, 1) and a coin-flip color.
	pub fn init(&mut self, bounds: Bounds, rng: &mut impl Rng) {
		self.particles.clear();
		let count = (bounds.area() / AREA_PER_PARTICLE) as usize;
		for _ in 0..count {
			let radius = rng.gen_range(1.0..3.0);
			let x = sample_axis(rng, bounds.width, radius);
			let y = sample_axis(rng, bounds.height, radius);
			let dx = rng.gen_range(-1.0..1.0);
			let dy = rng.gen_range(-1.0..1.0);
			let color = if rng.gen_bool(0.5) {
				ParticleColor::Cyan
			} else {
				ParticleColor::Magenta
			};
			self.particles.push(Particle {
				x,
				y,
				dx,
				dy,
				radius,
				color,
			});
		}
	}

	/// Advance and draw every particle. No inter-particle dependency here,
	/// so order does not matter.
	pub fn step(&mut self, bounds: Bounds, pointer: &PointerTracker, surface: &impl Surface) {
		for particle in &mut self.particles {
			particle.update(bounds, pointer, surface);
		}
	}

	/// Draw an edge between every pair closer than the size-derived
	/// threshold, fading with squared distance. O(n^2), fine at the
	/// densities the area rule allows.
	pub fn connect(&self, bounds: Bounds, surface: &impl Surface) {
		let threshold = (bounds.width / 7.0) * (bounds.height / 7.0);
		for (a, pa) in self.particles.iter().enumerate() {
			for pb in &self.particles[a + 1..] {
				let (dx, dy) = (pa.x - pb.x, pa.y - pb.y);
				let dist_sq = dx * dx + dy * dy;
				if dist_sq < threshold {
					// Not clamped: past EDGE_FADE this goes negative and
					// the surface drops it.
					let opacity = 1.0 - dist_sq / EDGE_FADE;
					surface.line(pa.x, pa.y, pb.x, pb.y, opacity);
				}
			}
		}
	}
}
