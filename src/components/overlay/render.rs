use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particle::ParticleColor;
use super::types::Bounds;

const LINE_COLOR: (u8, u8, u8) = (139, 0, 255);
const GLOW_BLUR: f64 = 15.0;

/// The three drawing primitives the simulation needs. Implemented for the
/// live canvas and for a recording double in tests.
pub trait Surface {
	fn clear(&self, bounds: Bounds);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: ParticleColor);
	fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64, opacity: f64);
}

/// Live surface over a 2d canvas context.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl Surface for CanvasSurface {
	fn clear(&self, bounds: Bounds) {
		self.ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: ParticleColor) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		self.ctx.set_fill_style_str(color.css());
		self.ctx.set_shadow_blur(GLOW_BLUR);
		self.ctx.set_shadow_color(color.css());
		self.ctx.fill();
	}

	fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64, opacity: f64) {
		// Unclamped opacities from the connect pass can be negative;
		// those lines are fully transparent, so skip the stroke.
		if opacity <= 0.0 {
			return;
		}
		let (r, g, b) = LINE_COLOR;
		self.ctx
			.set_stroke_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, opacity));
		self.ctx.set_line_width(1.0);
		// Shadow blur from the last circle draw is left in place: the
		// lines share the particles' glow.
		self.ctx.begin_path();
		self.ctx.move_to(x1, y1);
		self.ctx.line_to(x2, y2);
		self.ctx.stroke();
	}
}

#[cfg(test)]
pub mod test_surface {
	use std::cell::RefCell;

	use super::*;

	/// Records every draw call so tests can assert on what was rendered,
	/// including opacities the live surface would drop.
	#[derive(Default)]
	pub struct RecordingSurface {
		clears: RefCell<usize>,
		circles: RefCell<Vec<(f64, f64, f64, ParticleColor)>>,
		lines: RefCell<Vec<(f64, f64, f64, f64, f64)>>,
	}

	impl RecordingSurface {
		pub fn clears(&self) -> usize {
			*self.clears.borrow()
		}

		pub fn circles(&self) -> Vec<(f64, f64, f64, ParticleColor)> {
			self.circles.borrow().clone()
		}

		pub fn lines(&self) -> Vec<(f64, f64, f64, f64, f64)> {
			self.lines.borrow().clone()
		}
	}

	impl Surface for RecordingSurface {
		fn clear(&self, _bounds: Bounds) {
			*self.clears.borrow_mut() += 1;
		}

		fn fill_circle(&self, x: f64, y: f64, radius: f64, color: ParticleColor) {
			self.circles.borrow_mut().push((x, y, radius, color));
		}

		fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64, opacity: f64) {
			self.lines.borrow_mut().push((x1, y1, x2, y2, opacity));
		}
	}
}
