/// Distance within which particles react to the pointer.
pub const INTERACTION_RADIUS: f64 = 150.0;

/// Last-known pointer position. Starts unknown and stays set forever after
/// the first pointer-move; there is no explicit reset.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
	position: Option<(f64, f64)>,
}

impl PointerTracker {
	pub fn observe(&mut self, x: f64, y: f64) {
		self.position = Some((x, y));
	}

	pub fn position(&self) -> Option<(f64, f64)> {
		self.position
	}

	pub fn radius(&self) -> f64 {
		INTERACTION_RADIUS
	}
}
