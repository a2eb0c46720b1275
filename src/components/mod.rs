//! Reusable UI components.

pub mod overlay;
pub mod tabs;
pub mod tilt_card;
