//! Animated particle overlay: a per-frame simulation of glowing drifting
//! points with pointer repulsion and proximity-faded connecting edges.

mod component;
mod field;
mod particle;
mod pointer;
mod render;
mod state;
mod types;

pub use component::ParticleOverlay;
