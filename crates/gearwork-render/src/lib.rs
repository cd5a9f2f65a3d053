//! Rendering for the gearwork clock.
//!
//! Composes gear profiles with their rotation and mount point and draws
//! them, the dial and the hands onto a ratatui canvas. The two built-in
//! scenes are the see-through dial and the transmission panel.

mod color;
mod compose;
mod face;
mod renderer;
mod scene;

pub use color::{BACKDROP, fade, palette};
pub use compose::{fit_aspect, hand_tip, place_profile};
pub use renderer::ClockRenderer;
pub use scene::{GearFrame, Mount, Scene};
