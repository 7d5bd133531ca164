pub mod overlay;
pub mod render;

pub use overlay::{render_overlay, OverlayMessage};
pub use render::render;
