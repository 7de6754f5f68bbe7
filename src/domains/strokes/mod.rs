pub mod glyphs;
pub mod interpolate;

pub use glyphs::*;
pub use interpolate::*;
