pub mod engine;
pub mod settings;
pub mod vector;

pub use engine::{build_path, TextLayout};
pub use settings::*;
pub use vector::*;
