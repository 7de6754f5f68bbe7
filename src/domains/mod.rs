pub mod layout;
pub mod logger;
pub mod motion;
pub mod session;
pub mod strokes;
pub mod workspace;

pub use logger::*;
