pub mod field;
pub mod obstacle;
pub mod types;

pub use field::*;
pub use obstacle::*;
pub use types::*;
