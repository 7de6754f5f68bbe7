pub mod agent;
pub mod pathfinder;
pub mod settings;

pub use agent::*;
pub use pathfinder::*;
pub use settings::*;
