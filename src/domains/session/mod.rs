pub mod cooperative;
pub mod drawing_session;
pub mod events;

pub use cooperative::{split_text, CooperativeRun};
pub use drawing_session::{DrawingSession, SessionSettings, TickReport};
pub use events::SessionEvent;
