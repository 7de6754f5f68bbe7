pub mod drawing_service;

pub use drawing_service::*;
