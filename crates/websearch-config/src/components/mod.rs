//! Configuration sections

pub mod logging;
pub mod search;

pub use logging::*;
pub use search::*;
