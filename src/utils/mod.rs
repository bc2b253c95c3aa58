//! Terminal helpers: styling, spinners, logging and Ctrl-C handling

pub mod interrupt;
pub mod logging;
pub mod progress;
pub mod styling;

pub use interrupt::*;
pub use logging::*;
pub use progress::*;
pub use styling::*;
