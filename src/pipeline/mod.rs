//! Pipeline module - scanning, command building and batch conversion

pub mod batch;
pub mod command;
pub mod scanner;
pub mod settings;

pub use batch::*;
pub use command::*;
pub use scanner::*;
pub use settings::*;
