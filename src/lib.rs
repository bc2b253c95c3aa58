//! ffwizard: Interactive Image Conversion Library
//!
//! Collects resize and format choices through a terminal wizard, then runs
//! ffmpeg once per selected image.

pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use error::WizardError;
