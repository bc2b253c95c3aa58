//! Conversion parameters collected by the wizard

use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

/// Default quality offered by the wizard
pub const DEFAULT_QUALITY: u8 = 75;

/// Default output directory offered by the wizard
pub const DEFAULT_OUTPUT_DIR: &str = "out/";

/// Default name of the transcoding binary
pub const DEFAULT_TOOL: &str = "ffmpeg";

/// Target image format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpg,
    Webp,
}

impl OutputFormat {
    /// All formats in the order they are offered to the user
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Png, OutputFormat::Jpg, OutputFormat::Webp];

    /// File extension (without the dot) used for converted files
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Webp => "webp",
        }
    }

    /// Human-readable label for menus
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpg => "JPG",
            OutputFormat::Webp => "WebP",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// User-facing quality, always within 1..=100 (higher is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Create a quality value, rejecting anything outside 1..=100
    pub fn new(value: u8) -> Result<Self, String> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "Quality must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            ))
        }
    }

    /// Create a quality value, clamping into 1..=100
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(DEFAULT_QUALITY)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the command builder needs besides the file paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSettings {
    pub height: NonZeroU32,
    /// `None` keeps the aspect ratio and lets the tool infer the width
    pub width: Option<NonZeroU32>,
    pub format: OutputFormat,
    pub quality: Quality,
}

impl EncodeSettings {
    pub fn keeps_aspect_ratio(&self) -> bool {
        self.width.is_none()
    }
}

/// What the user chose to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSelection {
    File(PathBuf),
    Directory(PathBuf),
}

impl InputSelection {
    pub fn path(&self) -> &Path {
        match self {
            InputSelection::File(path) | InputSelection::Directory(path) => path,
        }
    }
}

/// A fully specified conversion, ready to hand to the batch converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input: InputSelection,
    pub output_dir: PathBuf,
    pub settings: EncodeSettings,
}
