//! Building ffmpeg invocations from conversion settings

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::settings::{EncodeSettings, OutputFormat, Quality};

/// A single transcoding invocation: program plus ordered arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl FfmpegCommand {
    /// Arguments as lossy UTF-8 strings, for logging and assertions
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// Turn into a `std::process::Command` ready to spawn
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for FfmpegCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Build the invocation converting `input` into `output`.
///
/// Argument order: `-i <input> -y -vf <scale> <quality flag> <value> <output>`.
pub fn build_command(
    program: impl AsRef<OsStr>,
    input: &Path,
    output: &Path,
    settings: &EncodeSettings,
) -> FfmpegCommand {
    let (quality_flag, quality_value) = quality_argument(settings.format, settings.quality);

    let args = vec![
        OsString::from("-i"),
        input.as_os_str().to_os_string(),
        OsString::from("-y"),
        OsString::from("-vf"),
        OsString::from(scale_filter(settings)),
        OsString::from(quality_flag),
        OsString::from(quality_value.to_string()),
        output.as_os_str().to_os_string(),
    ];

    FfmpegCommand {
        program: program.as_ref().to_os_string(),
        args,
    }
}

/// Scale filter expression; `-1` lets the tool derive the width from the aspect ratio
pub fn scale_filter(settings: &EncodeSettings) -> String {
    match settings.width {
        Some(width) => format!("scale={}:{}", width, settings.height),
        None => format!("scale=-1:{}", settings.height),
    }
}

/// Format-specific quality flag and its value
pub fn quality_argument(format: OutputFormat, quality: Quality) -> (&'static str, u8) {
    match format {
        OutputFormat::Png => ("-quality", png_quality(quality)),
        OutputFormat::Jpg => ("-q:v", jpg_quality(quality)),
        OutputFormat::Webp => ("-quality", quality.get()),
    }
}

/// `100 - round((q - 1) * 100 / 99)`: quality 1 maps to 100, quality 100 to 0
pub fn png_quality(quality: Quality) -> u8 {
    let step = (f64::from(quality.get() - 1) * 100.0 / 99.0).round() as u8;
    100 - step
}

/// `31 - round((q - 1) * 30 / 99)`: the `-q:v` scale is 1 (best) to 31 (worst)
pub fn jpg_quality(quality: Quality) -> u8 {
    let step = (f64::from(quality.get() - 1) * 30.0 / 99.0).round() as u8;
    31 - step
}

/// Output path for `input`: same stem, the format's extension, inside `output_dir`
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    let mut file_name = stem;
    file_name.push(".");
    file_name.push(format.extension());
    output_dir.join(file_name)
}
