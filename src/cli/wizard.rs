//! Step-by-step wizard collecting a conversion request
//!
//! # Flow
//!
//! 1. Conversion target (single file or directory)
//! 2. Input selection (file browser or top-level directory picker)
//! 3. Keep aspect ratio?
//! 4. Height, plus width when the aspect ratio is not kept
//! 5. Output format
//! 6. Quality
//! 7. Output directory
//! 8. Summary and confirmation
//!
//! Invalid answers are asked again; cancelling any prompt ends the wizard
//! before anything touches the filesystem.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::browser::{browse_for_file, select_directory, BrowseResult};
use super::prompts::Prompter;
use crate::error::WizardError;
use crate::pipeline::{
    ConversionRequest, DirectoryLister, EncodeSettings, InputSelection, OutputFormat, Quality,
    DEFAULT_OUTPUT_DIR, DEFAULT_QUALITY,
};
use crate::utils::{print_error, print_request_summary};

/// What the user wants to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    SingleFile,
    Directory,
}

/// How the wizard ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Everything answered and confirmed
    Proceed(ConversionRequest),
    /// User said no at the final confirmation
    Declined,
    /// Nothing available to select
    NothingSelected,
    /// User cancelled a prompt
    Cancelled,
}

/// Unwrap a prompt answer or end the wizard as cancelled
macro_rules! answered {
    ($answer:expr) => {
        match $answer {
            Some(value) => value,
            None => return Ok(WizardOutcome::Cancelled),
        }
    };
}

/// Run every step of the wizard starting from `start_dir`
pub fn run_wizard<P, L>(
    prompter: &mut P,
    lister: &L,
    start_dir: &Path,
) -> Result<WizardOutcome, WizardError>
where
    P: Prompter + ?Sized,
    L: DirectoryLister,
{
    let kind = answered!(ask_conversion_kind(prompter)?);

    let picked = match kind {
        ConversionKind::SingleFile => browse_for_file(prompter, lister, start_dir)?,
        ConversionKind::Directory => select_directory(prompter, lister, start_dir)?,
    };
    let input = match picked {
        BrowseResult::Selected(path) => match kind {
            ConversionKind::SingleFile => InputSelection::File(path),
            ConversionKind::Directory => InputSelection::Directory(path),
        },
        BrowseResult::NothingFound => return Ok(WizardOutcome::NothingSelected),
        BrowseResult::Cancelled => return Ok(WizardOutcome::Cancelled),
    };
    debug!(input = %input.path().display(), "input selected");

    let keep_aspect = answered!(prompter.confirm("Keep aspect ratio?", true)?);
    let height = answered!(ask_parsed(prompter, "Enter height (in pixels)", None, parse_dimension)?);
    let width = if keep_aspect {
        None
    } else {
        Some(answered!(ask_parsed(
            prompter,
            "Enter width (in pixels)",
            None,
            parse_dimension
        )?))
    };

    let format = answered!(ask_format(prompter)?);
    let default_quality = DEFAULT_QUALITY.to_string();
    let quality = answered!(ask_parsed(
        prompter,
        "Enter quality (1-100)",
        Some(&default_quality),
        parse_quality
    )?);
    let output = answered!(ask_parsed(
        prompter,
        "Enter output directory",
        Some(DEFAULT_OUTPUT_DIR),
        parse_output_dir
    )?);

    let request = ConversionRequest {
        input,
        output_dir: resolve_output_dir(start_dir, &output),
        settings: EncodeSettings {
            height,
            width,
            format,
            quality,
        },
    };

    print_request_summary(&request);

    if answered!(prompter.confirm("Proceed with conversion?", true)?) {
        Ok(WizardOutcome::Proceed(request))
    } else {
        Ok(WizardOutcome::Declined)
    }
}

/// Step 1: single file or whole directory
pub fn ask_conversion_kind<P>(prompter: &mut P) -> Result<Option<ConversionKind>, WizardError>
where
    P: Prompter + ?Sized,
{
    let items = vec!["Single file".to_string(), "Directory".to_string()];
    let choice = prompter.select("What would you like to convert?", &items, 0)?;
    Ok(choice.map(|index| {
        if index == 0 {
            ConversionKind::SingleFile
        } else {
            ConversionKind::Directory
        }
    }))
}

/// Step 5: output format
pub fn ask_format<P>(prompter: &mut P) -> Result<Option<OutputFormat>, WizardError>
where
    P: Prompter + ?Sized,
{
    let items: Vec<String> = OutputFormat::ALL
        .iter()
        .map(|format| format.label().to_string())
        .collect();
    let choice = prompter.select("Select output format:", &items, 0)?;
    Ok(choice.and_then(|index| OutputFormat::ALL.get(index).copied()))
}

/// Ask until the answer parses; `None` when the user cancels
fn ask_parsed<P, T>(
    prompter: &mut P,
    prompt: &str,
    default: Option<&str>,
    parse: fn(&str) -> Result<T, String>,
) -> Result<Option<T>, WizardError>
where
    P: Prompter + ?Sized,
{
    let validate = |text: &str| parse(text).map(|_| ());
    loop {
        let Some(text) = prompter.input(prompt, default, &validate)? else {
            return Ok(None);
        };
        match parse(&text) {
            Ok(value) => return Ok(Some(value)),
            Err(message) => print_error(&message),
        }
    }
}

/// Validate a pixel dimension (positive whole number)
pub fn parse_dimension(text: &str) -> Result<NonZeroU32, String> {
    text.trim()
        .parse::<NonZeroU32>()
        .map_err(|_| format!("'{}' is not a positive whole number", text.trim()))
}

/// Validate a quality value (whole number from 1 to 100)
pub fn parse_quality(text: &str) -> Result<Quality, String> {
    let value: u8 = text
        .trim()
        .parse()
        .map_err(|_| format!("Quality must be a whole number between 1 and 100, got '{}'", text.trim()))?;
    Quality::new(value)
}

/// Validate an output directory answer (anything but blank)
pub fn parse_output_dir(text: &str) -> Result<PathBuf, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err("Output directory cannot be empty".to_string())
    } else {
        Ok(PathBuf::from(trimmed))
    }
}

/// Relative output directories live under the start directory
pub fn resolve_output_dir(start_dir: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        start_dir.join(output)
    }
}
