//! Batch conversion: one tool invocation per input image

use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use console::style;
use tracing::{debug, info, warn};

use super::command::{build_command, output_path_for, FfmpegCommand};
use super::scanner::{entry_name, DirectoryLister};
use super::settings::{ConversionRequest, InputSelection};
use crate::error::WizardError;
use crate::report::ConversionOutcome;
use crate::utils::{create_spinner, finish_with_failure, finish_with_success};

/// Maximum number of characters of tool diagnostics shown for a failed file
pub const ERROR_EXCERPT_LEN: usize = 100;

/// What the batch converter needs to know about a finished invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// True when the tool exited with status zero
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stderr: String,
}

/// Executes transcoding commands.
///
/// `ProcessRunner` spawns the real binary; tests substitute a recorder.
pub trait ToolRunner {
    fn run(&mut self, command: &FfmpegCommand) -> io::Result<ToolOutput>;
}

/// Runs each command as a synchronous subprocess, capturing its output
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&mut self, command: &FfmpegCommand) -> io::Result<ToolOutput> {
        let mut cmd = command.to_command();
        let output = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(ToolOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Expand the selection into the files to convert.
///
/// A directory contributes its immediate recognized images only (no recursion),
/// in sorted order.
pub fn collect_inputs(selection: &InputSelection, lister: &impl DirectoryLister) -> Vec<PathBuf> {
    match selection {
        InputSelection::File(path) => vec![path.clone()],
        InputSelection::Directory(dir) => lister
            .list(dir)
            .images
            .into_iter()
            .map(|image| image.path)
            .collect(),
    }
}

/// Convert every input file of `request`, one at a time.
///
/// The output directory is created first; failing to create it aborts the
/// batch. Individual file failures are counted and the loop moves on.
pub fn convert_batch(
    request: &ConversionRequest,
    program: &OsStr,
    lister: &impl DirectoryLister,
    runner: &mut impl ToolRunner,
) -> Result<ConversionOutcome, WizardError> {
    let inputs = collect_inputs(&request.input, lister);
    let mut outcome = ConversionOutcome::default();

    if inputs.is_empty() {
        println!(
            "\n    {} No image files found to convert.",
            style("✗").red().bold()
        );
        return Ok(outcome);
    }

    std::fs::create_dir_all(&request.output_dir).map_err(|source| {
        WizardError::OutputDirectory {
            path: request.output_dir.clone(),
            source,
        }
    })?;

    let total = inputs.len();
    info!(
        files = total,
        format = %request.settings.format,
        output = %request.output_dir.display(),
        "starting batch"
    );
    println!(
        "\n    {} Converting {} image(s)...\n",
        style("◆").cyan().bold(),
        style(total).yellow().bold()
    );

    for (index, input) in inputs.iter().enumerate() {
        let output = output_path_for(input, &request.output_dir, request.settings.format);
        let command = build_command(program, input, &output, &request.settings);
        let name = entry_name(input);

        let spinner = create_spinner(&format!("[{}/{}] Converting {}...", index + 1, total, name));
        debug!(command = %command, "running tool");

        match runner.run(&command) {
            Ok(result) if result.success => {
                finish_with_success(&spinner, &format!("[{}/{}] {}", index + 1, total, name));
                outcome.record_success(output);
            }
            Ok(result) => {
                let reason = failure_excerpt(&result);
                warn!(input = %input.display(), code = ?result.exit_code, "conversion failed");
                finish_with_failure(
                    &spinner,
                    &format!("[{}/{}] {}: {}", index + 1, total, name, reason),
                );
                outcome.record_failure(input.clone(), reason);
            }
            Err(err) => {
                let reason = truncate_chars(&err.to_string(), ERROR_EXCERPT_LEN);
                warn!(input = %input.display(), error = %err, "could not run tool");
                finish_with_failure(
                    &spinner,
                    &format!("[{}/{}] {}: {}", index + 1, total, name, reason),
                );
                outcome.record_failure(input.clone(), reason);
            }
        }
    }

    info!(
        succeeded = outcome.succeeded(),
        failed = outcome.failed(),
        "batch finished"
    );
    Ok(outcome)
}

/// Short description of why the tool failed.
///
/// ffmpeg prints its banner first and the actual error last, so the last
/// non-empty stderr line is the most useful excerpt.
pub fn failure_excerpt(output: &ToolOutput) -> String {
    let last_line = output
        .stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last();

    match (last_line, output.exit_code) {
        (Some(line), _) => truncate_chars(line, ERROR_EXCERPT_LEN),
        (None, Some(code)) => format!("exited with status {}", code),
        (None, None) => "terminated by signal".to_string(),
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
