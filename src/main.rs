//! ffwizard: FFmpeg CLI Wizard
//!
//! An interactive command-line tool that walks through picking images,
//! dimensions, format and quality, then converts them with ffmpeg.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use ffwizard::app::{locate_tool, run_session, SessionEnd};
use ffwizard::cli::{Cli, TerminalPrompter};
use ffwizard::pipeline::{FsLister, ProcessRunner};
use ffwizard::utils::{
    init_logging, install_interrupt_handler, print_banner, print_error, print_info,
};
use ffwizard::WizardError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(end) => end.exit_code(),
        Err(err) => {
            if let Some(WizardError::ToolNotFound { program, .. }) =
                err.downcast_ref::<WizardError>()
            {
                print_error(&format!(
                    "Error: {} is not installed or not in PATH.",
                    program
                ));
                print_info("Please install FFmpeg: https://ffmpeg.org/download.html");
            } else {
                print_error(&format!("An error occurred: {:#}", err));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<SessionEnd> {
    init_logging(cli.verbose)?;
    install_interrupt_handler()?;

    print_banner(env!("CARGO_PKG_VERSION"));

    // Checked before any prompt so a missing tool fails fast
    let program = locate_tool(&cli.ffmpeg)?;
    let start_dir = cli.start_dir()?;

    let mut prompter = TerminalPrompter::new();
    let end = run_session(
        &mut prompter,
        &FsLister,
        &mut ProcessRunner,
        program.as_os_str(),
        &start_dir,
    )?;

    Ok(end)
}
