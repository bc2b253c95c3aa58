//! Session driver: tool lookup, wizard, batch conversion and final report

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::info;

use crate::cli::{run_wizard, Prompter, WizardOutcome};
use crate::error::WizardError;
use crate::pipeline::{convert_batch, DirectoryLister, ToolRunner};
use crate::report::ConversionOutcome;
use crate::utils::{print_error, print_success, PromptScope};

/// How a wizard session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The batch ran (possibly with per-file failures)
    Completed(ConversionOutcome),
    /// User declined the final confirmation
    Declined,
    /// Nothing could be selected
    NothingSelected,
    /// User interrupted a prompt
    Cancelled,
}

impl SessionEnd {
    /// Interrupts count as failures; declining or finding nothing does not
    pub fn is_failure(&self) -> bool {
        matches!(self, SessionEnd::Cancelled)
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_failure() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Find the transcoding program on PATH (or accept an explicit path)
pub fn locate_tool(program: &str) -> Result<PathBuf, WizardError> {
    let path = which::which(program).map_err(|source| WizardError::ToolNotFound {
        program: program.to_string(),
        source,
    })?;
    info!(tool = %path.display(), "using transcoding tool");
    Ok(path)
}

/// Run the wizard and, if confirmed, the batch conversion
pub fn run_session<P, L, R>(
    prompter: &mut P,
    lister: &L,
    runner: &mut R,
    program: &OsStr,
    start_dir: &Path,
) -> Result<SessionEnd, WizardError>
where
    P: Prompter + ?Sized,
    L: DirectoryLister,
    R: ToolRunner,
{
    let answers = {
        let _scope = PromptScope::enter();
        run_wizard(prompter, lister, start_dir)?
    };

    let request = match answers {
        WizardOutcome::Proceed(request) => request,
        WizardOutcome::Declined => {
            print_error("Conversion cancelled.");
            return Ok(SessionEnd::Declined);
        }
        WizardOutcome::NothingSelected => {
            print_error("No file/directory selected. Exiting.");
            return Ok(SessionEnd::NothingSelected);
        }
        WizardOutcome::Cancelled => {
            println!();
            print_error("Operation cancelled by user.");
            return Ok(SessionEnd::Cancelled);
        }
    };

    let outcome = convert_batch(&request, program, lister, runner)?;
    outcome.display();
    if outcome.succeeded() > 0 {
        print_success(&format!(
            "Output written to {}",
            request.output_dir.display()
        ));
    }
    Ok(SessionEnd::Completed(outcome))
}
