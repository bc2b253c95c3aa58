//! Ctrl-C handling
//!
//! The terminal raises SIGINT itself when Ctrl-C is read at a prompt. While a
//! prompt is open the handler does nothing, so the read fails with
//! `Interrupted` and the wizard ends as cancelled. At any other time Ctrl-C
//! ends the process with status 1.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use console::Term;

use super::styling::print_error;

/// Number of live `PromptScope`s
static PROMPTING: AtomicUsize = AtomicUsize::new(0);

/// Install the process-wide Ctrl-C handler
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        if is_prompting() {
            return;
        }
        let _ = Term::stdout().show_cursor();
        println!();
        print_error("Operation cancelled by user.");
        std::process::exit(1);
    })
    .context("Failed to install Ctrl-C handler")
}

/// True while a `PromptScope` is alive
pub fn is_prompting() -> bool {
    PROMPTING.load(Ordering::SeqCst) > 0
}

/// Marks a stretch of interactive prompting; Ctrl-C inside it cancels the prompt
#[must_use = "the scope ends as soon as it is dropped"]
pub struct PromptScope {
    _private: (),
}

impl PromptScope {
    pub fn enter() -> Self {
        PROMPTING.fetch_add(1, Ordering::SeqCst);
        Self { _private: () }
    }
}

impl Drop for PromptScope {
    fn drop(&mut self) {
        PROMPTING.fetch_sub(1, Ordering::SeqCst);
    }
}
