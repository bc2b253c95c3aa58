//! Interactive prompts using dialoguer

use std::io;

use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::error::WizardError;

/// Answers a single question; `Err` explains why the answer is not acceptable
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Asks the user questions.
///
/// Every method returns `Ok(None)` when the user cancels (Esc, Ctrl-C or end
/// of input). The wizard only talks to the terminal through this trait.
pub trait Prompter {
    /// Pick one of `items`, returning its index
    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, WizardError>;

    /// Yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>, WizardError>;

    /// Free text answer, pre-filled with `default` when given
    fn input(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<Option<String>, WizardError>;
}

/// Prompts on the real terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, WizardError> {
        let result = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt();
        interpret(result).map(Option::flatten)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>, WizardError> {
        let result = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt();
        interpret(result).map(Option::flatten)
    }

    fn input(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<Option<String>, WizardError> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let result = input
            .validate_with(|text: &String| validate(text.as_str()))
            .interact_text();
        interpret(result)
    }
}

/// Turn interrupts into a cancellation and anything else into an error
fn interpret<T>(result: dialoguer::Result<T>) -> Result<Option<T>, WizardError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) if is_cancellation(&err) => {
            // dialoguer hides the cursor while a menu is open
            let _ = Term::stdout().show_cursor();
            Ok(None)
        }
        Err(dialoguer::Error::IO(err)) => Err(WizardError::Prompt(err)),
    }
}

fn is_cancellation(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
    )
}
