//! End-to-end session tests: scripted answers, a real temporary directory
//! and a recording tool runner

mod common;

use std::ffi::OsStr;
use std::process::ExitCode;

use common::{create_temp_files, file_names, Answer, FakeRunner, ScriptedPrompter, ToolBehavior};
use ffwizard::app::{locate_tool, run_session, SessionEnd};
use ffwizard::cli::{Prompter, Validator};
use ffwizard::pipeline::FsLister;
use ffwizard::utils::is_prompting;
use ffwizard::WizardError;

/// Answers every prompt the way the terminal does after Ctrl-C, noting
/// whether Ctrl-C was being routed to the prompt at that moment
#[derive(Default)]
struct InterruptingPrompter {
    prompting_seen: Vec<bool>,
}

impl Prompter for InterruptingPrompter {
    fn select(&mut self, _: &str, _: &[String], _: usize) -> Result<Option<usize>, WizardError> {
        self.prompting_seen.push(is_prompting());
        Ok(None)
    }

    fn confirm(&mut self, _: &str, _: bool) -> Result<Option<bool>, WizardError> {
        self.prompting_seen.push(is_prompting());
        Ok(None)
    }

    fn input(
        &mut self,
        _: &str,
        _: Option<&str>,
        _: Validator<'_>,
    ) -> Result<Option<String>, WizardError> {
        self.prompting_seen.push(is_prompting());
        Ok(None)
    }
}

fn directory_answers(confirm: bool) -> Vec<Answer> {
    vec![
        Answer::Choose("Directory"),
        Answer::Choose("album"),
        Answer::Confirm(true),
        Answer::Text("200"),
        Answer::Choose("WebP"),
        Answer::Default,
        Answer::Default,
        Answer::Confirm(confirm),
    ]
}

#[test]
fn test_confirmed_session_converts_album() {
    let temp_dir = create_temp_files(&["album/a.png", "album/b.txt", "album/c.JPG"]);
    let mut prompter = ScriptedPrompter::new(directory_answers(true));
    let mut runner = FakeRunner::new();

    let end = run_session(
        &mut prompter,
        &FsLister,
        &mut runner,
        OsStr::new("ffmpeg"),
        temp_dir.path(),
    )
    .unwrap();

    let SessionEnd::Completed(outcome) = &end else {
        panic!("expected a completed session, got {:?}", end);
    };
    assert_eq!(outcome.succeeded(), 2);
    assert_eq!(outcome.failed(), 0);
    assert_eq!(file_names(&outcome.converted), vec!["a.webp", "c.webp"]);
    assert!(temp_dir.path().join("out").is_dir());
    assert!(!end.is_failure());
}

#[test]
fn test_declined_session_touches_nothing() {
    let temp_dir = create_temp_files(&["album/a.png"]);
    let mut prompter = ScriptedPrompter::new(directory_answers(false));
    let mut runner = FakeRunner::new();

    let end = run_session(
        &mut prompter,
        &FsLister,
        &mut runner,
        OsStr::new("ffmpeg"),
        temp_dir.path(),
    )
    .unwrap();

    assert_eq!(end, SessionEnd::Declined);
    assert!(!end.is_failure());
    assert!(runner.commands.is_empty());
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_cancelled_session_fails_without_side_effects() {
    let temp_dir = create_temp_files(&["album/a.png"]);
    let mut answers = directory_answers(true);
    answers.truncate(5);
    answers.push(Answer::Cancel);
    let mut prompter = ScriptedPrompter::new(answers);
    let mut runner = FakeRunner::new();

    let end = run_session(
        &mut prompter,
        &FsLister,
        &mut runner,
        OsStr::new("ffmpeg"),
        temp_dir.path(),
    )
    .unwrap();

    assert_eq!(end, SessionEnd::Cancelled);
    assert!(end.is_failure());
    assert!(runner.commands.is_empty());
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_interrupt_at_prompt_ends_session_with_failure_status() {
    let temp_dir = create_temp_files(&["album/a.png"]);
    let mut prompter = InterruptingPrompter::default();
    let mut runner = FakeRunner::new();

    let end = run_session(
        &mut prompter,
        &FsLister,
        &mut runner,
        OsStr::new("ffmpeg"),
        temp_dir.path(),
    )
    .unwrap();

    assert_eq!(end, SessionEnd::Cancelled);
    assert_eq!(
        format!("{:?}", end.exit_code()),
        format!("{:?}", ExitCode::FAILURE)
    );
    assert_eq!(prompter.prompting_seen, vec![true]);
    assert!(runner.commands.is_empty());
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_session_reports_per_file_failures() {
    let temp_dir = create_temp_files(&["album/1.png", "album/2.png", "album/3.png"]);
    let mut prompter = ScriptedPrompter::new(directory_answers(true));
    let mut runner = FakeRunner::with_behaviors(vec![
        ToolBehavior::Succeed,
        ToolBehavior::Fail("Conversion failed!"),
        ToolBehavior::Succeed,
    ]);

    let end = run_session(
        &mut prompter,
        &FsLister,
        &mut runner,
        OsStr::new("ffmpeg"),
        temp_dir.path(),
    )
    .unwrap();

    let SessionEnd::Completed(outcome) = end else {
        panic!("expected a completed session");
    };
    assert_eq!(runner.commands.len(), 3);
    assert_eq!((outcome.succeeded(), outcome.failed()), (2, 1));
    assert_eq!(outcome.failures[0].reason, "Conversion failed!");
}

#[test]
fn test_nothing_to_select_is_not_a_failure() {
    let temp_dir = create_temp_files(&["loose.png"]);
    let mut prompter = ScriptedPrompter::new(vec![Answer::Choose("Directory")]);
    let mut runner = FakeRunner::new();

    let end = run_session(
        &mut prompter,
        &FsLister,
        &mut runner,
        OsStr::new("ffmpeg"),
        temp_dir.path(),
    )
    .unwrap();

    assert_eq!(end, SessionEnd::NothingSelected);
    assert!(!end.is_failure());
}

#[test]
fn test_locate_missing_tool() {
    let result = locate_tool("ffwizard-no-such-transcoder");

    assert!(matches!(
        result,
        Err(WizardError::ToolNotFound { ref program, .. }) if program == "ffwizard-no-such-transcoder"
    ));
}
