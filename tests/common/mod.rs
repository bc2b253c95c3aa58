//! Shared test utilities: scripted prompts, an in-memory directory tree and a
//! recording tool runner

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use ffwizard::cli::{Prompter, Validator};
use ffwizard::pipeline::{DirectoryLister, DirectoryListing, FfmpegCommand, ImageEntry, ToolOutput, ToolRunner};
use ffwizard::WizardError;
use tempfile::TempDir;

/// A scripted answer for the next prompt
#[derive(Debug, Clone)]
pub enum Answer {
    /// Pick the first menu item containing this text
    Choose(&'static str),
    Confirm(bool),
    Text(&'static str),
    /// Accept the pre-filled default
    Default,
    /// Cancel the prompt
    Cancel,
}

/// Prompter that replays a fixed list of answers and records every prompt
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Answer {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for prompt '{}'", prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, WizardError> {
        match self.next(prompt) {
            Answer::Choose(text) => {
                let index = items
                    .iter()
                    .position(|item| item.contains(text))
                    .unwrap_or_else(|| panic!("'{}' not offered in {:?}", text, items));
                Ok(Some(index))
            }
            Answer::Default => Ok(Some(default)),
            Answer::Cancel => Ok(None),
            other => panic!("unexpected answer {:?} for select '{}'", other, prompt),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>, WizardError> {
        match self.next(prompt) {
            Answer::Confirm(value) => Ok(Some(value)),
            Answer::Default => Ok(Some(default)),
            Answer::Cancel => Ok(None),
            other => panic!("unexpected answer {:?} for confirm '{}'", other, prompt),
        }
    }

    fn input(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        _validate: Validator<'_>,
    ) -> Result<Option<String>, WizardError> {
        match self.next(prompt) {
            Answer::Text(text) => Ok(Some(text.to_string())),
            Answer::Default => Ok(Some(default.unwrap_or_default().to_string())),
            Answer::Cancel => Ok(None),
            other => panic!("unexpected answer {:?} for input '{}'", other, prompt),
        }
    }
}

/// In-memory directory tree keyed by absolute directory path
#[derive(Debug, Default)]
pub struct FakeLister {
    dirs: HashMap<PathBuf, DirectoryListing>,
}

impl FakeLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dir` with the given child folder names and image file names
    pub fn with_dir(mut self, dir: &str, folders: &[&str], images: &[&str]) -> Self {
        let dir = PathBuf::from(dir);
        let mut listing = DirectoryListing {
            directories: folders.iter().map(|name| dir.join(name)).collect(),
            images: images
                .iter()
                .map(|name| ImageEntry::new(dir.join(name), Some(1024)))
                .collect(),
        };
        listing.sort();
        self.dirs.insert(dir, listing);
        self
    }
}

impl DirectoryLister for FakeLister {
    fn list(&self, dir: &Path) -> DirectoryListing {
        self.dirs.get(dir).cloned().unwrap_or_default()
    }
}

/// Scripted behaviour for one invocation
#[derive(Debug, Clone)]
pub enum ToolBehavior {
    Succeed,
    Fail(&'static str),
    SpawnError,
}

/// Records every command and answers with scripted results (success by default)
#[derive(Debug, Default)]
pub struct FakeRunner {
    behaviors: VecDeque<ToolBehavior>,
    pub commands: Vec<FfmpegCommand>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behaviors(behaviors: Vec<ToolBehavior>) -> Self {
        Self {
            behaviors: behaviors.into(),
            commands: Vec::new(),
        }
    }

    /// Input file of each recorded invocation (the argument after `-i`)
    pub fn inputs(&self) -> Vec<String> {
        self.commands
            .iter()
            .map(|cmd| cmd.args_lossy()[1].clone())
            .collect()
    }
}

impl ToolRunner for FakeRunner {
    fn run(&mut self, command: &FfmpegCommand) -> io::Result<ToolOutput> {
        self.commands.push(command.clone());
        match self.behaviors.pop_front().unwrap_or(ToolBehavior::Succeed) {
            ToolBehavior::Succeed => Ok(ToolOutput {
                success: true,
                exit_code: Some(0),
                stderr: String::new(),
            }),
            ToolBehavior::Fail(stderr) => Ok(ToolOutput {
                success: false,
                exit_code: Some(1),
                stderr: stderr.to_string(),
            }),
            ToolBehavior::SpawnError => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory (os error 2)",
            )),
        }
    }
}

/// Create a temporary directory containing empty files with the given names
pub fn create_temp_files(names: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for name in names {
        let path = temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, b"fake image bytes").unwrap();
    }
    temp_dir
}

/// File names of a list of paths, for compact assertions
pub fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}
