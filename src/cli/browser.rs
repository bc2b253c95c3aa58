//! Choosing the input: a file browser and a top-level directory picker
//!
//! The browser's only state is the directory being shown. It changes in two
//! ways: ascending to the parent or descending into a listed subdirectory.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::prompts::Prompter;
use crate::error::WizardError;
use crate::pipeline::{entry_name, format_file_size, DirectoryLister, ImageEntry};
use crate::utils::print_error;

/// Result of choosing an input path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseResult {
    /// User picked this path
    Selected(PathBuf),
    /// There was nothing to pick from
    NothingFound,
    /// User cancelled
    Cancelled,
}

/// One row of the browser menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEntry {
    Up,
    Directory(PathBuf),
    File(ImageEntry),
}

impl BrowseEntry {
    pub fn label(&self) -> String {
        match self {
            BrowseEntry::Up => "⬆️  .. (go up)".to_string(),
            BrowseEntry::Directory(path) => format!("📁 {}/", entry_name(path)),
            BrowseEntry::File(image) => match image.size {
                Some(size) => format!("📄 {} ({})", image.name(), format_file_size(size)),
                None => format!("📄 {}", image.name()),
            },
        }
    }
}

/// Browsing position, rooted at the directory the wizard started in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Browser {
    root: PathBuf,
    current: PathBuf,
}

impl Browser {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            current: root.clone(),
            root,
        }
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    /// False only at the filesystem root
    pub fn can_ascend(&self) -> bool {
        self.current.parent().is_some()
    }

    /// Move to the parent directory; returns false at the filesystem root
    pub fn ascend(&mut self) -> bool {
        match self.current.parent() {
            Some(parent) => {
                self.current = parent.to_path_buf();
                true
            }
            None => false,
        }
    }

    /// Move into a subdirectory taken from the current listing
    pub fn descend(&mut self, child: PathBuf) {
        self.current = child;
    }

    /// Current directory relative to the root, or absolute once above it
    pub fn display_path(&self) -> String {
        match self.current.strip_prefix(&self.root) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => rel.display().to_string(),
            Err(_) => self.current.display().to_string(),
        }
    }

    /// Menu rows for the current directory: up, then folders, then images
    pub fn entries(&self, lister: &impl DirectoryLister) -> Vec<BrowseEntry> {
        let listing = lister.list(&self.current);
        let mut entries = Vec::with_capacity(listing.directories.len() + listing.images.len() + 1);

        if self.can_ascend() {
            entries.push(BrowseEntry::Up);
        }
        entries.extend(listing.directories.into_iter().map(BrowseEntry::Directory));
        entries.extend(listing.images.into_iter().map(BrowseEntry::File));
        entries
    }
}

/// Let the user walk the tree from `start` until they pick an image file
pub fn browse_for_file<P, L>(
    prompter: &mut P,
    lister: &L,
    start: &Path,
) -> Result<BrowseResult, WizardError>
where
    P: Prompter + ?Sized,
    L: DirectoryLister,
{
    let mut browser = Browser::new(start);

    loop {
        let entries = browser.entries(lister);
        if entries.is_empty() {
            print_error(&format!(
                "No files or directories found in {}",
                browser.current().display()
            ));
            return Ok(BrowseResult::NothingFound);
        }

        let labels: Vec<String> = entries.iter().map(BrowseEntry::label).collect();
        let mut shown = browser.display_path();
        if !shown.ends_with('/') {
            shown.push('/');
        }
        let prompt = format!("Select a file (current: {}):", shown);
        let Some(index) = prompter.select(&prompt, &labels, 0)? else {
            return Ok(BrowseResult::Cancelled);
        };

        match entries.into_iter().nth(index) {
            Some(BrowseEntry::Up) => {
                browser.ascend();
            }
            Some(BrowseEntry::Directory(dir)) => {
                debug!(dir = %dir.display(), "entering directory");
                browser.descend(dir);
            }
            Some(BrowseEntry::File(image)) => return Ok(BrowseResult::Selected(image.path)),
            None => return Ok(BrowseResult::Cancelled),
        }
    }
}

/// Offer the top-level subdirectories of `start` as direct choices
pub fn select_directory<P, L>(
    prompter: &mut P,
    lister: &L,
    start: &Path,
) -> Result<BrowseResult, WizardError>
where
    P: Prompter + ?Sized,
    L: DirectoryLister,
{
    let directories = lister.list(start).directories;
    if directories.is_empty() {
        print_error("No directories found in current directory.");
        return Ok(BrowseResult::NothingFound);
    }

    let labels: Vec<String> = directories
        .iter()
        .map(|dir| format!("📁 {}/", entry_name(dir)))
        .collect();
    let Some(index) = prompter.select("Select a directory:", &labels, 0)? else {
        return Ok(BrowseResult::Cancelled);
    };

    Ok(directories
        .into_iter()
        .nth(index)
        .map(BrowseResult::Selected)
        .unwrap_or(BrowseResult::Cancelled))
}
