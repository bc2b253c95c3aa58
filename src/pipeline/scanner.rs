//! Directory scanning for browsable folders and convertible images

use std::path::{Path, PathBuf};

use tracing::debug;

/// Image extensions accepted as conversion input (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "webp", "gif", "bmp", "tiff", "tif"];

/// A recognized image file found while scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub path: PathBuf,
    /// Size in bytes, if the metadata could be read
    pub size: Option<u64>,
}

impl ImageEntry {
    pub fn new(path: impl Into<PathBuf>, size: Option<u64>) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    pub fn name(&self) -> String {
        entry_name(&self.path)
    }
}

/// Immediate children of one directory: visible subdirectories and recognized images
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub directories: Vec<PathBuf>,
    pub images: Vec<ImageEntry>,
}

impl DirectoryListing {
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.images.is_empty()
    }

    /// Sort both lists by path so repeated scans produce identical output
    pub fn sort(&mut self) {
        self.directories.sort();
        self.images.sort_by(|a, b| a.path.cmp(&b.path));
    }
}

/// Source of directory listings.
///
/// The wizard and the batch converter only see the filesystem through this
/// trait, so tests can browse an in-memory tree.
pub trait DirectoryLister {
    fn list(&self, dir: &Path) -> DirectoryListing;
}

/// Lists the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> DirectoryListing {
        scan_directory(dir)
    }
}

/// Scan the immediate children of `dir`.
///
/// Hidden directories (names starting with `.`) and files with unrecognized
/// extensions are skipped. A directory that cannot be read yields an empty
/// listing rather than an error.
pub fn scan_directory(dir: &Path) -> DirectoryListing {
    let mut listing = DirectoryListing::default();

    let read_dir = match std::fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            debug!(dir = %dir.display(), error = %err, "cannot read directory");
            return listing;
        }
    };

    for entry in read_dir.flatten() {
        let path = entry.path();
        // Follow symlinks so linked folders and images behave like real ones
        let Ok(metadata) = std::fs::metadata(&path) else {
            continue;
        };

        if metadata.is_dir() {
            if !entry.file_name().to_string_lossy().starts_with('.') {
                listing.directories.push(path);
            }
        } else if metadata.is_file() && is_recognized_image(&path) {
            listing.images.push(ImageEntry::new(path, Some(metadata.len())));
        }
    }

    listing.sort();
    listing
}

/// Check whether a path has one of the recognized image extensions
pub fn is_recognized_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.iter().any(|known| e.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Render a byte count the way browse entries show it (`512B`, `1.5KB`, `2.0MB`)
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{}B", bytes)
    } else if bytes < MB {
        format!("{:.1}KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    }
}

/// Final path component as a display string
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
