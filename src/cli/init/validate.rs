//! Target directory checks that run before any scaffolding write.

use anyhow::{Context, Result, bail};
use std::{fs, io, path::Path};

/// How `init` was invoked; decides which target check applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `petrify init` - scaffold into the current directory
    CurrentDir,
    /// `petrify init <name>` - scaffold into a fresh subdirectory
    NewDir,
}

impl InitMode {
    /// Pick the mode from whether a directory name was given on the CLI.
    pub fn from_name_arg(has_name: bool) -> Self {
        if has_name { Self::NewDir } else { Self::CurrentDir }
    }

    /// Refuse targets where scaffolding would land on existing files.
    ///
    /// The current directory may exist but must hold nothing; a named
    /// directory must not exist at all.
    pub fn check_target(self, root: &Path) -> Result<()> {
        match self {
            Self::CurrentDir if dir_has_entries(root)? => bail!(
                "Current directory is not empty.\n\
                 Use `petrify init <name>` to create in a new subdirectory."
            ),
            Self::NewDir if root.exists() => bail!(
                "Directory '{}' already exists.\n\
                 Choose a different name or remove the existing directory.",
                root.display()
            ),
            _ => Ok(()),
        }
    }
}

/// A missing directory counts as having no entries.
fn dir_has_entries(path: &Path) -> Result<bool> {
    match fs::read_dir(path) {
        Ok(mut entries) => Ok(entries.next().is_some()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err)
            .with_context(|| format!("Failed to read directory '{}'", path.display())),
    }
}
