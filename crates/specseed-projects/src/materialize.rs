//! Writing a resolved [`TemplateSet`] to disk.
//!
//! The project root is created with a non-recursive `create_dir`, so an
//! existing root (including one created concurrently) is always reported as
//! `DestinationExists` before anything is written. Failures after that
//! point leave the partial tree in place.

use crate::error::{Error, Result};
use crate::manifest::{EntryContent, TemplateSet};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};

/// Marker file written into directory-only entries
pub const DIRECTORY_MARKER: &str = ".gitkeep";

/// A project tree that was written successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedProject {
    /// Project root directory
    pub root: Utf8PathBuf,
    /// Every path created under the root, in creation order
    pub created: Vec<Utf8PathBuf>,
}

/// Create `<output_dir>/<name>` and write every entry of `set` into it
pub fn materialize(set: &TemplateSet, output_dir: &Utf8Path, name: &str) -> Result<ScaffoldedProject> {
    if !output_dir.is_dir() {
        return Err(Error::output_dir_missing(output_dir.as_str()));
    }

    let root = output_dir.join(name);

    // symlink_metadata also catches dangling symlinks
    if root.symlink_metadata().is_ok() {
        return Err(Error::destination_exists(root.as_str()));
    }

    fs::create_dir(&root).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => Error::destination_exists(root.as_str()),
        _ => Error::filesystem(root.as_str(), e),
    })?;
    tracing::debug!("Created project root {}", root);

    let mut created = Vec::with_capacity(set.len());

    for entry in set.iter() {
        let path = root.join(&entry.path);

        match &entry.content {
            EntryContent::Directory => {
                create_dirs(&path)?;
                write_new_file(&path.join(DIRECTORY_MARKER), "")?;
            }
            EntryContent::File { content } => {
                if let Some(parent) = path.parent() {
                    create_dirs(parent)?;
                }
                write_new_file(&path, content)?;
            }
        }

        tracing::debug!("Created {}", path);
        created.push(path);
    }

    tracing::info!("Scaffolded {} entries under {}", created.len(), root);

    Ok(ScaffoldedProject { root, created })
}

fn create_dirs(path: &Utf8Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::filesystem(path.as_str(), e))
}

/// Write `content` to a file that must not exist yet.
///
/// The handle is dropped when this returns, on success or error.
fn write_new_file(path: &Utf8Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| Error::filesystem(path.as_str(), e))?;

    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| Error::filesystem(path.as_str(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{EntryOrigin, TemplateEntry};
    use tempfile::TempDir;

    fn temp_dir() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        (temp, path)
    }

    fn sample_set() -> TemplateSet {
        let mut set = TemplateSet::new();
        set.insert(TemplateEntry::file(
            "specs/00-overview.md",
            "# demo\n".to_string(),
            EntryOrigin::Baseline,
        ))
        .unwrap();
        set.insert(TemplateEntry::directory("src", EntryOrigin::Baseline))
            .unwrap();
        set
    }

    #[test]
    fn test_materialize_writes_files_and_markers() {
        let (_temp, dir) = temp_dir();

        let project = materialize(&sample_set(), &dir, "demo").unwrap();

        assert_eq!(project.root, dir.join("demo"));
        assert_eq!(project.created.len(), 2);
        assert_eq!(
            fs::read_to_string(dir.join("demo/specs/00-overview.md")).unwrap(),
            "# demo\n"
        );
        assert!(dir.join("demo/src").is_dir());
        assert!(dir.join("demo/src/.gitkeep").is_file());
    }

    #[test]
    fn test_existing_destination_is_untouched() {
        let (_temp, dir) = temp_dir();
        fs::create_dir(dir.join("demo")).unwrap();
        fs::write(dir.join("demo/keep.txt"), "mine").unwrap();

        let err = materialize(&sample_set(), &dir, "demo").unwrap_err();

        assert!(matches!(err, Error::DestinationExists { .. }));
        assert!(!dir.join("demo/specs").exists());
        assert_eq!(fs::read_to_string(dir.join("demo/keep.txt")).unwrap(), "mine");
    }

    #[test]
    fn test_existing_file_at_destination() {
        let (_temp, dir) = temp_dir();
        fs::write(dir.join("demo"), "not a directory").unwrap();

        let err = materialize(&sample_set(), &dir, "demo").unwrap_err();
        assert!(matches!(err, Error::DestinationExists { .. }));
    }

    #[test]
    fn test_missing_output_dir() {
        let (_temp, dir) = temp_dir();
        let missing = dir.join("does/not/exist");

        let err = materialize(&sample_set(), &missing, "demo").unwrap_err();

        assert!(matches!(err, Error::OutputDirMissing { .. }));
        assert!(!missing.exists());
    }

    #[test]
    fn test_empty_set_creates_only_root() {
        let (_temp, dir) = temp_dir();

        let project = materialize(&TemplateSet::new(), &dir, "empty").unwrap();

        assert!(project.created.is_empty());
        assert!(dir.join("empty").is_dir());
        assert_eq!(fs::read_dir(dir.join("empty")).unwrap().count(), 0);
    }
}
