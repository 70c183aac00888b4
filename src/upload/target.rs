// Path enumeration: turns the path given on the command line into the
// ordered list of files that end up in the multipart body.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// The files selected for one upload.
///
/// For a single file `files` holds exactly that file. For a directory it holds
/// every non-directory entry below it, depth first, sorted by name within each
/// directory level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    root: PathBuf,
    root_name: String,
    is_dir: bool,
    files: Vec<PathBuf>,
}

impl UploadTarget {
    /// Absolute path of the file or directory that was enumerated.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Base name of the root, used as the default display name and as the
    /// prefix of every part filename in a directory upload.
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Filename sent for `file`: the base name for a single file upload,
    /// `<root name>/<relative path>` with `/` separators for a directory.
    pub fn part_name(&self, file: &Path) -> String {
        if !self.is_dir {
            return self.root_name.clone();
        }
        let relative = file.strip_prefix(&self.root).unwrap_or(file);
        let mut name = self.root_name.clone();
        for component in relative.components() {
            name.push('/');
            name.push_str(&component.as_os_str().to_string_lossy());
        }
        name
    }
}

/// Enumerate `root`. Fails with `PathNotFound` when it does not exist and
/// with `Io` on the first directory that cannot be listed.
pub fn enumerate(root: impl AsRef<Path>) -> Result<UploadTarget> {
    let given = root.as_ref();
    let metadata = match fs::metadata(given) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::PathNotFound(given.to_path_buf()))
        }
        Err(e) => return Err(Error::io(given, e)),
    };

    let root = std::path::absolute(given).map_err(|e| Error::io(given, e))?;
    let root_name = root_name(&root)?;

    if !metadata.is_dir() {
        debug!(path = %root.display(), "enumerated single file");
        return Ok(UploadTarget {
            files: vec![root.clone()],
            root,
            root_name,
            is_dir: false,
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(&root).to_path_buf();
            Error::io(path, io::Error::from(e))
        })?;
        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }

    debug!(path = %root.display(), files = files.len(), "enumerated directory");
    Ok(UploadTarget {
        root,
        root_name,
        is_dir: true,
        files,
    })
}

// `Path::file_name` is `None` for roots like `..`; resolve those first.
fn root_name(root: &Path) -> Result<String> {
    if let Some(name) = root.file_name() {
        return Ok(name.to_string_lossy().into_owned());
    }
    let resolved = fs::canonicalize(root).map_err(|e| Error::io(root, e))?;
    Ok(resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.to_string_lossy().into_owned()))
}
