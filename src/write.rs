//! Writes rendered [`Document`]s to the output directory. All documents are
//! first written to hidden temporary files next to their final location and
//! only renamed into place once every one of them has been written, so a
//! failing run leaves no half-written site behind.

use log::{debug, info};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A finished output file: its name relative to the output directory and
/// its contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub content: String,
}

/// Responsible for writing [`Document`]s to disk.
pub struct Writer<'a> {
    /// The directory in which the documents are written. Created if it
    /// doesn't exist; existing files other than the documents are left
    /// alone.
    pub output_directory: &'a Path,
}

impl Writer<'_> {
    /// Writes all `documents`, or none of them if any write fails.
    pub fn write_documents(&self, documents: &[Document]) -> Result<()> {
        fs::create_dir_all(self.output_directory).map_err(|err| Error::CreateDirectory {
            path: self.output_directory.to_owned(),
            err,
        })?;

        let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(documents.len());
        for document in documents {
            let target = self.output_directory.join(&document.file_name);
            let temporary = self
                .output_directory
                .join(format!(".{}.tmp", document.file_name));
            if let Err(err) = fs::write(&temporary, &document.content) {
                let _ = fs::remove_file(&temporary);
                discard(&staged);
                return Err(Error::Write {
                    path: temporary,
                    err,
                });
            }
            staged.push((temporary, target));
        }

        for (i, (temporary, target)) in staged.iter().enumerate() {
            if let Err(err) = fs::rename(temporary, target) {
                discard(&staged[i..]);
                return Err(Error::Rename {
                    path: target.clone(),
                    err,
                });
            }
            debug!("wrote `{}`", target.display());
        }

        info!(
            "Wrote {} documents to `{}`",
            documents.len(),
            self.output_directory.display()
        );
        Ok(())
    }
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (temporary, _) in staged {
        let _ = fs::remove_file(temporary);
    }
}

/// The result of a fallible document-writing operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error writing documents.
#[derive(Debug)]
pub enum Error {
    /// Returned when the output directory can't be created.
    CreateDirectory { path: PathBuf, err: io::Error },

    /// Returned when a temporary file can't be written.
    Write { path: PathBuf, err: io::Error },

    /// Returned when a temporary file can't be moved into place.
    Rename { path: PathBuf, err: io::Error },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CreateDirectory { path, err } => {
                write!(f, "creating output directory `{}`: {}", path.display(), err)
            }
            Error::Write { path, err } => write!(f, "writing `{}`: {}", path.display(), err),
            Error::Rename { path, err } => {
                write!(f, "moving output into place at `{}`: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::CreateDirectory { err, .. } => Some(err),
            Error::Write { err, .. } => Some(err),
            Error::Rename { err, .. } => Some(err),
        }
    }
}
