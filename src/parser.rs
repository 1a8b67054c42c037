//! Reads [`Article`]s from the file system. Source files are listed in file
//! name order and parsed either on the calling thread or on a pool of
//! worker threads; either way the first failure aborts the whole parse.

use crate::article::{self, Article};
use log::{debug, info};
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MARKDOWN_EXTENSION: &str = "md";

/// Parses [`Article`]s from source files.
pub struct Parser<'a> {
    /// The strftime-style format of the `Date` metadata field.
    date_format: &'a str,

    /// The number of worker threads. Below two, parsing happens on the
    /// calling thread.
    threads: usize,
}

impl<'a> Parser<'a> {
    pub fn new(date_format: &'a str, threads: usize) -> Parser<'a> {
        Parser {
            date_format,
            threads,
        }
    }

    /// Parses a single source file. The article's id is its file name.
    pub fn parse_article(&self, path: &Path) -> Result<Article> {
        let source = std::fs::read_to_string(path).map_err(|err| Error::Read {
            path: path.to_owned(),
            err,
        })?;
        let id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let article = Article::parse(&id, source, self.date_format).map_err(|err| Error::Parse {
            path: path.to_owned(),
            err,
        })?;
        debug!("parsed `{}` -> {}", path.display(), article.file_name());
        Ok(article)
    }

    /// Parses every markdown file (extension `.md`) directly inside
    /// `source_directory`. The articles are returned unsorted.
    pub fn parse_articles(&self, source_directory: &Path) -> Result<Vec<Article>> {
        let paths = source_files(source_directory)?;
        info!(
            "Parsing {} articles from `{}`",
            paths.len(),
            source_directory.display()
        );
        if self.threads < 2 {
            paths.iter().map(|path| self.parse_article(path)).collect()
        } else {
            self.parse_articles_parallel(paths)
        }
    }

    fn parse_articles_parallel(&self, paths: Vec<PathBuf>) -> Result<Vec<Article>> {
        use crossbeam_channel::unbounded;
        use std::thread;

        let (tx, rx) = unbounded::<PathBuf>();
        for path in paths {
            // the receiver is alive until the end of this function
            let _ = tx.send(path);
        }
        drop(tx);

        thread::scope(|scope| {
            let workers: Vec<_> = (0..self.threads)
                .map(|_| {
                    let rx = rx.clone();
                    scope.spawn(move || -> Result<Vec<Article>> {
                        let mut articles = Vec::new();
                        for path in rx {
                            articles.push(self.parse_article(&path)?);
                        }
                        Ok(articles)
                    })
                })
                .collect();

            let mut articles = Vec::new();
            let mut first_error = None;
            for worker in workers {
                match worker.join() {
                    Ok(Ok(parsed)) => articles.extend(parsed),
                    Ok(Err(err)) => {
                        first_error.get_or_insert(err);
                    }
                    Err(_) => {
                        first_error.get_or_insert(Error::WorkerPanicked);
                    }
                }
            }
            match first_error {
                Some(err) => Err(err),
                None => Ok(articles),
            }
        })
    }
}

/// Lists the markdown files directly inside `dir`, sorted by file name.
/// Symbolic links are followed, so a link to a markdown file counts as an
/// article named after the link. A dangling link fails the listing.
fn source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for result in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = result.map_err(|err| Error::List {
            path: dir.to_owned(),
            err,
        })?;
        let is_markdown = entry.path().extension().and_then(|ext| ext.to_str())
            == Some(MARKDOWN_EXTENSION);
        if entry.file_type().is_file() && is_markdown {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Represents the result of a parse operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error reading or parsing source files.
#[derive(Debug)]
pub enum Error {
    /// Returned when the source directory can't be listed.
    List { path: PathBuf, err: walkdir::Error },

    /// Returned when a source file can't be read.
    Read { path: PathBuf, err: std::io::Error },

    /// Returned when a source file isn't a valid article.
    Parse { path: PathBuf, err: article::Error },

    /// Returned when a worker thread panicked.
    WorkerPanicked,
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::List { path, err } => {
                write!(f, "listing directory `{}`: {}", path.display(), err)
            }
            Error::Read { path, err } => {
                write!(f, "reading `{}`: {}", path.display(), err)
            }
            Error::Parse { path, err } => {
                write!(f, "parsing article `{}`: {}", path.display(), err)
            }
            Error::WorkerPanicked => write!(f, "a parser thread panicked"),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::List { err, .. } => Some(err),
            Error::Read { err, .. } => Some(err),
            Error::Parse { err, .. } => Some(err),
            Error::WorkerPanicked => None,
        }
    }
}
