//! Defines the [`Article`] type: a single parsed source document along with
//! everything derived from it.

use crate::markdown;
use crate::metadata::{self, Metadata};
use crate::slug;
use chrono::NaiveDateTime;
use std::fmt;
use std::sync::OnceLock;

/// One published post. Constructed once per source document via
/// [`Article::parse`] and read-only afterwards.
#[derive(Debug)]
pub struct Article {
    /// Identifies the source document (its file name) in diagnostics and
    /// breaks ties between articles with the same date.
    id: String,

    /// The raw source text, metadata block included.
    source: String,

    metadata: Metadata,

    /// The body rendered to HTML. Rendered once during parsing.
    html: String,

    /// The article date, parsed with the configured date format.
    date: NaiveDateTime,

    /// The output file name, see [`slug::file_name`].
    file_name: String,

    plain_text: OnceLock<String>,
}

impl Article {
    /// Parses an article from its source text. Fails if `title`, `date` or
    /// `author` is missing or if the date doesn't match `date_format`.
    pub fn parse(id: &str, source: String, date_format: &str) -> Result<Article> {
        let (metadata, body) = metadata::split(&source);
        let title = metadata.title().ok_or(Error::MissingField("title"))?;
        let raw_date = metadata.date().ok_or(Error::MissingField("date"))?;
        metadata.author().ok_or(Error::MissingField("author"))?;

        let date = slug::parse_date(raw_date, date_format).map_err(|err| Error::Date {
            date: raw_date.to_owned(),
            format: date_format.to_owned(),
            err,
        })?;
        let file_name = slug::file_name_for(title, &date);
        let html = markdown::to_html(body);

        Ok(Article {
            id: id.to_owned(),
            metadata,
            html,
            date,
            file_name,
            source,
            plain_text: OnceLock::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    // The required fields are checked in `parse`, so these can't come up
    // empty.
    pub fn title(&self) -> &str {
        self.metadata.title().unwrap_or_default()
    }

    /// The date exactly as written in the metadata block.
    pub fn raw_date(&self) -> &str {
        self.metadata.date().unwrap_or_default()
    }

    pub fn author(&self) -> &str {
        self.metadata.author().unwrap_or_default()
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The text content of the rendered HTML with all tags stripped.
    pub fn plain_text(&self) -> &str {
        self.plain_text
            .get_or_init(|| markdown::to_plain_text(&self.html))
    }

    /// The first `words` whitespace-delimited words of [`Article::plain_text`],
    /// joined by single spaces.
    pub fn preview(&self, words: usize) -> String {
        self.plain_text()
            .split_whitespace()
            .take(words)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Represents the result of an [`Article`]-parse operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error parsing an [`Article`].
#[derive(Debug)]
pub enum Error {
    /// Returned when a required metadata field is missing.
    MissingField(&'static str),

    /// Returned when the date doesn't match the configured format.
    Date {
        date: String,
        format: String,
        err: chrono::ParseError,
    },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingField(field) => {
                write!(f, "missing required metadata field `{}`", field)
            }
            Error::Date { date, format, err } => write!(
                f,
                "date `{}` doesn't match format `{}`: {}",
                date, format, err
            ),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingField(_) => None,
            Error::Date { err, .. } => Some(err),
        }
    }
}
