//! Exports the [`build_site`] function which stitches together the high-level
//! steps of building the output static site: parsing the articles
//! ([`crate::parser`]), sorting and paginating them
//! ([`crate::collection`], [`crate::paginate`]), composing every page
//! ([`crate::compose`]) and writing the result to disk ([`crate::write`]).

use crate::article::Article;
use crate::collection::{ArticleCollection, Collision};
use crate::compose::Composer;
use crate::config::Config;
use crate::paginate::paginate;
use crate::parser::{Error as ParseError, Parser};
use crate::write::{Document, Error as WriteError, Writer};
use log::info;
use std::fmt;

/// The file name of the about page.
pub const ABOUT_FILE_NAME: &str = "about.html";

/// Builds the site from a [`Config`] object. Nothing is written unless every
/// source document parses and every document renders.
pub fn build_site(config: &Config) -> Result<()> {
    let parser = Parser::new(&config.date_format, config.threads);
    let articles = parser.parse_articles(&config.articles_source_directory)?;
    let about = parser.parse_article(&config.about_source)?;

    let documents = publish(config, &about, articles)?;

    Writer {
        output_directory: &config.output_directory,
    }
    .write_documents(&documents)?;
    Ok(())
}

/// Composes every output document: the about page, one listing page per
/// chunk of articles and one page per article, in that order.
pub fn publish(config: &Config, about: &Article, articles: Vec<Article>) -> Result<Vec<Document>> {
    let collection = ArticleCollection::new(articles);
    collection.ensure_unique_file_names()?;

    let composer = Composer::new(&config.site, config.preview_words);
    let pages = paginate(collection.as_slice(), config.page_size);
    info!(
        "Composing {} listing pages for {} articles",
        pages.len(),
        collection.len()
    );

    let mut documents = Vec::with_capacity(1 + pages.len() + collection.len());
    documents.push(Document {
        file_name: ABOUT_FILE_NAME.to_owned(),
        content: composer.about_page(about),
    });
    documents.extend(pages.iter().map(|page| Document {
        file_name: page.file_name(),
        content: composer.listing_page(page),
    }));
    documents.extend(collection.iter().map(|article| Document {
        file_name: article.file_name().to_owned(),
        content: composer.article_page(article),
    }));
    Ok(documents)
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Errors can be during parsing, when
/// two articles claim the same output file, or during writing.
#[derive(Debug)]
pub enum Error {
    /// Returned for errors reading or parsing source documents.
    Parse(ParseError),

    /// Returned when two articles derive the same output file name.
    Collision(Collision),

    /// Returned for errors writing documents to disk.
    Write(WriteError),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(err) => err.fmt(f),
            Error::Collision(err) => write!(f, "duplicate output file name: {}", err),
            Error::Write(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Collision(err) => Some(err),
            Error::Write(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    /// Converts [`ParseError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: ParseError) -> Error {
        Error::Parse(err)
    }
}

impl From<Collision> for Error {
    /// Converts [`Collision`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: Collision) -> Error {
        Error::Collision(err)
    }
}

impl From<WriteError> for Error {
    /// Converts [`WriteError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: WriteError) -> Error {
        Error::Write(err)
    }
}
