//! Defines [`ArticleCollection`], the sorted set of articles for one run.

use crate::article::Article;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;

/// All articles of a run, most recent first. Articles sharing a date are
/// ordered by [`Article::id`] so the order never depends on the order in
/// which the articles were read.
#[derive(Debug)]
pub struct ArticleCollection(Vec<Article>);

impl ArticleCollection {
    pub fn new(mut articles: Vec<Article>) -> ArticleCollection {
        articles.sort_by(|a, b| {
            (Reverse(a.date()), a.id()).cmp(&(Reverse(b.date()), b.id()))
        });
        ArticleCollection(articles)
    }

    pub fn as_slice(&self) -> &[Article] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Article> {
        self.0
    }

    /// Fails with the first pair of articles that would be written to the
    /// same output file.
    pub fn ensure_unique_file_names(&self) -> Result<(), Collision> {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(self.0.len());
        for article in &self.0 {
            if let Some(first) = seen.insert(article.file_name(), article.id()) {
                return Err(Collision {
                    file_name: article.file_name().to_owned(),
                    first: first.to_owned(),
                    second: article.id().to_owned(),
                });
            }
        }
        Ok(())
    }
}

/// Two articles derive the same output file name.
#[derive(Debug, PartialEq, Eq)]
pub struct Collision {
    pub file_name: String,
    pub first: String,
    pub second: String,
}

impl fmt::Display for Collision {
    /// Displays a [`Collision`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "`{}` and `{}` both render to `{}`",
            self.first, self.second, self.file_name
        )
    }
}

impl std::error::Error for Collision {}
