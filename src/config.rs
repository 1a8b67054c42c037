//! Loads the site configuration from a `foxblogs.yaml` file:
//!
//! ```yaml
//! meta:
//!   language: en
//! content:
//!   title: My Blog
//!   heading: My Blog
//!   subheading: Notes on things
//!   footer: (c) Me
//! settings:
//!   date_fmt: "%Y-%m-%d"
//!   css: style.css
//!   root_dir: .
//!   md_dir: articles
//!   html_dir: html
//!   about: about.md
//!   preview_words: 50
//!   previews_per_page: 5
//! ```

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs::File;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// The file name looked up by [`Config::from_directory`].
pub const CONFIG_FILE_NAME: &str = "foxblogs.yaml";

#[derive(Deserialize)]
struct Meta {
    language: String,
}

#[derive(Deserialize)]
struct Content {
    title: String,
    heading: String,
    subheading: String,
    footer: String,
}

#[derive(Deserialize)]
struct Settings {
    date_fmt: String,
    css: String,
    root_dir: PathBuf,
    md_dir: PathBuf,
    html_dir: PathBuf,
    about: PathBuf,
    preview_words: usize,
    previews_per_page: NonZeroUsize,
}

#[derive(Deserialize)]
struct Project {
    meta: Meta,
    content: Content,
    settings: Settings,
    #[serde(default)]
    impressum: Impressum,
}

/// Legal-notice details. Carried along untouched; nothing is rendered from
/// them.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Impressum {
    #[serde(default)]
    pub available: bool,
    pub name: Option<String>,
    pub address: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
}

/// The text and assets shared by every page of the site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    /// The `lang` attribute of every document.
    pub language: String,
    /// The stylesheet href.
    pub css: String,
    /// The document `<title>`.
    pub title: String,
    pub heading: String,
    pub subheading: String,
    pub footer: String,
}

pub struct Config {
    pub site: Site,
    pub date_format: String,
    pub preview_words: usize,
    pub page_size: NonZeroUsize,
    pub articles_source_directory: PathBuf,
    pub about_source: PathBuf,
    pub output_directory: PathBuf,
    pub impressum: Impressum,
    pub threads: usize,
}

impl Config {
    /// Looks for a `foxblogs.yaml` in `dir` and its ancestors and loads the
    /// first one found.
    pub fn from_directory(dir: &Path, threads: Option<usize>) -> Result<Config> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Config::from_project_file(&path, threads)
        } else {
            match dir.parent() {
                Some(parent) => Config::from_directory(parent, threads),
                None => Err(anyhow!(
                    "Could not find `{}` in any parent directory",
                    CONFIG_FILE_NAME
                )),
            }
        }
    }

    /// Loads the configuration file at `path`. `settings.root_dir` is
    /// resolved against the directory containing the file.
    pub fn from_project_file(path: &Path, threads: Option<usize>) -> Result<Config> {
        let file = File::open(path).map_err(|e| {
            anyhow!("Opening configuration file `{}`: {}", path.display(), e)
        })?;
        let project: Project = serde_yaml::from_reader(file)
            .map_err(|e| anyhow!("Loading configuration `{}`: {}", path.display(), e))?;
        let project_root = path.parent().ok_or_else(|| {
            anyhow!(
                "Can't get parent directory for provided configuration file path '{:?}'",
                path
            )
        })?;
        Ok(Config::from_project(project, project_root, threads))
    }

    fn from_project(project: Project, project_root: &Path, threads: Option<usize>) -> Config {
        let Project {
            meta,
            content,
            settings,
            impressum,
        } = project;
        let root = project_root.join(&settings.root_dir);
        Config {
            site: Site {
                language: meta.language,
                css: settings.css,
                title: content.title,
                heading: content.heading,
                subheading: content.subheading,
                footer: content.footer,
            },
            date_format: settings.date_fmt,
            preview_words: settings.preview_words,
            page_size: settings.previews_per_page,
            articles_source_directory: root.join(&settings.md_dir),
            about_source: root.join(&settings.about),
            output_directory: root.join(&settings.html_dir),
            impressum,
            threads: threads.unwrap_or_else(num_cpus::get),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    const CONFIG: &str = r#"
meta:
  language: de
content:
  title: Fox Blog
  heading: The Fox
  subheading: Quick and brown
  footer: Built with foxblogs
settings:
  date_fmt: "%d.%m.%Y"
  css: style.css
  root_dir: site
  md_dir: articles
  html_dir: html
  about: about.md
  preview_words: 40
  previews_per_page: 5
"#;

    #[test]
    fn test_from_project_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, CONFIG)?;

        let config = Config::from_project_file(&path, Some(3))?;
        assert_eq!(config.site.language, "de");
        assert_eq!(config.site.title, "Fox Blog");
        assert_eq!(config.site.heading, "The Fox");
        assert_eq!(config.site.subheading, "Quick and brown");
        assert_eq!(config.site.footer, "Built with foxblogs");
        assert_eq!(config.site.css, "style.css");
        assert_eq!(config.date_format, "%d.%m.%Y");
        assert_eq!(config.preview_words, 40);
        assert_eq!(config.page_size.get(), 5);
        assert_eq!(config.threads, 3);
        assert_eq!(
            config.articles_source_directory,
            dir.path().join("site").join("articles")
        );
        assert_eq!(config.about_source, dir.path().join("site").join("about.md"));
        assert_eq!(config.output_directory, dir.path().join("site").join("html"));
        assert_eq!(config.impressum, Impressum::default());
        Ok(())
    }

    #[test]
    fn test_impressum_is_passed_through() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            format!("{}impressum:\n  available: true\n  name: Jane\n  city: Berlin\n", CONFIG),
        )?;

        let config = Config::from_project_file(&path, None)?;
        assert!(config.impressum.available);
        assert_eq!(config.impressum.name.as_deref(), Some("Jane"));
        assert_eq!(config.impressum.city.as_deref(), Some("Berlin"));
        assert_eq!(config.impressum.zip, None);
        assert!(config.threads >= 1);
        Ok(())
    }

    #[test]
    fn test_from_directory_searches_parents() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join(CONFIG_FILE_NAME), CONFIG)?;
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested)?;

        let config = Config::from_directory(&nested, Some(1))?;
        assert_eq!(config.output_directory, dir.path().join("site").join("html"));
        Ok(())
    }

    #[test]
    fn test_missing_key() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, CONFIG.replace("  css: style.css\n", ""))?;

        let err = Config::from_project_file(&path, None).err().unwrap();
        assert!(err.to_string().contains("css"), "{}", err);
        Ok(())
    }

    #[test]
    fn test_zero_page_size_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, CONFIG.replace("previews_per_page: 5", "previews_per_page: 0"))?;

        assert!(Config::from_project_file(&path, None).is_err());
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_project_file(Path::new("/nonexistent/foxblogs.yaml"), None)
            .err()
            .unwrap();
        assert!(err.to_string().contains("/nonexistent/foxblogs.yaml"), "{}", err);
    }
}
