//! Composes complete HTML documents. Every document shares one skeleton
//! (head, banner, menu, content region, footer); only the content region
//! differs between article pages, listing pages and the about page.
//!
//! Nothing is escaped. Site settings and article metadata are written into
//! the documents verbatim, so they may contain markup.

use crate::article::Article;
use crate::config::Site;
use crate::paginate::ListingPage;
use std::fmt::{self, Display};

const NEWER_ENTRIES: &str = "&lt;- Newer Entries";
const OLDER_ENTRIES: &str = "Older Entries -&gt;";

/// Renders the three kinds of documents for a [`Site`].
pub struct Composer<'a> {
    site: &'a Site,

    /// The number of words in each listing-page preview.
    preview_words: usize,
}

impl<'a> Composer<'a> {
    pub fn new(site: &'a Site, preview_words: usize) -> Composer<'a> {
        Composer {
            site,
            preview_words,
        }
    }

    /// A page showing one article in full with its author byline.
    pub fn article_page(&self, article: &Article) -> String {
        self.document(Content::Article(article))
    }

    /// A listing page: a preview block per article followed by the
    /// newer/older navigation.
    pub fn listing_page(&self, page: &ListingPage<'_, Article>) -> String {
        self.document(Content::Listing {
            page,
            preview_words: self.preview_words,
        })
    }

    /// The about page. Laid out like an article page.
    pub fn about_page(&self, about: &Article) -> String {
        self.document(Content::Article(about))
    }

    fn document(&self, content: Content<'_>) -> String {
        Document {
            site: self.site,
            content,
        }
        .to_string()
    }
}

enum Content<'a> {
    Article(&'a Article),
    Listing {
        page: &'a ListingPage<'a, Article>,
        preview_words: usize,
    },
}

struct Document<'a> {
    site: &'a Site,
    content: Content<'a>,
}

impl Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let site = self.site;
        write!(
            f,
            r#"<!DOCTYPE html>
<html lang="{}">
    <head>
        <meta charset="utf-8" />
        <link rel="stylesheet" href="{}" />
        <title>{}</title>
    </head>
    <body>
        <div id="header">
            <h1>{}</h1>
            <h3>{}</h3>
        </div>
        <div id="menu">
            <div class="menu_item-l"><a href="menu_0.html">Home</a></div>
            <div class="menu_item-m"><a href="proj_0.html">Projects</a></div>
            <div class="menu_item-r"><a href="about.html">About</a></div>
        </div>
        <div id="contentbody">
"#,
            site.language, site.css, site.title, site.heading, site.subheading
        )?;
        match &self.content {
            Content::Article(article) => write_article(f, article)?,
            Content::Listing {
                page,
                preview_words,
            } => {
                for article in page.items {
                    write_preview(f, article, *preview_words)?;
                }
                write_navigation(f, page)?;
            }
        }
        write!(
            f,
            r#"        </div>
        <div id="footer">
            {}
        </div>
    </body>
</html>
"#,
            site.footer
        )
    }
}

fn write_article(f: &mut fmt::Formatter<'_>, article: &Article) -> fmt::Result {
    write!(
        f,
        r#"            <div class="article">
                {}
                <h2>{}</h2>
{}
            </div>
            <div id="author">{}</div>
"#,
        article.raw_date(),
        article.title(),
        article.html().trim_end(),
        article.author()
    )
}

fn write_preview(f: &mut fmt::Formatter<'_>, article: &Article, words: usize) -> fmt::Result {
    write!(
        f,
        r#"            <div class="article_preview">
                {}
                <h2>{}</h2>
                <p>{}</p>
                <a href="{}">Full article</a>
            </div>
"#,
        article.raw_date(),
        article.title(),
        article.preview(words),
        article.file_name()
    )
}

fn write_navigation(f: &mut fmt::Formatter<'_>, page: &ListingPage<'_, Article>) -> fmt::Result {
    write!(
        f,
        r#"            <div id="navigation">
                <div id="navigation-fwd">
                    {}
                </div>
                <div id="navigation-back">
                    {}
                </div>
            </div>
"#,
        NavLink(page.newer_file_name(), NEWER_ENTRIES),
        NavLink(page.older_file_name(), OLDER_ENTRIES)
    )
}

/// A navigation control: a link when there is a target, plain text
/// otherwise.
struct NavLink(Option<String>, &'static str);

impl Display for NavLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(href) => write!(f, r#"<a href="{}">{}</a>"#, href, self.1),
            None => f.write_str(self.1),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::collection::test::article;
    use crate::paginate::paginate;
    use std::num::NonZeroUsize;

    fn site() -> Site {
        Site {
            language: "de".to_owned(),
            css: "style.css".to_owned(),
            title: "Fox <b>Blog</b>".to_owned(),
            heading: "The Fox".to_owned(),
            subheading: "Quick and brown".to_owned(),
            footer: "Built with foxblogs".to_owned(),
        }
    }

    fn assert_skeleton(document: &str) {
        assert!(document.starts_with("<!DOCTYPE html>\n<html lang=\"de\">"));
        assert!(document.contains(r#"<link rel="stylesheet" href="style.css" />"#));
        assert!(document.contains("<title>Fox <b>Blog</b></title>"));
        assert!(document.contains("<h1>The Fox</h1>"));
        assert!(document.contains("<h3>Quick and brown</h3>"));
        assert!(document.contains(r#"<a href="menu_0.html">Home</a>"#));
        assert!(document.contains(r#"<a href="proj_0.html">Projects</a>"#));
        assert!(document.contains(r#"<a href="about.html">About</a>"#));
        assert!(document.contains("<div id=\"footer\">\n            Built with foxblogs\n"));
        assert!(document.ends_with("</html>\n"));
    }

    #[test]
    fn test_article_page() {
        let site = site();
        let composer = Composer::new(&site, 3);
        let document = composer.article_page(&article("a.md", "Hello & <i>bye</i>", "2024-01-04"));
        assert_skeleton(&document);
        assert!(document.contains("                2024-01-04\n"));
        assert!(document.contains("<h2>Hello & <i>bye</i></h2>"));
        assert!(document.contains("<p>Body of Hello &amp; <i>bye</i>.</p>"));
        assert!(document.contains(r#"<div id="author">Jane</div>"#));
        assert!(!document.contains("navigation"));
    }

    #[test]
    fn test_about_page_matches_article_layout() {
        let site = site();
        let composer = Composer::new(&site, 3);
        let about = article("about.md", "About me", "2024-01-01");
        assert_eq!(composer.about_page(&about), composer.article_page(&about));
    }

    #[test]
    fn test_listing_pages() {
        let site = site();
        let composer = Composer::new(&site, 2);
        let articles = vec![
            article("a.md", "Fourth", "2024-01-04"),
            article("b.md", "Third", "2024-01-03"),
            article("c.md", "Second", "2024-01-02"),
        ];
        let pages = paginate(&articles, NonZeroUsize::new(2).unwrap());

        let first = composer.listing_page(&pages[0]);
        assert_skeleton(&first);
        assert!(first.contains("<h2>Fourth</h2>"));
        assert!(first.contains("<h2>Third</h2>"));
        assert!(!first.contains("<h2>Second</h2>"));
        assert!(first.contains("<p>Body of</p>"));
        assert!(first.contains(&format!(
            r#"<a href="{}">Full article</a>"#,
            articles[0].file_name()
        )));
        assert!(first.contains("<div id=\"navigation-fwd\">\n                    &lt;- Newer Entries\n"));
        assert!(first.contains(r#"<a href="menu_1.html">Older Entries -&gt;</a>"#));

        let second = composer.listing_page(&pages[1]);
        assert!(second.contains("<h2>Second</h2>"));
        assert!(second.contains(r#"<a href="menu_0.html">&lt;- Newer Entries</a>"#));
        assert!(second.contains("<div id=\"navigation-back\">\n                    Older Entries -&gt;\n"));
    }

    #[test]
    fn test_preview_precedes_navigation() {
        let site = site();
        let composer = Composer::new(&site, 5);
        let articles = vec![article("a.md", "Only", "2024-01-04")];
        let pages = paginate(&articles, NonZeroUsize::new(1).unwrap());
        let document = composer.listing_page(&pages[0]);
        let preview = document.find("article_preview").unwrap();
        let navigation = document.find("id=\"navigation\"").unwrap();
        assert!(preview < navigation);
        assert!(document.find("contentbody").unwrap() < preview);
        assert!(navigation < document.find("id=\"footer\"").unwrap());
    }
}
