//! The library code for the `foxblogs` static blog generator. A run turns a
//! directory of markdown articles into a flat directory of HTML files and is
//! broken down into three steps:
//!
//! 1. Parsing articles from source files on disk ([`crate::parser`],
//!    [`crate::article`])
//! 2. Composing every output document in memory ([`crate::build::publish`])
//! 3. Writing the documents to disk ([`crate::write`])
//!
//! The second step is where the structure of the site comes from. The
//! articles are sorted most recent first ([`crate::collection`]) and split
//! into fixed-size chunks ([`crate::paginate`]), each of which becomes a
//! listing page (`menu_0.html`, `menu_1.html`, ...) with links to its newer
//! and older neighbours. Every article also gets a page of its own, named
//! after its date and title ([`crate::slug`]), and one designated source
//! document becomes `about.html`. All pages share the same layout
//! ([`crate::compose`]).
//!
//! Nothing is written until every article has parsed, so a bad source file
//! never leaves a half-built site behind.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod article;
pub mod build;
pub mod collection;
pub mod compose;
pub mod config;
pub mod markdown;
pub mod metadata;
pub mod paginate;
pub mod parser;
pub mod slug;
pub mod write;
