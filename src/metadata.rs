//! Parses the metadata block at the top of an article source file. The block
//! is a run of `Key: value` lines terminated by a blank line:
//!
//! ```md
//! Title: Hello, world!
//! Date: 2021-04-16
//! Author: Jane Doe
//!     and John Doe
//!
//! # Hello
//! ```
//!
//! Keys are case-insensitive and every key maps to a sequence of values.
//! Lines indented by four or more spaces continue the previous key. Only the
//! first value of a key is ever used when rendering, see [`Metadata::first`].

use std::collections::BTreeMap;

const FENCE: &str = "---";
const ALT_END_FENCE: &str = "...";

/// The parsed metadata of one source document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata(BTreeMap<String, Vec<String>>);

impl Metadata {
    /// Returns every value recorded for `key` (lower-case).
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Returns the first value recorded for `key` (lower-case).
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.first("title")
    }

    pub fn date(&self) -> Option<&str> {
        self.first("date")
    }

    pub fn author(&self) -> Option<&str> {
        self.first("author")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, key: &str, value: &str) {
        self.0
            .entry(key.to_owned())
            .or_default()
            .push(value.to_owned());
    }
}

/// Splits `input` into its metadata block and the markdown body that
/// follows it. Input without a metadata block yields empty [`Metadata`] and
/// the whole input as body.
pub fn split(input: &str) -> (Metadata, &str) {
    let mut metadata = Metadata::default();
    let mut key: Option<String> = None;
    let mut body_start = 0;

    for (i, raw) in input.split_inclusive('\n').enumerate() {
        let line = raw.trim_end_matches(['\n', '\r']);
        if i == 0 && is_fence(line, FENCE) {
            body_start += raw.len();
            continue;
        }
        if line.trim().is_empty() || is_fence(line, FENCE) || is_fence(line, ALT_END_FENCE) {
            body_start += raw.len();
            break;
        }
        if let Some((k, value)) = key_value(line) {
            let k = k.to_lowercase();
            metadata.push(&k, value);
            key = Some(k);
        } else if let (Some(k), Some(value)) = (&key, continuation(line)) {
            metadata.push(k, value);
        } else {
            // not metadata; the line belongs to the body
            break;
        }
        body_start += raw.len();
    }

    (metadata, &input[body_start..])
}

fn is_fence(line: &str, fence: &str) -> bool {
    match line.strip_prefix(fence) {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

fn key_value(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start_matches(' ');
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let (key, value) = trimmed.split_once(':')?;
    let valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid_key {
        Some((key, value.trim()))
    } else {
        None
    }
}

fn continuation(line: &str) -> Option<&str> {
    if line.starts_with("    ") {
        Some(line.trim())
    } else {
        None
    }
}
