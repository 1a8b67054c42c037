//! Derives output file names for article pages. An article titled `Über
//! Rust` dated `2024-01-01` becomes `{timestamp}_ueber-rust.html`, where the
//! timestamp is the article date in whole seconds since the epoch.

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{Duration, Local, LocalResult, NaiveDateTime, ParseResult, TimeZone};

const HTML_EXTENSION: &str = ".html";

/// Returns the output file name for an article with the given title and
/// date. `date` is parsed with `format` (see [`parse_date`]).
pub fn file_name(title: &str, date: &str, format: &str) -> ParseResult<String> {
    Ok(file_name_for(title, &parse_date(date, format)?))
}

/// Returns the output file name for an article with the given title and an
/// already parsed date.
pub fn file_name_for(title: &str, date: &NaiveDateTime) -> String {
    format!("{}_{}{}", local_timestamp(date), slugify(title), HTML_EXTENSION)
}

/// Normalizes a title into a filesystem-safe slug. Characters other than
/// ASCII letters and digits, space, `_`, `-` and German umlauts are
/// dropped; umlauts are transliterated after lowercasing, so `Ä` and `ä`
/// both become `ae`. Spaces and underscores become hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title
        .chars()
        .filter(|&c| is_slug_char(c))
        .flat_map(char::to_lowercase)
    {
        match c {
            'ä' => slug.push_str("ae"),
            'ö' => slug.push_str("oe"),
            'ü' => slug.push_str("ue"),
            ' ' | '_' => slug.push('-'),
            c => slug.push(c),
        }
    }
    slug
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-' | 'ä' | 'ö' | 'ü' | 'Ä' | 'Ö' | 'Ü')
}

/// Parses `date` with a strftime-style `format`. Fields the format doesn't
/// mention take the same defaults as C's `strptime`: year 1900, month and
/// day 1, midnight. A 12-hour clock without `%p` reads as AM.
pub fn parse_date(date: &str, format: &str) -> ParseResult<NaiveDateTime> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, date, StrftimeItems::new(format))?;

    if parsed.timestamp().is_none() {
        let has_year = parsed.year().is_some()
            || parsed.year_div_100().is_some()
            || parsed.year_mod_100().is_some()
            || parsed.isoyear().is_some();
        let has_week = parsed.week_from_sun().is_some()
            || parsed.week_from_mon().is_some()
            || parsed.isoweek().is_some();
        if !has_year {
            parsed.set_year(1900)?;
        }
        if parsed.month().is_none() && parsed.ordinal().is_none() && !has_week {
            parsed.set_month(1)?;
        }
        if parsed.day().is_none() && parsed.ordinal().is_none() && !has_week {
            parsed.set_day(1)?;
        }
        match (parsed.hour_div_12(), parsed.hour_mod_12()) {
            (None, None) => parsed.set_hour(0)?,
            (None, Some(_)) => parsed.set_ampm(false)?,
            _ => {}
        }
        if parsed.minute().is_none() {
            parsed.set_minute(0)?;
        }
    }

    parsed.to_naive_datetime_with_offset(0)
}

/// Interprets `datetime` in the local time zone and returns whole seconds
/// since the epoch. Ambiguous times resolve to the earlier instant; times
/// skipped by a DST transition are shifted forward by an hour.
pub fn local_timestamp(datetime: &NaiveDateTime) -> i64 {
    match Local.from_local_datetime(datetime) {
        LocalResult::Single(t) => t.timestamp(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
        LocalResult::None => match Local
            .from_local_datetime(&(*datetime + Duration::hours(1)))
            .earliest()
        {
            Some(t) => t.timestamp(),
            None => datetime.and_utc().timestamp(),
        },
    }
}
