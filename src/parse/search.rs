// src/parse/search.rs

//! Search-hit record assembly.
//!
//! A search hit arrives as a fixed-width array of HTML fragments. A fragment
//! may carry a sub-label before a `<br>` and a packed multi-year value after
//! it: each year's figure sits in a `<font>` tag whose color attribute
//! encodes the year. The portal shifts which color means which year as
//! admission years roll forward, so the mapping is built per call from the
//! request year rather than hardcoded.

use scraper::{Html, Selector};
use serde_json::Value;

use crate::models::{ProgramHit, ProgramTrack, YearValues};
use crate::parse::cell::text_of;

/// Color-to-year mapping for one search request.
#[derive(Debug, Clone)]
pub struct YearColors {
    pairs: Vec<(&'static str, u16)>,
}

impl YearColors {
    /// Mapping for a track, anchored at the most recent admission year.
    /// Bachelor cells pack four years; associate cells pack two.
    pub fn for_track(track: ProgramTrack, latest: u16) -> Self {
        let pairs = match track {
            ProgramTrack::Bachelor => vec![
                ("red", latest),
                ("purple", latest - 1),
                ("blue", latest - 2),
                ("green", latest - 3),
            ],
            ProgramTrack::Associate => vec![("red", latest), ("blue", latest - 1)],
        };
        Self { pairs }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u16)> + '_ {
        self.pairs.iter().copied()
    }
}

/// Extract one field from a raw hit row.
///
/// `sub` selects a `<br>`-separated sub-fragment first; `color` then picks
/// the `<font>` tag with that color attribute, falling back to the whole
/// fragment's text when no color is requested. Any out-of-range index or
/// malformed fragment yields `None` — a single bad field must not invalidate
/// the record.
pub fn extract(row: &[String], index: usize, sub: Option<usize>, color: Option<&str>) -> Option<String> {
    let raw = row.get(index)?;
    let fragment = match sub {
        Some(i) => raw.split("<br>").nth(i)?,
        None => raw.as_str(),
    };

    match color {
        Some(color) => color_text(fragment, color),
        None => fragment_text(fragment),
    }
}

/// Text content of an HTML fragment, or `None` when empty.
fn fragment_text(html: &str) -> Option<String> {
    let fragment = Html::parse_fragment(html);
    let text = text_of(&fragment.root_element());
    (!text.is_empty()).then_some(text)
}

/// Text of the first `<font>` tag carrying the given color attribute.
fn color_text(html: &str, color: &str) -> Option<String> {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse(&format!("font[color='{color}']")).ok()?;
    fragment.select(&selector).next().map(|el| text_of(&el))
}

/// Pull one statistic's value for every year in the mapping.
///
/// Bachelor cells hold the years in positional sub-fragments (label first,
/// then one fragment per year); associate cells hold all colored tags in a
/// single fragment.
fn multi_year(row: &[String], index: usize, split: bool, colors: &YearColors) -> YearValues {
    colors
        .iter()
        .enumerate()
        .map(|(i, (color, year))| {
            let sub = split.then_some(i + 1);
            (year, extract(row, index, sub, Some(color)))
        })
        .collect()
}

fn map_values(values: YearValues, f: impl Fn(String) -> String) -> YearValues {
    values
        .into_iter()
        .map(|(year, value)| (year, value.map(&f)))
        .collect()
}

/// Ranking counts drop their thousands-separator dots.
fn strip_dots(values: YearValues) -> YearValues {
    map_values(values, |s| s.replace('.', ""))
}

/// Score values swap the decimal comma for a dot.
fn comma_to_dot(values: YearValues) -> YearValues {
    map_values(values, |s| s.replace(',', "."))
}

/// Drop the "add to my list" UI suffix the associate endpoint leaves in text.
fn clean(value: Option<String>) -> Option<String> {
    value.map(|s| s.replace("Listeme Ekle", "").trim().to_string())
}

/// Assemble one hit row using the given track's column layout.
pub fn assemble(track: ProgramTrack, row: &[String], colors: &YearColors) -> ProgramHit {
    match track {
        ProgramTrack::Bachelor => assemble_bachelor(row, colors),
        ProgramTrack::Associate => assemble_associate(row, colors),
    }
}

fn assemble_bachelor(row: &[String], colors: &YearColors) -> ProgramHit {
    ProgramHit {
        code: extract(row, 1, Some(0), None),
        university: extract(row, 2, Some(0), None),
        faculty: extract(row, 2, Some(1), Some("#CC0000")),
        program: extract(row, 4, Some(0), None),
        program_detail: extract(row, 4, Some(1), Some("#CC0000")),
        city: extract(row, 6, None, None),
        university_type: extract(row, 7, None, None),
        fee_scholarship: extract(row, 8, None, None),
        education_type: extract(row, 9, None, None),
        quota: multi_year(row, 10, true, colors),
        placed: multi_year(row, 15, true, colors),
        ranking: strip_dots(multi_year(row, 19, true, colors)),
        base_score: comma_to_dot(multi_year(row, 27, true, colors)),
    }
}

fn assemble_associate(row: &[String], colors: &YearColors) -> ProgramHit {
    ProgramHit {
        code: clean(extract(row, 1, None, None)),
        university: clean(extract(row, 2, None, None)),
        faculty: clean(extract(row, 3, None, None)),
        program: clean(extract(row, 4, None, None)),
        program_detail: clean(extract(row, 5, None, None)),
        city: clean(extract(row, 6, None, None)),
        university_type: clean(extract(row, 7, None, None)),
        fee_scholarship: clean(extract(row, 8, None, None)),
        education_type: clean(extract(row, 9, None, None)),
        quota: multi_year(row, 10, false, colors),
        placed: multi_year(row, 16, false, colors),
        ranking: strip_dots(multi_year(row, 22, false, colors)),
        base_score: comma_to_dot(multi_year(row, 21, false, colors)),
    }
}

/// Flatten the search endpoint's `data` rows into string arrays.
pub fn payload_rows(payload: &Value) -> Vec<Vec<String>> {
    let items = match payload {
        Value::Object(map) => map.get("data").and_then(Value::as_array),
        Value::Array(_) => payload.as_array(),
        _ => None,
    };

    items
        .map(|rows| {
            rows.iter()
                .filter_map(Value::as_array)
                .map(|row| {
                    row.iter()
                        .map(|cell| match cell {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect()
                })
                .collect()
        })
        .unwrap_or_default()
}
