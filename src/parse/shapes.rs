// src/parse/shapes.rs

//! Table-shape parsers.
//!
//! Each parser is a pure function from a report body plus its descriptor to
//! a result value. The two shape families made different historical choices
//! about missing tables: listing shapes treat zero tables as "no data for
//! this program" and return an empty result, while the multi-table score
//! report treats it as a broken page and errors. Both behaviors are kept.

use scraper::{ElementRef, Html, Selector};
use serde_json::{Map, Value};

use crate::error::{AppError, Result};
use crate::models::{EndpointDescriptor, TableShape};
use crate::parse::cell::{clean_label, coerce_numeric, text_of};
use crate::parse::document::{self, PLACEHOLDER, locate_tables, parse_selector};
use crate::parse::rows::{RowKind, classify};

/// Fixed column headers of the score statistics tables. The markup has no
/// usable header row, so the original page's column meaning is declared here.
const SCORE_HEADERS: [&str; 5] = [
    "Kontenjan Türü",
    "Kontenjan",
    "Yerleşen Sayısı",
    "0,12 Katsayı ile",
    "0,12 + 0,06 Katsayı ile",
];

/// Legacy quota label rewritten to its current equivalent.
const LEGACY_GENERAL_QUOTA: &str = "YKS Kontenjanı";
const GENERAL_QUOTA: &str = "Genel Kontenjan";

/// Quota category excluded from score statistics entirely.
const EXAMLESS_QUOTA: &str = "Sınavsız Geçiş Kontenjanı";

/// Parse a report body according to its descriptor's shape.
pub fn parse_report(
    html: &str,
    desc: &EndpointDescriptor,
    placeholder_default: &str,
) -> Result<Value> {
    match desc.shape {
        TableShape::SingleTable => single_table(html, desc, placeholder_default),
        TableShape::TableWithTotals => table_with_totals(html, desc, placeholder_default),
        TableShape::KeyValuePanels { tables } => {
            key_value_panels(html, tables, placeholder_default)
        }
        TableShape::PairedListings { tables, labels } => {
            paired_listings(html, tables, labels, placeholder_default)
        }
        TableShape::ScoreStatistics => score_statistics(html, desc),
    }
}

fn keyed(key: &str, value: Value) -> Value {
    let mut out = Map::new();
    out.insert(key.to_string(), value);
    Value::Object(out)
}

/// Header cells after the first one; the first column is named by the
/// descriptor's row label instead.
fn value_headers(table: &ElementRef, th: &Selector) -> Vec<String> {
    table.select(th).skip(1).map(|el| text_of(&el)).collect()
}

/// Walk a listing table's body, splitting data rows from the totals row.
/// If several rows carry a totals label, the last one wins.
fn listing_rows(
    table: &ElementRef,
    row_label: &str,
) -> Result<(Vec<Value>, Map<String, Value>)> {
    let th = parse_selector("th")?;
    let tr = parse_selector("tbody tr")?;
    let td = parse_selector("td")?;

    let headers = value_headers(table, &th);
    let mut data = Vec::new();
    let mut totals = Map::new();

    for row in table.select(&tr) {
        let cells: Vec<String> = row.select(&td).map(|el| text_of(&el)).collect();
        let Some(first) = cells.first() else {
            continue;
        };

        let kind = classify(first, row_label);
        if kind == RowKind::Discard {
            continue;
        }

        let mut record = Map::new();
        record.insert(row_label.to_string(), Value::String(clean_label(first)));
        for (i, header) in headers.iter().enumerate() {
            let value = cells
                .get(i + 1)
                .map(|text| coerce_numeric(&clean_label(text)))
                .unwrap_or(Value::Null);
            record.insert(header.clone(), value);
        }

        match kind {
            RowKind::Data => data.push(Value::Object(record)),
            RowKind::Totals => totals = record,
            RowKind::Discard => unreachable!(),
        }
    }

    Ok((data, totals))
}

/// Single-table listing. Totals rows are dropped; zero tables is an empty
/// result, not an error.
fn single_table(html: &str, desc: &EndpointDescriptor, placeholder: &str) -> Result<Value> {
    let cleaned = document::substitute_placeholders(html, placeholder);
    let doc = Html::parse_document(&cleaned);
    let tables = locate_tables(&doc)?;

    let Some(table) = tables.first() else {
        return Ok(keyed(desc.report, Value::Array(Vec::new())));
    };

    let (data, _totals) = listing_rows(table, desc.row_label)?;
    Ok(keyed(desc.report, Value::Array(data)))
}

/// Listing with the totals row split into a separate `toplam` map.
fn table_with_totals(html: &str, desc: &EndpointDescriptor, placeholder: &str) -> Result<Value> {
    let cleaned = document::substitute_placeholders(html, placeholder);
    let doc = Html::parse_document(&cleaned);
    let tables = locate_tables(&doc)?;

    let (data, totals) = match tables.first() {
        Some(table) => listing_rows(table, desc.row_label)?,
        None => (Vec::new(), Map::new()),
    };

    let mut out = Map::new();
    out.insert(desc.report.to_string(), Value::Array(data));
    out.insert("toplam".to_string(), Value::Object(totals));
    Ok(Value::Object(out))
}

/// Up to N two-column tables, each flattened into a key-value map under its
/// declared panel name. Panels without a matching table are absent.
fn key_value_panels(html: &str, panels: &[&str], placeholder: &str) -> Result<Value> {
    let cleaned = document::substitute_placeholders(html, placeholder);
    let doc = Html::parse_document(&cleaned);
    let tables = locate_tables(&doc)?;

    let tr = parse_selector("tr")?;
    let td = parse_selector("td")?;

    let mut out = Map::new();
    for (table, panel) in tables.iter().zip(panels) {
        let mut entries = Map::new();
        for row in table.select(&tr) {
            let cells: Vec<String> = row.select(&td).map(|el| text_of(&el)).collect();
            if cells.len() == 2 {
                entries.insert(
                    clean_label(&cells[0]),
                    coerce_numeric(&clean_label(&cells[1])),
                );
            }
        }
        out.insert(panel.to_string(), Value::Object(entries));
    }
    Ok(Value::Object(out))
}

/// N tables in document order, each parsed as a listing under its own result
/// key. The markup's first header cell is generic, so each listing renames it
/// to its declared label.
fn paired_listings(
    html: &str,
    keys: &[&str],
    labels: &[&str],
    placeholder: &str,
) -> Result<Value> {
    let cleaned = document::substitute_placeholders(html, placeholder);
    let doc = Html::parse_document(&cleaned);
    let tables = locate_tables(&doc)?;

    let th = parse_selector("th")?;
    let tr = parse_selector("tbody tr")?;
    let td = parse_selector("td")?;

    let mut out = Map::new();
    for (i, (key, label)) in keys.iter().zip(labels).enumerate() {
        let mut rows_out = Vec::new();
        if let Some(table) = tables.get(i) {
            let mut headers: Vec<String> = table.select(&th).map(|el| text_of(&el)).collect();
            if let Some(first) = headers.first_mut() {
                *first = (*label).to_string();
            }

            for row in table.select(&tr) {
                let cells: Vec<String> = row.select(&td).map(|el| text_of(&el)).collect();
                if cells.is_empty() {
                    continue;
                }
                let mut record = Map::new();
                for (j, header) in headers.iter().enumerate() {
                    if j < cells.len() {
                        let value = if j == 0 {
                            Value::String(clean_label(&cells[j]))
                        } else {
                            coerce_numeric(&clean_label(&cells[j]))
                        };
                        record.insert(header.clone(), value);
                    }
                }
                rows_out.push(Value::Object(record));
            }
        }
        out.insert(key.to_string(), Value::Array(rows_out));
    }
    Ok(Value::Object(out))
}

/// The comment-hidden two-table score report. Cells keep their display text;
/// the placeholder sentinel maps to null per cell here instead of the
/// document-wide substitution (the report predates that convention).
fn score_statistics(html: &str, desc: &EndpointDescriptor) -> Result<Value> {
    let revealed = document::reveal_comments(html);
    let doc = Html::parse_document(&revealed);
    let tables = locate_tables(&doc)?;

    if tables.len() < 2 {
        return Err(AppError::missing_table(desc.report));
    }

    let mut out = Map::new();
    out.insert(
        "son_kisi_puan_bilgileri".to_string(),
        Value::Array(score_table(&tables[0])?),
    );
    out.insert(
        "son_kisi_basari_sirasi_bilgileri".to_string(),
        Value::Array(score_table(&tables[1])?),
    );
    Ok(Value::Object(out))
}

fn score_table(table: &ElementRef) -> Result<Vec<Value>> {
    let tr = parse_selector("tr")?;
    let cell_sel = parse_selector("td, th")?;

    let mut data = Vec::new();
    for row in table.select(&tr) {
        let cells: Vec<String> = row.select(&cell_sel).map(|el| text_of(&el)).collect();
        if cells.len() < 4 {
            continue;
        }

        let mut entry = Map::new();
        for (i, header) in SCORE_HEADERS.iter().enumerate() {
            let value = match cells.get(i) {
                Some(text) if !text.is_empty() && text.as_str() != PLACEHOLDER => {
                    Value::String(text.clone())
                }
                _ => Value::Null,
            };
            entry.insert((*header).to_string(), value);
        }

        let quota_type = match entry.get(SCORE_HEADERS[0]) {
            Some(Value::String(s)) => s.clone(),
            _ => continue,
        };
        // Header rows leak into the body on some year snapshots
        if quota_type == SCORE_HEADERS[0] || quota_type == SCORE_HEADERS[1] {
            continue;
        }
        if quota_type == LEGACY_GENERAL_QUOTA {
            entry.insert(
                SCORE_HEADERS[0].to_string(),
                Value::String(GENERAL_QUOTA.to_string()),
            );
        } else if quota_type == EXAMLESS_QUOTA {
            continue;
        }
        data.push(Value::Object(entry));
    }
    Ok(data)
}
