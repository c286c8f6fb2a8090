// src/services/search.rs

//! Tabular search service.
//!
//! The search endpoint speaks the DataTables server-side protocol: a wide
//! urlencoded form in, a JSON envelope of row arrays out. Some deployments
//! prepend PHP warnings to the JSON body, so decoding falls back to cutting
//! the first `{...}` object out of the response text.

use std::sync::Arc;

use regex::Regex;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::{AppError, Result};
use crate::models::{AtlasConfig, ProgramHit, ProgramTrack, SearchParams};
use crate::parse::search::{YearColors, assemble, payload_rows};
use crate::services::normalize;
use crate::utils::http::{AtlasGateway, HttpGateway};
use crate::utils::url::search_url;

const DEFAULT_LENGTH: u32 = 50;

/// Column counts of the two result grids.
const BACHELOR_COLUMNS: usize = 47;
const ASSOCIATE_COLUMNS: usize = 33;

/// Client for the program search endpoints.
pub struct SearchClient {
    gateway: Arc<dyn HttpGateway>,
    config: Arc<AtlasConfig>,
}

impl SearchClient {
    /// Create a client over an injected gateway (shared, pooled).
    pub fn new(gateway: Arc<dyn HttpGateway>, config: Arc<AtlasConfig>) -> Self {
        Self { gateway, config }
    }

    /// Create a client with its own live gateway.
    pub fn with_defaults(config: Arc<AtlasConfig>) -> Result<Self> {
        let gateway = Arc::new(AtlasGateway::new(&config.http)?);
        Ok(Self::new(gateway, config))
    }

    /// Search one track with normalized parameters.
    pub async fn search(
        &self,
        track: ProgramTrack,
        params: &SearchParams,
    ) -> Result<Vec<ProgramHit>> {
        let normalized = normalize::normalize_params(track, params);
        let body = build_form(track, &normalized);
        let url = search_url(&self.config.portal, track);

        let text = self.gateway.post_form(&url, body).await?;
        let payload = decode_payload(&text)?;

        let colors = YearColors::for_track(track, self.config.portal.current_year);
        Ok(payload_rows(&payload)
            .iter()
            .map(|row| assemble(track, row, &colors))
            .collect())
    }

    /// Search with program-name expansion: short names fan out to their
    /// known full names, results merged and deduplicated by program code.
    pub async fn search_expanded(
        &self,
        track: ProgramTrack,
        params: &SearchParams,
    ) -> Result<Vec<ProgramHit>> {
        let normalized = normalize::normalize_params(track, params);
        let Some(program) = normalized.program.clone() else {
            return self.search(track, &normalized).await;
        };

        let mut merged: Vec<ProgramHit> = Vec::new();
        for variant in normalize::expand_program(&program) {
            let mut variant_params = normalized.clone();
            variant_params.program = Some(variant.clone());

            match self.search(track, &variant_params).await {
                Ok(hits) => {
                    for hit in hits {
                        if !merged.iter().any(|seen| seen.code == hit.code) {
                            merged.push(hit);
                        }
                    }
                }
                Err(error) => {
                    log::warn!("Search for program variant '{variant}' failed: {error}");
                }
            }
        }
        Ok(merged)
    }
}

/// Decode the response body as JSON, tolerating leading/trailing garbage.
fn decode_payload(text: &str) -> Result<Value> {
    if let Ok(value) = serde_json::from_str(text) {
        return Ok(value);
    }

    let pattern =
        Regex::new(r"(?s)\{.*\}").map_err(|e| AppError::parse("search", e))?;
    let matched = pattern
        .find(text)
        .ok_or_else(|| AppError::parse("search", "no JSON object in response"))?;
    Ok(serde_json::from_str(matched.as_str())?)
}

/// Build the DataTables-style form body for one search request.
fn build_form(track: ProgramTrack, params: &SearchParams) -> String {
    let length = params.length.unwrap_or(DEFAULT_LENGTH);
    let start = match (params.start, params.page) {
        (Some(start), _) => start,
        (None, Some(page)) => page.saturating_sub(1) * length,
        (None, None) => 0,
    };

    let default_score = match track {
        ProgramTrack::Bachelor => "say",
        ProgramTrack::Associate => "tyt",
    };

    let mut form = form_urlencoded::Serializer::new(String::new());
    form.append_pair("draw", "2");
    form.append_pair("start", &start.to_string());
    form.append_pair("length", &length.to_string());
    form.append_pair("search[value]", "");
    form.append_pair("search[regex]", "false");

    let columns = match track {
        ProgramTrack::Bachelor => BACHELOR_COLUMNS,
        ProgramTrack::Associate => ASSOCIATE_COLUMNS,
    };
    for i in 0..columns {
        form.append_pair(&format!("columns[{i}][data]"), &i.to_string());
        form.append_pair(&format!("columns[{i}][name]"), "");
        form.append_pair(&format!("columns[{i}][searchable]"), "true");
        form.append_pair(&format!("columns[{i}][orderable]"), "false");
        form.append_pair(&format!("columns[{i}][search][value]"), "");
        form.append_pair(&format!("columns[{i}][search][regex]"), "false");
    }

    // Default ordering: base score descending, then the stable tiebreakers
    for (i, (column, dir)) in [("37", "desc"), ("41", "asc"), ("42", "asc")]
        .into_iter()
        .enumerate()
    {
        form.append_pair(&format!("order[{i}][column]"), column);
        form.append_pair(&format!("order[{i}][dir]"), dir);
    }

    form.append_pair("puan_turu", params.score_type.as_deref().unwrap_or(default_score));
    form.append_pair("ust_bs", "");
    form.append_pair("alt_bs", "");
    form.append_pair("yeniler", "1");
    form.append_pair("kilavuz_kodu", "");
    form.append_pair("universite", params.university.as_deref().unwrap_or(""));
    form.append_pair("program", params.program.as_deref().unwrap_or(""));
    form.append_pair("sehir", params.city.as_deref().unwrap_or(""));
    form.append_pair(
        "universite_turu",
        params.university_type.as_deref().unwrap_or(""),
    );
    form.append_pair("ucret", params.fee.as_deref().unwrap_or(""));
    form.append_pair("ogretim_turu", params.education_type.as_deref().unwrap_or(""));
    form.append_pair("doluluk", "");
    form.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct StubGateway {
        response: String,
    }

    #[async_trait]
    impl HttpGateway for StubGateway {
        async fn get_text(&self, _url: &str) -> Result<String> {
            Err(AppError::parse("stub", "unexpected GET"))
        }

        async fn post_form(&self, _url: &str, _body: String) -> Result<String> {
            Ok(self.response.clone())
        }
    }

    fn client(response: String) -> SearchClient {
        SearchClient::new(
            Arc::new(StubGateway { response }),
            Arc::new(AtlasConfig::default()),
        )
    }

    fn sample_payload() -> Value {
        let mut row = vec![String::new(); 28];
        row[1] = "123456789".to_string();
        row[2] = "BOĞAZİÇİ ÜNİVERSİTESİ<br><font color='#CC0000'>Mühendislik Fakültesi</font>"
            .to_string();
        row[4] = "Bilgisayar Mühendisliği".to_string();
        row[10] = "Kontenjan<br><font color='red'>100</font>".to_string();
        json!({ "draw": 1, "recordsTotal": 1, "recordsFiltered": 1, "data": [row] })
    }

    #[tokio::test]
    async fn search_assembles_hits() {
        let client = client(sample_payload().to_string());
        let hits = client
            .search(ProgramTrack::Bachelor, &SearchParams::default())
            .await
            .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code.as_deref(), Some("123456789"));
        assert_eq!(hits[0].faculty.as_deref(), Some("Mühendislik Fakültesi"));
        assert_eq!(hits[0].quota[&2025].as_deref(), Some("100"));
    }

    #[tokio::test]
    async fn search_recovers_json_from_mixed_response() {
        let mixed = format!("<b>Warning</b>: unrelated PHP notice\n{}", sample_payload());
        let client = client(mixed);
        let hits = client
            .search(ProgramTrack::Bachelor, &SearchParams::default())
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn search_fails_without_json() {
        let client = client("<html>not json at all</html>".to_string());
        let result = client
            .search(ProgramTrack::Bachelor, &SearchParams::default())
            .await;
        assert!(matches!(result, Err(AppError::Parse { .. })));
    }

    #[tokio::test]
    async fn empty_data_yields_no_hits() {
        let client = client(json!({"draw": 1, "data": []}).to_string());
        let hits = client
            .search(ProgramTrack::Associate, &SearchParams::default())
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn search_expanded_merges_and_dedupes_variants() {
        // "hemsire" expands to two full names; both variant queries return
        // the same program, which must appear only once
        let client = client(sample_payload().to_string());
        let params = SearchParams {
            program: Some("hemsire".to_string()),
            ..SearchParams::default()
        };

        let hits = client
            .search_expanded(ProgramTrack::Bachelor, &params)
            .await
            .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code.as_deref(), Some("123456789"));
    }

    #[test]
    fn form_carries_filters_and_paging() {
        let params = SearchParams {
            university: Some("ORTA DOĞU TEKNİK ÜNİVERSİTESİ".to_string()),
            score_type: Some("ea".to_string()),
            page: Some(2),
            ..SearchParams::default()
        };
        let body = build_form(ProgramTrack::Bachelor, &params);

        assert!(body.contains("puan_turu=ea"));
        assert!(body.contains("start=50"));
        assert!(body.contains("length=50"));
        // DataTables column parameters are present (brackets urlencoded)
        assert!(body.contains("columns%5B0%5D%5Bdata%5D=0"));
        assert!(body.contains("order%5B0%5D%5Bcolumn%5D=37"));
    }

    #[test]
    fn form_defaults_score_type_per_track() {
        let body = build_form(ProgramTrack::Associate, &SearchParams::default());
        assert!(body.contains("puan_turu=tyt"));

        let body = build_form(ProgramTrack::Bachelor, &SearchParams::default());
        assert!(body.contains("puan_turu=say"));
    }
}
