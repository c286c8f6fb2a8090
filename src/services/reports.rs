// src/services/reports.rs

//! Report fetching service.
//!
//! One generic fetcher, parameterized by the endpoint descriptor registry,
//! replaces the portal's per-report URL zoo. The composite fetch issues all
//! sub-fetches concurrently with per-task failure isolation.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{
    AtlasConfig, EndpointDescriptor, FetchSummary, ProgramTrack, ReportOutcome, descriptor,
    descriptors_for,
};
use crate::parse;
use crate::utils::http::{AtlasGateway, HttpGateway};
use crate::utils::url::report_url;

/// Fetches statistical reports for a program and year.
pub struct AtlasFetcher {
    gateway: Arc<dyn HttpGateway>,
    config: Arc<AtlasConfig>,
}

impl AtlasFetcher {
    /// Create a fetcher over an injected gateway (shared, pooled).
    pub fn new(gateway: Arc<dyn HttpGateway>, config: Arc<AtlasConfig>) -> Self {
        Self { gateway, config }
    }

    /// Create a fetcher with its own live gateway.
    pub fn with_defaults(config: Arc<AtlasConfig>) -> Result<Self> {
        let gateway = Arc::new(AtlasGateway::new(&config.http)?);
        Ok(Self::new(gateway, config))
    }

    fn validate_year(&self, year: u16) -> Result<()> {
        if !self.config.portal.is_year_supported(year) {
            return Err(AppError::invalid_year(
                year,
                &self.config.portal.supported_years,
            ));
        }
        Ok(())
    }

    /// Fetch and parse one report.
    ///
    /// The year check runs before any network activity; an unsupported year
    /// never produces a request.
    pub async fn fetch_report(
        &self,
        track: ProgramTrack,
        report: &str,
        program_id: &str,
        year: u16,
    ) -> Result<Value> {
        self.validate_year(year)?;

        let desc = descriptor(track, report).ok_or_else(|| {
            AppError::config(format!("unknown report '{report}' for {track:?}"))
        })?;

        let url = report_url(&self.config.portal, desc, program_id, year);
        let body = self.gateway.get_text(&url).await?;
        parse::parse_report(&body, desc, &self.config.parsing.placeholder_default)
    }

    /// Fetch every report of a track concurrently (optionally a subset).
    ///
    /// Sub-fetches are independent: one failure neither cancels nor
    /// invalidates siblings. The summary separates data-bearing, empty, and
    /// failed reports.
    pub async fn fetch_all(
        &self,
        track: ProgramTrack,
        program_id: &str,
        year: u16,
        subset: Option<&[&str]>,
    ) -> FetchSummary {
        let descriptors: Vec<&'static EndpointDescriptor> = descriptors_for(track)
            .filter(|d| subset.is_none_or(|names| names.contains(&d.report)))
            .collect();

        let concurrency = self.config.http.max_concurrent.max(1);
        let delay = Duration::from_millis(self.config.http.request_delay_ms);
        let mut summary = FetchSummary::default();

        let mut results = stream::iter(descriptors)
            .map(|desc| async move {
                let result = self
                    .fetch_report(track, desc.report, program_id, year)
                    .await;
                (desc.report, result)
            })
            .buffer_unordered(concurrency);

        while let Some((report, result)) = results.next().await {
            match result {
                Ok(value) => summary.record(report, ReportOutcome::classify(value)),
                Err(error) => {
                    log::warn!("Report {report} failed: {error}");
                    summary.record(report, ReportOutcome::Failed(error));
                }
            }

            if delay.as_millis() > 0 {
                tokio::time::sleep(delay).await;
            }
        }

        summary
    }
}
