// src/lib.rs

//! Async client library for the YOKATLAS higher-education statistics portal.
//!
//! The portal serves per-program statistical reports as server-rendered HTML
//! fragments keyed by numeric endpoint codes, plus a DataTables-style search
//! endpoint. This crate fetches those pages and extracts structured records
//! from their (inconsistent, undocumented) table markup.

pub mod error;
pub mod models;
pub mod parse;
pub mod services;
pub mod utils;

pub use error::{AppError, Result};
pub use models::{
    AtlasConfig, EndpointDescriptor, FetchSummary, ProgramHit, ProgramTrack, ReportOutcome,
    SearchParams, TableShape,
};
pub use services::{AtlasFetcher, SearchClient};
