//! Service layer for the atlas client.
//!
//! This module contains the I/O-facing logic:
//! - Report fetching and the composite all-reports operation (`AtlasFetcher`)
//! - The tabular search endpoint (`SearchClient`)
//! - Search parameter normalization (`normalize`)

mod normalize;
mod reports;
mod search;

pub use normalize::{expand_program, normalize_params, normalize_university};
pub use reports::AtlasFetcher;
pub use search::SearchClient;
