// src/models/search.rs

//! Search request parameters and assembled result records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Values of one statistic across the years packed into a search cell.
/// A year maps to `None` when its color fragment is absent from the cell.
pub type YearValues = BTreeMap<u16, Option<String>>;

/// Search filter parameters.
///
/// Field aliases accept the parameter spellings callers commonly use
/// (both the portal's Turkish names and English equivalents).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Score type: say, ea, söz, dil (bachelor) or tyt (associate)
    #[serde(alias = "puan_turu")]
    pub score_type: Option<String>,

    #[serde(alias = "universite", alias = "uni_adi", alias = "uni")]
    pub university: Option<String>,

    #[serde(alias = "program_adi", alias = "bolum", alias = "department")]
    pub program: Option<String>,

    #[serde(alias = "sehir", alias = "il")]
    pub city: Option<String>,

    /// Devlet or Vakıf
    #[serde(alias = "universite_turu", alias = "uni_type")]
    pub university_type: Option<String>,

    /// Burslu, Ücretli, %50 İndirimli, ...
    #[serde(alias = "ucret", alias = "ucret_durumu")]
    pub fee: Option<String>,

    /// Örgün or İkinci Öğretim
    #[serde(alias = "ogretim_turu", alias = "egitim_turu")]
    pub education_type: Option<String>,

    /// Results per page
    pub length: Option<u32>,

    /// Start index for pagination
    pub start: Option<u32>,

    /// 1-based page number, converted to a start index
    pub page: Option<u32>,
}

/// One assembled search hit.
///
/// Values are display-ready strings (dots stripped from rankings, decimal
/// commas mapped to dots in scores); final numeric coercion is left to the
/// caller, matching the portal's own convention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramHit {
    /// 9-digit program code
    pub code: Option<String>,
    pub university: Option<String>,
    pub faculty: Option<String>,
    pub program: Option<String>,
    pub program_detail: Option<String>,
    pub city: Option<String>,
    pub university_type: Option<String>,
    pub fee_scholarship: Option<String>,
    pub education_type: Option<String>,
    /// Admission quota per year
    pub quota: YearValues,
    /// Placed student count per year
    pub placed: YearValues,
    /// Lowest admitted ranking per year
    pub ranking: YearValues,
    /// Lowest admitted score per year
    pub base_score: YearValues,
}
