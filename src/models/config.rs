//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AtlasConfig {
    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Portal addressing and year handling
    #[serde(default)]
    pub portal: PortalConfig,

    /// HTML parsing behavior
    #[serde(default)]
    pub parsing: ParsingConfig,
}

impl AtlasConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        if self.http.max_concurrent == 0 {
            return Err(AppError::config("http.max_concurrent must be > 0"));
        }
        if self.portal.base_url.trim().is_empty() {
            return Err(AppError::config("portal.base_url is empty"));
        }
        if self.portal.supported_years.is_empty() {
            return Err(AppError::config("portal.supported_years is empty"));
        }
        if !self.portal.supported_years.contains(&self.portal.current_year) {
            return Err(AppError::config(
                "portal.current_year must be a supported year",
            ));
        }
        if !self
            .portal
            .supported_years
            .contains(&self.portal.unversioned_year)
        {
            return Err(AppError::config(
                "portal.unversioned_year must be a supported year",
            ));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum concurrent requests in a composite fetch
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Delay between requests in milliseconds
    #[serde(default)]
    pub request_delay_ms: u64,

    /// Verify TLS certificates (the portal's chain is broken, so off by default)
    #[serde(default)]
    pub verify_tls: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
            request_delay_ms: 0,
            verify_tls: false,
        }
    }
}

/// Portal addressing and supported-year settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Base URL of the portal
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Years the portal serves report data for
    #[serde(default = "defaults::supported_years")]
    pub supported_years: Vec<u16>,

    /// Most recent admission year (drives the color-to-year mapping in search cells)
    #[serde(default = "defaults::current_year")]
    pub current_year: u16,

    /// The one year whose report URLs carry no year path segment
    #[serde(default = "defaults::unversioned_year")]
    pub unversioned_year: u16,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            supported_years: defaults::supported_years(),
            current_year: defaults::current_year(),
            unversioned_year: defaults::unversioned_year(),
        }
    }
}

impl PortalConfig {
    /// Check whether a year is in the supported set.
    pub fn is_year_supported(&self, year: u16) -> bool {
        self.supported_years.contains(&year)
    }
}

/// HTML parsing behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsingConfig {
    /// Replacement for the 3-dash "no data" sentinel, applied document-wide
    #[serde(default = "defaults::placeholder_default")]
    pub placeholder_default: String,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            placeholder_default: defaults::placeholder_default(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
         (KHTML, like Gecko) Version/18.5 Safari/605.1.15"
            .into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        8
    }

    // Portal defaults
    pub fn base_url() -> String {
        "https://yokatlas.yok.gov.tr".into()
    }
    pub fn supported_years() -> Vec<u16> {
        vec![2022, 2023, 2024, 2025]
    }
    pub fn current_year() -> u16 {
        2025
    }
    pub fn unversioned_year() -> u16 {
        2024
    }

    // Parsing defaults
    pub fn placeholder_default() -> String {
        "0".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn validate_default_config_ok() {
        assert!(AtlasConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = AtlasConfig::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_concurrency() {
        let mut config = AtlasConfig::default();
        config.http.max_concurrent = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unsupported_current_year() {
        let mut config = AtlasConfig::default();
        config.portal.current_year = 2019;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_toml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[http]\ntimeout_secs = 5\n\n[portal]\nsupported_years = [2024, 2025]\n"
        )
        .unwrap();

        let config = AtlasConfig::load(file.path()).unwrap();
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.portal.supported_years, vec![2024, 2025]);
        // Untouched sections fall back to defaults
        assert_eq!(config.portal.current_year, 2025);
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = AtlasConfig::load_or_default("/nonexistent/config.toml");
        assert_eq!(config.portal.supported_years, vec![2022, 2023, 2024, 2025]);
    }
}
