//! Dashboard Configuration
//!
//! Resolved at build time: a WASM bundle has no process environment, so the
//! variables are captured with `option_env!` and parsed once at startup.

use log::LevelFilter;

pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 500;

/// Which location store the dashboard talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// In-browser store seeded with demo data
    Mock { latency_ms: u32, fail_writes: bool },
    /// HTTP store rooted at `base_url`
    Http { base_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub backend: Backend,
    pub page_size: usize,
    pub search_debounce_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Mock {
                latency_ms: 0,
                fail_writes: false,
            },
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl DashboardConfig {
    /// Configuration baked in by the build environment.
    pub fn from_build_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| {
            let value = match key {
                "FLEET_API_BASE_URL" => option_env!("FLEET_API_BASE_URL"),
                "FLEET_PAGE_SIZE" => option_env!("FLEET_PAGE_SIZE"),
                "FLEET_SEARCH_DEBOUNCE_MS" => option_env!("FLEET_SEARCH_DEBOUNCE_MS"),
                "FLEET_MOCK_LATENCY_MS" => option_env!("FLEET_MOCK_LATENCY_MS"),
                "FLEET_MOCK_FAIL_WRITES" => option_env!("FLEET_MOCK_FAIL_WRITES"),
                "FLEET_LOG_LEVEL" => option_env!("FLEET_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Build a configuration from a variable lookup.
    ///
    /// Invalid values keep their defaults; one warning per rejected value is
    /// returned so it can be logged once the logger is up.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        let parsed = |key: &str, warnings: &mut Vec<String>| -> Option<u64> {
            let raw = lookup(key)?;
            match raw.trim().parse::<u64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warnings.push(format!("ignoring {key}={raw:?}: not a number"));
                    None
                }
            }
        };

        match parsed("FLEET_PAGE_SIZE", &mut warnings) {
            Some(0) => warnings.push("ignoring FLEET_PAGE_SIZE=0".to_string()),
            Some(size) => config.page_size = size as usize,
            None => {}
        }
        if let Some(ms) = parsed("FLEET_SEARCH_DEBOUNCE_MS", &mut warnings) {
            config.search_debounce_ms = ms.min(u32::MAX as u64) as u32;
        }
        let latency_ms = parsed("FLEET_MOCK_LATENCY_MS", &mut warnings)
            .map(|ms| ms.min(u32::MAX as u64) as u32)
            .unwrap_or(0);

        let fail_writes = match lookup("FLEET_MOCK_FAIL_WRITES").as_deref().map(str::trim) {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                warnings.push(format!("ignoring FLEET_MOCK_FAIL_WRITES={other:?}"));
                false
            }
        };

        config.backend = match lookup("FLEET_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Backend::Http {
                base_url: url.trim().trim_end_matches('/').to_string(),
            },
            _ => Backend::Mock {
                latency_ms,
                fail_writes,
            },
        };

        if let Some(level) = lookup("FLEET_LOG_LEVEL") {
            match level.trim().parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => warnings.push(format!("ignoring FLEET_LOG_LEVEL={level:?}")),
            }
        }

        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_use_mock_backend() {
        let (config, warnings) = DashboardConfig::from_lookup(|_| None);
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.page_size, 6);
        assert_eq!(config.search_debounce_ms, 500);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_base_url_selects_http_backend() {
        let (config, _) = DashboardConfig::from_lookup(lookup_from(&[
            ("FLEET_API_BASE_URL", "http://localhost:8080/"),
            ("FLEET_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(
            config.backend,
            Backend::Http {
                base_url: "http://localhost:8080".into()
            }
        );
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_mock_options() {
        let (config, warnings) = DashboardConfig::from_lookup(lookup_from(&[
            ("FLEET_MOCK_LATENCY_MS", "250"),
            ("FLEET_MOCK_FAIL_WRITES", "true"),
            ("FLEET_SEARCH_DEBOUNCE_MS", "300"),
        ]));
        assert!(warnings.is_empty());
        assert_eq!(
            config.backend,
            Backend::Mock {
                latency_ms: 250,
                fail_writes: true
            }
        );
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn test_invalid_values_fall_back_with_warnings() {
        let (config, warnings) = DashboardConfig::from_lookup(lookup_from(&[
            ("FLEET_PAGE_SIZE", "zero"),
            ("FLEET_LOG_LEVEL", "loud"),
            ("FLEET_MOCK_FAIL_WRITES", "maybe"),
        ]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(warnings.len(), 3);

        let (config, warnings) =
            DashboardConfig::from_lookup(lookup_from(&[("FLEET_PAGE_SIZE", "0")]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(warnings.len(), 1);
    }
}
