use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Themis configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemisConfig {
    /// Notice policy settings.
    #[serde(default)]
    pub policy: PolicyToml,

    /// Holiday calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,
}

impl ThemisConfig {
    /// Loads the configuration from an optional TOML path.
    ///
    /// `None` yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyToml {
    #[serde(default = "default_required_business_days")]
    pub required_business_days: u32,
    #[serde(default = "default_publication_buffer_days")]
    pub publication_buffer_days: u32,
}

impl Default for PolicyToml {
    fn default() -> Self {
        Self {
            required_business_days: default_required_business_days(),
            publication_buffer_days: default_publication_buffer_days(),
        }
    }
}

fn default_required_business_days() -> u32 {
    10
}
fn default_publication_buffer_days() -> u32 {
    3
}

/// Holiday table year span. When unset, the span is derived from today
/// and the furthest meeting date with one year of margin on each side.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ThemisConfig::default();
        assert_eq!(config.policy.required_business_days, 10);
        assert_eq!(config.policy.publication_buffer_days, 3);
        assert!(config.calendar.start_year.is_none());
    }

    #[test]
    fn parse_full_toml() {
        let config: ThemisConfig = toml::from_str(
            r#"
            [policy]
            required_business_days = 15
            publication_buffer_days = 5

            [calendar]
            start_year = 2024
            end_year = 2027
            "#,
        )
        .unwrap();
        assert_eq!(config.policy.required_business_days, 15);
        assert_eq!(config.policy.publication_buffer_days, 5);
        assert_eq!(config.calendar.start_year, Some(2024));
        assert_eq!(config.calendar.end_year, Some(2027));
    }

    #[test]
    fn partial_sections_fall_back_to_defaults() {
        let config: ThemisConfig = toml::from_str(
            r#"
            [policy]
            required_business_days = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.policy.required_business_days, 12);
        assert_eq!(config.policy.publication_buffer_days, 3);
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<ThemisConfig, _> = toml::from_str(
            r#"
            [policy]
            business_days = 12
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn load_none_is_default() {
        let config = ThemisConfig::load(None).unwrap();
        assert_eq!(config.policy.required_business_days, 10);
    }
}
