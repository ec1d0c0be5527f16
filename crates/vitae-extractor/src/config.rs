//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use vitae_domain::DegreeLevel;

/// Configuration for the Extractor
///
/// Window sizes, the year range and the per-level caps were tuned against a
/// CV corpus; they are knobs, not algorithmic constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Preceding lines walked when a mention has no on-line institution
    pub institution_lookback: usize,

    /// Lines above and below the mention searched for a year
    pub year_window: usize,

    /// Lines above and below the mention searched for a field of study
    pub field_window: usize,

    /// Earliest accepted graduation year (inclusive)
    pub min_year: u16,

    /// Latest accepted graduation year (inclusive)
    pub max_year: u16,

    /// Maximum undergraduate degrees kept per record
    pub max_undergrad: usize,

    /// Maximum master's degrees kept per record
    pub max_masters: usize,

    /// Maximum doctoral degrees kept per record
    pub max_phd: usize,

    /// Leading lines considered by the name extractor
    pub name_scan_lines: usize,

    /// Match every non-overlapping degree token on a line instead of the first only
    pub multi_token_lines: bool,

    /// Re-space CamelCase runs in text whose spaces were lost during extraction
    pub split_collapsed_words: bool,
}

impl ExtractorConfig {
    /// Maximum degrees kept for a level
    pub fn cap_for(&self, level: DegreeLevel) -> usize {
        match level {
            DegreeLevel::Phd => self.max_phd,
            DegreeLevel::Masters => self.max_masters,
            DegreeLevel::Undergrad => self.max_undergrad,
        }
    }

    /// Whether a numeric year falls inside the accepted range
    pub fn year_in_range(&self, year: u16) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if !(1000..=9999).contains(&self.min_year) || !(1000..=9999).contains(&self.max_year) {
            return Err(ExtractorError::Config(
                "min_year and max_year must be 4-digit years".to_string(),
            ));
        }
        if self.min_year > self.max_year {
            return Err(ExtractorError::Config(format!(
                "min_year {} cannot exceed max_year {}",
                self.min_year, self.max_year
            )));
        }
        if self.name_scan_lines == 0 {
            return Err(ExtractorError::Config(
                "name_scan_lines must be greater than 0".to_string(),
            ));
        }
        if self.max_undergrad == 0 && self.max_masters == 0 && self.max_phd == 0 {
            return Err(ExtractorError::Config(
                "at least one per-level cap must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            institution_lookback: 5,
            year_window: 1,
            field_window: 1,
            min_year: 1950,
            max_year: 2035,
            max_undergrad: 2,
            max_masters: 2,
            max_phd: 1,
            name_scan_lines: 15,
            multi_token_lines: true,
            split_collapsed_words: true,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: context only from the mention's own line and its nearest neighbours
    pub fn strict() -> Self {
        Self {
            institution_lookback: 2,
            year_window: 0,
            field_window: 0,
            multi_token_lines: false,
            ..Self::default()
        }
    }

    /// Lenient preset: wider windows for loosely formatted documents
    pub fn lenient() -> Self {
        Self {
            institution_lookback: 8,
            year_window: 2,
            field_window: 2,
            name_scan_lines: 25,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ExtractorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ExtractorConfig::strict().validate().is_ok());
        assert!(ExtractorConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_inverted_year_range() {
        let config = ExtractorConfig {
            min_year: 2030,
            max_year: 2000,
            ..ExtractorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_non_four_digit_year() {
        let config = ExtractorConfig {
            min_year: 950,
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_name_scan_lines() {
        let config = ExtractorConfig {
            name_scan_lines: 0,
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cap_for_levels() {
        let config = ExtractorConfig::default();
        assert_eq!(config.cap_for(DegreeLevel::Phd), 1);
        assert_eq!(config.cap_for(DegreeLevel::Masters), 2);
        assert_eq!(config.cap_for(DegreeLevel::Undergrad), 2);
    }

    #[test]
    fn test_year_in_range_is_inclusive() {
        let config = ExtractorConfig::default();
        assert!(config.year_in_range(1950));
        assert!(config.year_in_range(2035));
        assert!(!config.year_in_range(1949));
        assert!(!config.year_in_range(2036));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::lenient();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ExtractorConfig::from_toml("year_window = 0\n").unwrap();
        assert_eq!(parsed.year_window, 0);
        assert_eq!(parsed.institution_lookback, 5);
    }

    #[test]
    fn test_invalid_toml_values_rejected() {
        let result = ExtractorConfig::from_toml("min_year = 2040\nmax_year = 2000\n");
        assert!(result.is_err());
    }
}
