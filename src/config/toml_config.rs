use crate::core::codec::SummaryLabels;
use crate::core::postal_index::PostalRangeIndex;
use crate::core::registry::RegionRegistry;
use crate::core::tables::SwissCantons;
use crate::domain::model::{PostalRange, Region};
use crate::domain::ports::RegionTable;
use crate::utils::error::{AreaError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// TOML overrides for the region table and summary labels.
///
/// ```toml
/// [summary]
/// country_name = "Schweiz"
///
/// [[regions]]
/// code = "ZH"
/// label = "Zürich"
/// ranges = ["8000-8999"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub summary: SummaryLabels,
    #[serde(default)]
    pub regions: Vec<RegionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub ranges: Vec<String>,
}

impl TomlConfig {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AreaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AreaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// True when the file replaces the built-in table.
    pub fn overrides_table(&self) -> bool {
        !self.regions.is_empty()
    }

    pub fn validate_config(&self) -> Result<()> {
        for region in &self.regions {
            validation::validate_region_code("regions.code", &region.code)?;
            validation::validate_non_empty_string("regions.label", &region.label)?;
            for range in &region.ranges {
                range.parse::<PostalRange>()?;
            }
        }
        validation::validate_unique("regions.code", self.regions.iter().map(|r| r.code.as_str()))?;

        // Overlaps are accepted; the first declared region wins lookups
        let declared = self.postal_ranges();
        for (i, (code_a, ranges_a)) in declared.iter().enumerate() {
            for (code_b, ranges_b) in &declared[i + 1..] {
                for a in ranges_a {
                    for b in ranges_b.iter().filter(|b| a.overlaps(b)) {
                        warn!(
                            "Postal range {} of {} overlaps {} of {}; {} wins lookups",
                            a, code_a, b, code_b, code_a
                        );
                    }
                }
            }
        }

        Ok(())
    }

    pub fn registry(&self) -> RegionRegistry {
        RegionRegistry::from_table(self)
    }

    pub fn index(&self) -> PostalRangeIndex {
        PostalRangeIndex::from_table(self)
    }
}

impl RegionTable for TomlConfig {
    fn regions(&self) -> Vec<Region> {
        if !self.overrides_table() {
            return SwissCantons.regions();
        }
        self.regions
            .iter()
            .map(|r| Region::new(r.code.clone(), r.label.clone()))
            .collect()
    }

    fn postal_ranges(&self) -> Vec<(String, Vec<PostalRange>)> {
        if !self.overrides_table() {
            return SwissCantons.postal_ranges();
        }
        self.regions
            .iter()
            .map(|r| {
                let ranges = r
                    .ranges
                    .iter()
                    .filter_map(|raw| match raw.parse::<PostalRange>() {
                        Ok(range) => Some(range),
                        Err(e) => {
                            warn!("Skipping postal range of {}: {}", r.code, e);
                            None
                        }
                    })
                    .collect();
                (r.code.clone(), ranges)
            })
            .collect()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_builtin_table() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(!config.overrides_table());
        assert_eq!(config.summary, SummaryLabels::default());
        assert_eq!(config.registry().len(), 26);
        assert_eq!(config.index().region_of("8000"), Some("ZH"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_region_table() {
        let toml_content = r#"
[summary]
country_name = "Testland"

[[regions]]
code = "AA"
label = "Alpha"
ranges = ["1000-1999", "3000"]

[[regions]]
code = "BB"
label = "Beta"
ranges = ["2000-2999"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.summary.country_name, "Testland");
        assert_eq!(config.summary.city_placeholder, "Ihre Stadt");

        let registry = config.registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.label_of("BB"), "Beta");

        let index = config.index();
        assert_eq!(index.region_of("3000"), Some("AA"));
        assert_eq!(index.estimate_code_count(&["AA"]), 1001);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SERVICE_AREA_TEST_COUNTRY", "Suisse");

        let toml_content = r#"
[summary]
country_name = "${SERVICE_AREA_TEST_COUNTRY}"
city_placeholder = "${SERVICE_AREA_TEST_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.summary.country_name, "Suisse");
        assert_eq!(config.summary.city_placeholder, "${SERVICE_AREA_TEST_UNSET}");

        std::env::remove_var("SERVICE_AREA_TEST_COUNTRY");
    }

    #[test]
    fn test_config_validation() {
        let bad_code = r#"
[[regions]]
code = "AAA"
label = "Alpha"
"#;
        assert!(TomlConfig::from_toml_str(bad_code).unwrap().validate().is_err());

        let bad_range = r#"
[[regions]]
code = "AA"
label = "Alpha"
ranges = ["1999-1000"]
"#;
        assert!(TomlConfig::from_toml_str(bad_range).unwrap().validate().is_err());

        let duplicate = r#"
[[regions]]
code = "AA"
label = "Alpha"

[[regions]]
code = "AA"
label = "Again"
"#;
        assert!(TomlConfig::from_toml_str(duplicate).unwrap().validate().is_err());
    }

    #[test]
    fn test_overlap_is_accepted() {
        let toml_content = r#"
[[regions]]
code = "AA"
label = "Alpha"
ranges = ["1000-1999"]

[[regions]]
code = "BB"
label = "Beta"
ranges = ["1500-2500"]
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.index().region_of("1600"), Some("AA"));
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[[regions]\ncode = ");
        assert!(matches!(result, Err(AreaError::ConfigValidationError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[[regions]]
code = "AA"
label = "Alpha"
ranges = ["1000-1099"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.regions.len(), 1);
        assert_eq!(config.regions[0].code, "AA");
    }
}
