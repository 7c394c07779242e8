use crate::core::postal_index::{is_postal_code, PostalRangeIndex};
use crate::core::registry::RegionRegistry;
use crate::domain::model::{AreaOptions, RadiusMode, ServiceAreaConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Display strings used by [`ServiceAreaCodec::summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryLabels {
    pub country_name: String,
    pub city_placeholder: String,
    pub region_noun_plural: String,
}

impl Default for SummaryLabels {
    fn default() -> Self {
        Self {
            country_name: "Schweiz".to_string(),
            city_placeholder: "Ihre Stadt".to_string(),
            region_noun_plural: "Kantone".to_string(),
        }
    }
}

/// Converts between the flat stored area list and [`ServiceAreaConfig`].
///
/// Stateless: every call is a pure function of the borrowed tables and its
/// arguments, so one codec can be shared across threads.
#[derive(Debug, Clone)]
pub struct ServiceAreaCodec<'a> {
    registry: &'a RegionRegistry,
    index: &'a PostalRangeIndex,
    labels: SummaryLabels,
}

impl<'a> ServiceAreaCodec<'a> {
    pub fn new(registry: &'a RegionRegistry, index: &'a PostalRangeIndex) -> Self {
        Self {
            registry,
            index,
            labels: SummaryLabels::default(),
        }
    }

    pub fn with_labels(mut self, labels: SummaryLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Known region codes present in `stored`, in registry order.
    ///
    /// Repeated codes collapse here; unknown tokens and postal codes are
    /// dropped.
    pub fn region_set<S: AsRef<str>>(&self, stored: &[S]) -> Vec<String> {
        self.registry
            .codes()
            .filter(|code| stored.iter().any(|entry| entry.as_ref() == *code))
            .map(str::to_string)
            .collect()
    }

    /// Known region codes in the order they were stored, repeats skipped.
    fn stored_regions<S: AsRef<str>>(&self, stored: &[S]) -> Vec<String> {
        let mut regions: Vec<String> = Vec::new();
        for entry in stored.iter().map(|entry| entry.as_ref()) {
            if self.registry.is_known(entry) && !regions.iter().any(|r| r == entry) {
                regions.push(entry.to_string());
            }
        }
        regions
    }

    /// Classifies a stored area list. Never fails; empty or unusable input
    /// falls back to an empty `canton` configuration.
    pub fn decode<S: AsRef<str>>(&self, stored: &[S]) -> ServiceAreaConfig {
        let stored_regions = self.stored_regions(stored);
        let stored_postal = stored
            .iter()
            .map(|entry| entry.as_ref())
            .find(|entry| is_postal_code(entry));

        let mut config = ServiceAreaConfig::default();
        let first_region = stored_regions.first().cloned().unwrap_or_default();

        if !stored_regions.is_empty() && stored_regions.len() == self.registry.len() {
            config.radius = RadiusMode::Nationwide;
            config.business_canton = first_region;
        } else if stored_regions.len() > 1 {
            config.radius = RadiusMode::Custom;
            config.business_canton = first_region;
            config.custom_cantons = stored_regions;
        } else if stored_regions.len() == 1 {
            config.radius = RadiusMode::Canton;
            config.business_canton = first_region;
        } else if let Some(plz) = stored_postal {
            config.radius = RadiusMode::City;
            config.business_plz = plz.to_string();
        }

        debug!(
            entries = stored.len(),
            radius = %config.radius,
            business_canton = %config.business_canton,
            business_plz = %config.business_plz,
            "decoded service area"
        );
        config
    }

    /// Flattens a mode and its options into the stored representation.
    ///
    /// `custom` codes are passed through unchecked; `nationwide` ignores the
    /// options entirely.
    pub fn encode(&self, radius: RadiusMode, options: &AreaOptions) -> Vec<String> {
        match radius {
            RadiusMode::City => options.plz().map(str::to_string).into_iter().collect(),
            RadiusMode::Canton => options.canton().map(str::to_string).into_iter().collect(),
            RadiusMode::Nationwide => self.registry.codes().map(str::to_string).collect(),
            RadiusMode::Custom => options.custom_cantons.clone(),
        }
    }

    /// Like [`encode`](Self::encode) for an untyped mode; unknown modes encode to `[]`.
    pub fn encode_raw(&self, radius: &str, options: &AreaOptions) -> Vec<String> {
        match RadiusMode::parse(radius) {
            Some(mode) => self.encode(mode, options),
            None => {
                debug!(radius, "unknown radius mode, encoding nothing");
                Vec::new()
            }
        }
    }

    pub fn encode_config(&self, config: &ServiceAreaConfig) -> Vec<String> {
        self.encode(config.radius, &config.options())
    }

    pub fn estimate_code_count<S: AsRef<str>>(&self, region_codes: &[S]) -> u32 {
        self.index.estimate_code_count(region_codes)
    }

    pub fn summarize(&self, radius: RadiusMode, options: &AreaOptions) -> String {
        let labels = &self.labels;
        match radius {
            RadiusMode::City => {
                let city = options.city().unwrap_or(labels.city_placeholder.as_str());
                match options.plz() {
                    Some(plz) => format!("{} ({}) und Umgebung", city, plz),
                    None => format!("{} und Umgebung", city),
                }
            }
            RadiusMode::Canton => match options.canton() {
                Some(code) => format!("Ganzer Kanton {}", self.registry.label_of(code)),
                None => "Ganzer Kanton".to_string(),
            },
            RadiusMode::Nationwide => format!("Ganze {}", labels.country_name),
            RadiusMode::Custom => {
                if options.custom_cantons.is_empty() {
                    return format!("Keine {} ausgewählt", labels.region_noun_plural);
                }
                let names: Vec<&str> = options
                    .custom_cantons
                    .iter()
                    .map(|code| self.registry.label_of(code))
                    .collect();
                format!(
                    "{} {}: {}",
                    names.len(),
                    labels.region_noun_plural,
                    names.join(", ")
                )
            }
        }
    }

    pub fn summarize_config(&self, config: &ServiceAreaConfig) -> String {
        self.summarize(config.radius, &config.options())
    }
}
