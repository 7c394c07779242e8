use crate::utils::error::AreaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A country subdivision (canton) known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub label: String,
}

impl Region {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Inclusive interval of 4-digit postal codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalRange {
    pub start: u16,
    pub end: u16,
}

impl PostalRange {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, code: u16) -> bool {
        code >= self.start && code <= self.end
    }

    /// Number of numeric codes in the interval, issued or not.
    pub fn len(&self) -> u32 {
        if self.end < self.start {
            return 0;
        }
        u32::from(self.end - self.start) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn overlaps(&self, other: &PostalRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for PostalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{:04}", self.start)
        } else {
            write!(f, "{:04}-{:04}", self.start, self.end)
        }
    }
}

impl FromStr for PostalRange {
    type Err = AreaError;

    /// Accepts `"8000-8999"` or a single code `"8000"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| AreaError::InvalidConfigValueError {
            field: "postal_range".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };
        let parse_bound = |part: &str| -> Result<u16, AreaError> {
            let part = part.trim();
            if part.len() != 4 || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid("Bounds must be 4-digit postal codes"));
            }
            part.parse::<u16>()
                .map_err(|_| invalid("Bounds must be 4-digit postal codes"))
        };

        let (start, end) = match s.split_once('-') {
            Some((start, end)) => (parse_bound(start)?, parse_bound(end)?),
            None => {
                let code = parse_bound(s)?;
                (code, code)
            }
        };
        if start > end {
            return Err(invalid("Range start must not exceed range end"));
        }
        Ok(Self { start, end })
    }
}

/// Canonical coverage classification of a stored area list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusMode {
    City,
    #[default]
    Canton,
    Nationwide,
    Custom,
}

impl RadiusMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RadiusMode::City => "city",
            RadiusMode::Canton => "canton",
            RadiusMode::Nationwide => "nationwide",
            RadiusMode::Custom => "custom",
        }
    }

    /// Lenient parse; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "city" => Some(RadiusMode::City),
            "canton" => Some(RadiusMode::Canton),
            "nationwide" => Some(RadiusMode::Nationwide),
            "custom" => Some(RadiusMode::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for RadiusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RadiusMode {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RadiusMode::parse(s).ok_or_else(|| AreaError::InvalidConfigValueError {
            field: "radius".to_string(),
            value: s.to_string(),
            reason: "Expected one of: city, canton, nationwide, custom".to_string(),
        })
    }
}

/// Inputs for `encode` and `summarize`. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaOptions {
    pub plz: Option<String>,
    pub city: Option<String>,
    pub canton: Option<String>,
    #[serde(default)]
    pub custom_cantons: Vec<String>,
}

impl AreaOptions {
    pub fn plz(&self) -> Option<&str> {
        present(&self.plz)
    }

    pub fn city(&self) -> Option<&str> {
        present(&self.city)
    }

    pub fn canton(&self) -> Option<&str> {
        present(&self.canton)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Decoded form of a stored area list, as handed to the form layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAreaConfig {
    pub radius: RadiusMode,
    pub business_plz: String,
    pub business_canton: String,
    pub business_city: String,
    pub custom_cantons: Vec<String>,
}

impl ServiceAreaConfig {
    pub fn options(&self) -> AreaOptions {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        AreaOptions {
            plz: non_empty(self.business_plz.as_str()),
            city: non_empty(self.business_city.as_str()),
            canton: non_empty(self.business_canton.as_str()),
            custom_cantons: self.custom_cantons.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_range_parse() {
        let range: PostalRange = "8000-8999".parse().unwrap();
        assert_eq!(range, PostalRange::new(8000, 8999));
        assert_eq!(range.len(), 1000);

        let single: PostalRange = "3000".parse().unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.to_string(), "3000");

        assert!("8999-8000".parse::<PostalRange>().is_err());
        assert!("800-8999".parse::<PostalRange>().is_err());
        assert!("abcd".parse::<PostalRange>().is_err());
    }

    #[test]
    fn test_postal_range_contains_is_inclusive() {
        let range = PostalRange::new(1200, 1299);
        assert!(range.contains(1200));
        assert!(range.contains(1299));
        assert!(!range.contains(1199));
        assert!(!range.contains(1300));
    }

    #[test]
    fn test_postal_range_overlaps() {
        let a = PostalRange::new(1000, 1199);
        assert!(a.overlaps(&PostalRange::new(1199, 1300)));
        assert!(!a.overlaps(&PostalRange::new(1200, 1300)));
    }

    #[test]
    fn test_radius_mode_parse_and_serde() {
        assert_eq!(RadiusMode::parse("Nationwide"), Some(RadiusMode::Nationwide));
        assert_eq!(RadiusMode::parse("region"), None);
        assert!("region".parse::<RadiusMode>().is_err());
        assert_eq!(serde_json::to_string(&RadiusMode::Custom).unwrap(), "\"custom\"");
        assert_eq!(RadiusMode::default(), RadiusMode::Canton);
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let config = ServiceAreaConfig {
            radius: RadiusMode::City,
            business_plz: "8000".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["radius"], "city");
        assert_eq!(json["businessPlz"], "8000");
        assert_eq!(json["customCantons"], serde_json::json!([]));
    }

    #[test]
    fn test_options_treat_empty_as_absent() {
        let options = ServiceAreaConfig::default().options();
        assert_eq!(options.plz(), None);
        assert_eq!(options.canton(), None);

        let options = AreaOptions {
            canton: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(options.canton(), None);
    }
}
