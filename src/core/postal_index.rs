use crate::core::tables::SwissCantons;
use crate::domain::model::PostalRange;
use crate::domain::ports::RegionTable;
use regex::Regex;
use std::sync::LazyLock;

static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("postal code pattern is valid"));

/// Numeric value of a well-formed 4-digit postal code.
pub fn parse_postal_code(value: &str) -> Option<u16> {
    if !POSTAL_CODE.is_match(value) {
        return None;
    }
    value.parse().ok()
}

pub fn is_postal_code(value: &str) -> bool {
    POSTAL_CODE.is_match(value)
}

/// Region → postal ranges, kept in table declaration order.
///
/// Lookups by postal code are a linear scan that returns the first region
/// whose ranges contain the code. If a table ever declares overlapping
/// ranges, the earlier region wins.
#[derive(Debug, Clone)]
pub struct PostalRangeIndex {
    entries: Vec<(String, Vec<PostalRange>)>,
}

impl PostalRangeIndex {
    pub fn new(entries: Vec<(String, Vec<PostalRange>)>) -> Self {
        Self { entries }
    }

    pub fn from_table<T: RegionTable + ?Sized>(table: &T) -> Self {
        Self::new(table.postal_ranges())
    }

    pub fn swiss() -> Self {
        Self::from_table(&SwissCantons)
    }

    /// Ranges owned by `region_code`; empty when unknown.
    pub fn ranges_of(&self, region_code: &str) -> &[PostalRange] {
        self.entries
            .iter()
            .find(|(code, _)| code == region_code)
            .map(|(_, ranges)| ranges.as_slice())
            .unwrap_or(&[])
    }

    pub fn region_of(&self, postal_code: &str) -> Option<&str> {
        let value = parse_postal_code(postal_code)?;
        self.entries
            .iter()
            .find(|(_, ranges)| ranges.iter().any(|r| r.contains(value)))
            .map(|(code, _)| code.as_str())
    }

    /// Upper-bound size of the numeric ranges owned by the given regions.
    ///
    /// Counts every number in every range, including codes never issued, and
    /// does not deduplicate repeated region codes. Display only.
    pub fn estimate_code_count<S: AsRef<str>>(&self, region_codes: &[S]) -> u32 {
        region_codes
            .iter()
            .flat_map(|code| self.ranges_of(code.as_ref()))
            .map(PostalRange::len)
            .sum()
    }

    pub fn is_in_region(&self, postal_code: &str, region_code: &str) -> bool {
        match parse_postal_code(postal_code) {
            Some(value) => self
                .ranges_of(region_code)
                .iter()
                .any(|r| r.contains(value)),
            None => false,
        }
    }
}

impl Default for PostalRangeIndex {
    fn default() -> Self {
        Self::swiss()
    }
}
