use crate::core::tables::SwissCantons;
use crate::domain::model::Region;
use crate::domain::ports::RegionTable;

/// Closed, ordered set of regions. Built once and shared by reference.
#[derive(Debug, Clone)]
pub struct RegionRegistry {
    regions: Vec<Region>,
}

impl RegionRegistry {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    pub fn from_table<T: RegionTable + ?Sized>(table: &T) -> Self {
        Self::new(table.regions())
    }

    pub fn swiss() -> Self {
        Self::from_table(&SwissCantons)
    }

    pub fn list_regions(&self) -> &[Region] {
        &self.regions
    }

    /// Label for `code`, or `code` itself when unknown.
    pub fn label_of<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).map(|r| r.label.as_str()).unwrap_or(code)
    }

    pub fn get(&self, code: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.code == code)
    }

    pub fn is_known(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.regions.iter().map(|r| r.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::swiss()
    }
}
