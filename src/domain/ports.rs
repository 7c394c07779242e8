use crate::domain::model::{PostalRange, Region};

/// Source of region and postal range data.
///
/// Implemented by the built-in Swiss table and by TOML overrides; tests can
/// supply their own fixtures. Declaration order is significant: it is the
/// listing order of the registry and the scan order of postal lookups.
pub trait RegionTable: Send + Sync {
    fn regions(&self) -> Vec<Region>;
    fn postal_ranges(&self) -> Vec<(String, Vec<PostalRange>)>;
}
