pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    batch::{BatchProcessor, BatchReport},
    codec::{ServiceAreaCodec, SummaryLabels},
    postal_index::PostalRangeIndex,
    registry::RegionRegistry,
    tables::SwissCantons,
};
pub use crate::domain::model::{AreaOptions, PostalRange, RadiusMode, Region, ServiceAreaConfig};
pub use crate::domain::ports::RegionTable;
pub use crate::utils::error::{AreaError, Result};
