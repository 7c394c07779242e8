pub mod batch;
pub mod codec;
pub mod postal_index;
pub mod registry;
pub mod tables;

pub use crate::domain::model::{AreaOptions, PostalRange, RadiusMode, Region, ServiceAreaConfig};
pub use crate::domain::ports::RegionTable;
pub use crate::utils::error::Result;
