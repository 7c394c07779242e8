// Domain layer: value types and the table port. No I/O here.

pub mod model;
pub mod ports;
