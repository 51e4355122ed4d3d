// Domain layer: backend value records and ports (interfaces).

pub mod model;
pub mod ports;
