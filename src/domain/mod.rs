// Domain layer: models, the store port and the bundled sample data.

pub mod model;
pub mod ports;
pub mod sample;
