// Domain layer: form models and the supplier port.

pub mod model;
pub mod ports;
