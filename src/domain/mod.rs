// Domain layer: corpus model and ports. No I/O here.

pub mod model;
pub mod ports;
