// Domain layer: exercise models and the Exercise port. No I/O happens here.

pub mod model;
pub mod ports;
