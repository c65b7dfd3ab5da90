// Domain layer: records exchanged with the store API and the ports the core depends on.

pub mod model;
pub mod ports;
