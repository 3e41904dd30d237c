// Domain layer: course models and ports (interfaces).

pub mod model;
pub mod ports;
