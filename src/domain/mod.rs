// Domain layer: catalog and selection models plus the ports (interfaces) to the outside world.

pub mod model;
pub mod ports;
