// Domain layer: player/permission models, ports and pure services.

pub mod model;
pub mod ports;

pub mod services;
