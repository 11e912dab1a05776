// Domain layer: plain data types and ports shared by core, config and app.

pub mod model;
pub mod ports;
