// Domain layer: catalog model, user preferences and the catalog port.

pub mod catalog;
pub mod model;
pub mod ports;
