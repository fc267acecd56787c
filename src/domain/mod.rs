// Domain layer: request/response models and the search port. No HTTP here.

pub mod model;
pub mod ports;
