// Domain layer: run state and reports. No I/O here.

pub mod model;
