// Domain layer: the student record and its marks. No I/O here.

pub mod model;
pub mod registry;
