pub mod geometry;
pub mod vis2d;
