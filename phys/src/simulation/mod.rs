pub mod states;
pub mod params;
pub mod engine;
pub mod palette;
pub mod forces;
pub mod collision;
pub mod boundary;
pub mod integrator;
pub mod scenario;
