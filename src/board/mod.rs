pub mod geometry;
pub mod state;
