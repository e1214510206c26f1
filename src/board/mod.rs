pub mod group;
pub mod sort;
pub mod state;
