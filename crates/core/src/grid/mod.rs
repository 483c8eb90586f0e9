//! Grid storage

pub mod forest_grid;

pub use forest_grid::ForestGrid;
