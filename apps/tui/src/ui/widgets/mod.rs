pub mod bubble_grid;
pub mod charts;
pub mod popup;
pub mod pyramid;
pub mod tables;
pub mod treemap;
