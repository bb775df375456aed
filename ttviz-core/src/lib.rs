pub mod color;
pub mod grid;
pub mod model;
pub mod table;
