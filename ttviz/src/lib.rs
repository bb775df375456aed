pub mod app;
pub mod config;
pub mod geocode;
pub mod render;
pub mod util;
