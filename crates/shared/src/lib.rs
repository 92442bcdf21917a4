pub mod config;
pub mod input;
pub mod result;
pub mod series;
