//! Application services layer.

pub mod board;
pub mod store;
