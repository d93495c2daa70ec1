//! Presentation layer: turns board state into what the terminal shows.

pub mod views;
