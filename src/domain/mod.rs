//! Domain layer types and invariants.

pub mod error;
pub mod form;

pub use postboard_api_types::Post;
