//! The post board: one list of posts, one form, one edit target.

mod actions;
mod service;
pub mod types;

pub use actions::Action;
pub use service::PostBoard;
pub use types::{ActionOutcome, RefreshOutcome, RemoveOutcome, SubmitOutcome};
