//! postboard: a small client for a REST-backed blog.
//!
//! The [`application::board::PostBoard`] owns the fetched post list and the
//! single create/edit form, and talks to the remote store through the
//! [`application::store::PostStore`] seam. [`infra::http::HttpPostStore`] is
//! the production implementation of that seam.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
