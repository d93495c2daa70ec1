#![deny(clippy::all, clippy::pedantic)]

use postboard::application::store::StoreError;
use postboard::config::{LoadError, Settings};
use postboard::domain::error::DomainError;
use postboard::infra::error::InfraError;
use postboard::infra::http::HttpPostStore;
use postboard::presentation::views::TemplateRenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("invalid input: {0}")]
    InvalidInput(#[from] DomainError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render output: {0}")]
    Render(String),
}

impl From<TemplateRenderError> for CliError {
    fn from(err: TemplateRenderError) -> Self {
        let detail = std::error::Error::source(&err)
            .map_or_else(|| err.to_string(), |source| format!("{err}: {source}"));
        CliError::Render(detail)
    }
}

pub fn build_store(settings: &Settings) -> Result<HttpPostStore, CliError> {
    Ok(HttpPostStore::new(&settings.api.base_url)?)
}
