use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("unknown form field `{name}` (expected `title` or `content`)")]
    UnknownField { name: String },
    #[error("required field `{field}` is empty")]
    MissingField { field: &'static str },
}

impl DomainError {
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
