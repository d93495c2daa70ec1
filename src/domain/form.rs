use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// The two editable fields of the post form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Content,
}

impl FormField {
    pub const ALL: [FormField; 2] = [FormField::Title, FormField::Content];

    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Content => "content",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(FormField::Title),
            "content" => Ok(FormField::Content),
            other => Err(DomainError::unknown_field(other)),
        }
    }
}

/// The single in-progress edit buffer, shared by the create and update flows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub content: String,
}

impl FormState {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Content => &self.content,
        }
    }

    /// Overwrite one field, leaving the other untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Content => &mut self.content,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }

    /// First empty field, if any. Whitespace counts as a value.
    pub fn first_missing(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }
}

/// Whether the form is creating a new post or editing an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditTarget {
    #[default]
    Create,
    Edit(String),
}

impl EditTarget {
    /// The post an update would target. An empty id has nothing to target,
    /// so submitting falls back to a create.
    pub fn post_id(&self) -> Option<&str> {
        match self {
            EditTarget::Edit(id) if !id.is_empty() => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditTarget::Edit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_parse_case_insensitively() {
        assert_eq!("Title".parse::<FormField>().expect("title"), FormField::Title);
        assert_eq!(" content ".parse::<FormField>().expect("content"), FormField::Content);
        let err = "body".parse::<FormField>().expect_err("unknown field");
        assert!(matches!(err, DomainError::UnknownField { .. }));
    }

    #[test]
    fn set_touches_only_one_field() {
        let mut form = FormState::new("a", "b");
        form.set(FormField::Title, "c");
        assert_eq!(form, FormState::new("c", "b"));
    }

    #[test]
    fn blank_fields_are_reported_in_order() {
        assert_eq!(FormState::default().first_missing(), Some(FormField::Title));
        assert_eq!(FormState::new("t", "").first_missing(), Some(FormField::Content));
        assert_eq!(FormState::new("t", "c").first_missing(), None);
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert_eq!(FormState::new(" ", "World").first_missing(), None);
        assert_eq!(FormState::new("t", "  ").first_missing(), None);
    }

    #[test]
    fn edit_target_exposes_id_only_when_editing() {
        assert_eq!(EditTarget::Create.post_id(), None);
        assert_eq!(EditTarget::Edit("9".into()).post_id(), Some("9"));
        assert_eq!(EditTarget::Edit(String::new()).post_id(), None);
    }
}
