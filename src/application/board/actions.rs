use postboard_api_types::Post;

use crate::domain::form::FormField;

use super::service::PostBoard;
use super::types::ActionOutcome;

/// Every transition the board supports, as data. Front-ends translate user
/// input into these and hand them to [`PostBoard::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetField { field: FormField, value: String },
    Submit,
    BeginEdit {
        id: String,
        title: String,
        content: String,
    },
    CancelEdit,
    Remove { id: String },
    Refresh,
    /// Apply an already-fetched list.
    Refreshed(Vec<Post>),
}

impl PostBoard {
    pub async fn dispatch(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::SetField { field, value } => {
                self.update_field(field, value);
                ActionOutcome::Local
            }
            Action::Submit => ActionOutcome::Submit(self.submit().await),
            Action::BeginEdit { id, title, content } => {
                self.begin_edit(id, title, content);
                ActionOutcome::Local
            }
            Action::CancelEdit => {
                self.cancel_edit();
                ActionOutcome::Local
            }
            Action::Remove { id } => ActionOutcome::Remove(self.remove(&id).await),
            Action::Refresh => ActionOutcome::Refresh(self.refresh().await),
            Action::Refreshed(posts) => {
                self.apply_refreshed(posts);
                ActionOutcome::Local
            }
        }
    }
}
