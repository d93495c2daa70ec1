use askama::{Error as AskamaError, Template};
use postboard_api_types::Post;
use thiserror::Error;

use crate::application::board::PostBoard;
use crate::domain::form::EditTarget;

pub const CREATE_LABEL: &str = "Create Post";
pub const UPDATE_LABEL: &str = "Update Post";

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

/// Snapshot of everything the board screen shows.
#[derive(Debug, Clone)]
pub struct BoardView {
    pub title: String,
    pub content: String,
    pub submit_label: &'static str,
    /// Present only in update mode; the cancel action is shown alongside it.
    pub editing: Option<String>,
    pub posts: Vec<Post>,
}

impl BoardView {
    pub fn from_board(board: &PostBoard) -> Self {
        let form = board.form();
        Self {
            title: form.title.clone(),
            content: form.content.clone(),
            submit_label: submit_label(board.edit_target()),
            editing: board.edit_target().post_id().map(str::to_owned),
            posts: board.posts().to_vec(),
        }
    }
}

pub fn submit_label(target: &EditTarget) -> &'static str {
    if target.is_editing() {
        UPDATE_LABEL
    } else {
        CREATE_LABEL
    }
}

#[derive(Template)]
#[template(path = "board.txt")]
pub struct BoardTemplate {
    pub view: BoardView,
}

pub fn render_board(board: &PostBoard) -> Result<String, TemplateRenderError> {
    BoardTemplate {
        view: BoardView::from_board(board),
    }
    .render()
    .map_err(|error| TemplateRenderError {
        public_message: "board rendering failed",
        error,
    })
}
