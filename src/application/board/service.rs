use std::sync::Arc;

use postboard_api_types::{Post, PostWriteRequest};
use tracing::{debug, error, info, warn};

use crate::application::store::PostStore;
use crate::domain::form::{EditTarget, FormField, FormState};

use super::types::{RefreshOutcome, RemoveOutcome, SubmitOutcome};

const LOG_TARGET: &str = "postboard::board";

/// Client-side controller mediating between user input and the post store.
///
/// Every operation that talks to the store takes `&mut self`, so a board
/// never has two requests in flight: a second submit waits for the first to
/// resolve and then sees whatever state the first one left behind.
///
/// Store failures are logged and swallowed. The list, the form and the edit
/// target are left exactly as they were before the failed call.
pub struct PostBoard {
    store: Arc<dyn PostStore>,
    posts: Vec<Post>,
    form: FormState,
    target: EditTarget,
}

impl PostBoard {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            posts: Vec::new(),
            form: FormState::default(),
            target: EditTarget::Create,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn edit_target(&self) -> &EditTarget {
        &self.target
    }

    /// Look up a post in the last fetched list.
    pub fn find_post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Fetch all posts and replace the list wholesale.
    pub async fn refresh(&mut self) -> RefreshOutcome {
        match self.store.list().await {
            Ok(posts) => {
                let count = posts.len();
                self.apply_refreshed(posts);
                debug!(target: LOG_TARGET, count, "post list refreshed");
                RefreshOutcome::Replaced { count }
            }
            Err(err) => {
                error!(target: LOG_TARGET, error = %err, kind = err.kind(), "error fetching posts");
                RefreshOutcome::Failed
            }
        }
    }

    pub(crate) fn apply_refreshed(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Send the form to the store: an update when a post is being edited,
    /// a create otherwise. Not idempotent in create mode.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if let Some(field) = self.form.first_missing() {
            warn!(
                target: LOG_TARGET,
                field = field.as_str(),
                "refusing to submit with empty required field"
            );
            return SubmitOutcome::MissingField(field);
        }

        let request = PostWriteRequest {
            title: self.form.title.clone(),
            content: self.form.content.clone(),
        };

        let outcome = match self.target.post_id().map(str::to_owned) {
            Some(id) => match self.store.update(&id, &request).await {
                Ok(ack) => {
                    debug!(target: LOG_TARGET, post_id = %id, ack = %ack, "post updated");
                    self.target = EditTarget::Create;
                    SubmitOutcome::Updated { id }
                }
                Err(err) => {
                    error!(
                        target: LOG_TARGET,
                        post_id = %id,
                        error = %err,
                        kind = err.kind(),
                        "error updating post"
                    );
                    return SubmitOutcome::Failed;
                }
            },
            None => match self.store.create(&request).await {
                Ok(ack) => {
                    debug!(target: LOG_TARGET, ack = %ack, "post created");
                    SubmitOutcome::Created
                }
                Err(err) => {
                    error!(
                        target: LOG_TARGET,
                        error = %err,
                        kind = err.kind(),
                        "error creating post"
                    );
                    return SubmitOutcome::Failed;
                }
            },
        };

        self.form.clear();
        self.refresh().await;
        outcome
    }

    /// Delete a post and refresh. The edit target is left alone even when it
    /// points at the removed post.
    pub async fn remove(&mut self, id: &str) -> RemoveOutcome {
        match self.store.delete(id).await {
            Ok(ack) => {
                info!(target: LOG_TARGET, post_id = id, ack = %ack, "post deleted");
                self.refresh().await;
                RemoveOutcome::Removed
            }
            Err(err) => {
                error!(
                    target: LOG_TARGET,
                    post_id = id,
                    error = %err,
                    kind = err.kind(),
                    "error deleting post"
                );
                RemoveOutcome::Failed
            }
        }
    }

    /// Load already-rendered values into the form and switch to update mode.
    /// Nothing is fetched, so the values may be stale.
    pub fn begin_edit(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.form = FormState::new(title, content);
        self.target = EditTarget::Edit(id.into());
    }

    pub fn cancel_edit(&mut self) {
        self.target = EditTarget::Create;
        self.form.clear();
    }
}
