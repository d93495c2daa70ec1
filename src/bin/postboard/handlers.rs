#![deny(clippy::all, clippy::pedantic)]

use std::io::Write;

use postboard::application::store::PostStore;
use postboard::config::PostsCmd;
use postboard::domain::error::DomainError;
use postboard::domain::form::FormState;
use postboard_api_types::{PostListResponse, PostWriteRequest};

use crate::client::CliError;
use crate::print::write_json;

/// Run a one-shot post command. Unlike the interactive board, failures are
/// returned to the caller so scripts see a non-zero exit.
pub async fn handle<W: Write>(
    store: &dyn PostStore,
    cmd: PostsCmd,
    out: &mut W,
) -> Result<(), CliError> {
    match cmd {
        PostsCmd::List => list(store, out).await,
        PostsCmd::Create { title, content } => create(store, title, content, out).await,
        PostsCmd::Update { id, title, content } => {
            update(store, &id, title, content, out).await
        }
        PostsCmd::Delete { id } => delete(store, &id, out).await,
    }
}

async fn list<W: Write>(store: &dyn PostStore, out: &mut W) -> Result<(), CliError> {
    let posts = store.list().await?;
    write_json(out, &PostListResponse { posts })
}

async fn create<W: Write>(
    store: &dyn PostStore,
    title: String,
    content: String,
    out: &mut W,
) -> Result<(), CliError> {
    let payload = write_request(title, content)?;
    let res = store.create(&payload).await?;
    write_json(out, &res)
}

async fn update<W: Write>(
    store: &dyn PostStore,
    id: &str,
    title: String,
    content: String,
    out: &mut W,
) -> Result<(), CliError> {
    let payload = write_request(title, content)?;
    let res = store.update(id, &payload).await?;
    write_json(out, &res)
}

async fn delete<W: Write>(store: &dyn PostStore, id: &str, out: &mut W) -> Result<(), CliError> {
    let res = store.delete(id).await?;
    write_json(out, &res)
}

fn write_request(title: String, content: String) -> Result<PostWriteRequest, CliError> {
    let form = FormState::new(title, content);
    if let Some(field) = form.first_missing() {
        return Err(DomainError::missing_field(field.as_str()).into());
    }
    Ok(PostWriteRequest {
        title: form.title,
        content: form.content,
    })
}
