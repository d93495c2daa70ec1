//! Wire types shared between the postboard library and anything else that
//! talks to the post-store API.

use serde::{Deserialize, Serialize};

/// A post as held by the remote store. The identifier is assigned by the
/// store and never changes once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// The store names this field `_id`; both spellings are accepted.
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Body of `GET /posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<Post>,
}

/// Body of `POST /posts` and `PUT /posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWriteRequest {
    pub title: String,
    pub content: String,
}
