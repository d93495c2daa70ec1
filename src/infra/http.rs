//! HTTP adapter for the post store.

use async_trait::async_trait;
use postboard_api_types::{Post, PostListResponse, PostWriteRequest};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::application::store::{PostStore, StoreError};

const LOG_TARGET: &str = "postboard::infra::http";

#[derive(Clone, Debug)]
pub struct HttpPostStore {
    client: Client,
    base: Url,
}

impl HttpPostStore {
    /// Build a store rooted at `base`. A trailing slash is added when missing
    /// so that relative paths join under any path prefix of the base.
    pub fn new(base: &Url) -> Result<Self, StoreError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .build()
            .map_err(StoreError::client)?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("postboard/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url(&self, path: &str) -> Result<Url, StoreError> {
        self.base.join(path).map_err(StoreError::Url)
    }

    fn post_path(id: &str) -> String {
        let mut url_safe = String::with_capacity(id.len());
        for segment in url::form_urlencoded::byte_serialize(id.as_bytes()) {
            url_safe.push_str(segment);
        }
        // form encoding turns spaces into '+', which is not a space in a path
        format!("posts/{}", url_safe.replace('+', "%20"))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&PostWriteRequest>,
    ) -> Result<Vec<u8>, StoreError> {
        let url = self.url(path)?;
        debug!(target: LOG_TARGET, %method, %url, "sending request");

        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(StoreError::network)?;
        Self::handle(resp).await
    }

    /// Success is decided by status alone; the body is returned unparsed.
    async fn handle(resp: Response) -> Result<Vec<u8>, StoreError> {
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(StoreError::network)?;
        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            return Err(StoreError::rejected(status.as_u16(), text));
        }
        Ok(bytes.to_vec())
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, StoreError> {
        let bytes = self.send(method, path, None).await?;
        serde_json::from_slice(&bytes).map_err(StoreError::decode)
    }

    async fn request_ack(
        &self,
        method: Method,
        path: &str,
        body: Option<&PostWriteRequest>,
    ) -> Result<Value, StoreError> {
        let bytes = self.send(method, path, body).await?;
        Ok(ack_value(&bytes))
    }
}

/// Write acknowledgements are only logged, so any 2xx body is accepted:
/// JSON when it parses, the raw text otherwise.
fn ack_value(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[async_trait]
impl PostStore for HttpPostStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let res: PostListResponse = self.request_json(Method::GET, "posts").await?;
        Ok(res.posts)
    }

    async fn create(&self, request: &PostWriteRequest) -> Result<Value, StoreError> {
        self.request_ack(Method::POST, "posts", Some(request)).await
    }

    async fn update(
        &self,
        id: &str,
        request: &PostWriteRequest,
    ) -> Result<Value, StoreError> {
        let path = Self::post_path(id);
        self.request_ack(Method::PUT, &path, Some(request)).await
    }

    async fn delete(&self, id: &str) -> Result<Value, StoreError> {
        let path = Self::post_path(id);
        self.request_ack(Method::DELETE, &path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(base: &str) -> HttpPostStore {
        HttpPostStore::new(&Url::parse(base).expect("url")).expect("store")
    }

    #[test]
    fn base_without_trailing_slash_keeps_prefix() {
        let store = store("http://localhost:5000/api");
        assert_eq!(
            store.url("posts").expect("url").as_str(),
            "http://localhost:5000/api/posts"
        );
    }

    #[test]
    fn post_ids_are_escaped_as_single_segment() {
        let store = store("http://localhost:5000");
        let url = store.url(&HttpPostStore::post_path("a/b c")).expect("url");
        assert_eq!(url.as_str(), "http://localhost:5000/posts/a%2Fb%20c");
    }

    #[test]
    fn ack_bodies_fall_back_to_text() {
        assert_eq!(
            ack_value(br#"{"message":"ok"}"#),
            serde_json::json!({ "message": "ok" })
        );
        assert_eq!(ack_value(b"Deleted"), Value::String("Deleted".into()));
        assert_eq!(ack_value(b""), Value::Null);
    }

    #[test]
    fn plain_ids_are_untouched() {
        assert_eq!(
            HttpPostStore::post_path("65a1f0c2e4b0"),
            "posts/65a1f0c2e4b0"
        );
    }
}
