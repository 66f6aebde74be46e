use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::errors::ErrorBody;
use crate::store::bookmark::{Bookmark, ModifyBookmark, NewBookmark};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Every failure is normalized into a single message for the UI, either the
/// server's `error` string or a generic per-operation fallback.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Base URL from `API_BASE_URL`, falling back to the default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub async fn fetch_bookmarks(&self, tag: Option<&str>) -> ApiResult<Vec<Bookmark>> {
        let url = match tag {
            Some(tag) => format!(
                "{}/bookmarks?tag={}",
                self.base_url,
                utf8_percent_encode(tag, NON_ALPHANUMERIC)
            ),
            None => format!("{}/bookmarks", self.base_url),
        };
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|_| ApiError::new("Failed to fetch bookmarks"))?;
        if !response.status().is_success() {
            return Err(ApiError::new("Failed to fetch bookmarks"));
        }
        response
            .json()
            .await
            .map_err(|_| ApiError::new("Failed to fetch bookmarks"))
    }

    pub async fn create_bookmark(&self, input: &NewBookmark) -> ApiResult<Bookmark> {
        let url = format!("{}/bookmarks", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|_| ApiError::new("Failed to create bookmark"))?;
        decode(response, "Failed to create bookmark").await
    }

    pub async fn update_bookmark(&self, id: &str, patch: &ModifyBookmark) -> ApiResult<Bookmark> {
        let url = format!("{}/bookmarks/{id}", self.base_url);
        let response = self
            .http
            .put(&url)
            .json(patch)
            .send()
            .await
            .map_err(|_| ApiError::new("Failed to update bookmark"))?;
        decode(response, "Failed to update bookmark").await
    }

    pub async fn delete_bookmark(&self, id: &str) -> ApiResult<()> {
        let url = format!("{}/bookmarks/{id}", self.base_url);
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|_| ApiError::new("Failed to delete bookmark"))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response, "Failed to delete bookmark").await)
        }
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response, fallback: &str) -> ApiResult<T> {
    if response.status().is_success() {
        response
            .json()
            .await
            .map_err(|_| ApiError::new(fallback))
    } else {
        Err(error_from_response(response, fallback).await)
    }
}

// Pulls the server's `error` message out of the failure body; the fallback
// covers bodies that are missing or not JSON.
async fn error_from_response(response: reqwest::Response, fallback: &str) -> ApiError {
    match response.json::<ErrorBody>().await {
        Ok(body) => ApiError::new(body.error),
        Err(_) => ApiError::new(fallback),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use crate::api::bookmark::{routes, SharedStore};
    use crate::api::errors::internal_error;
    use crate::store::bookmark::tests::rand_bookmark;
    use crate::store::bookmark::BookmarkStore;

    /// Launch the real server on an ephemeral port and point a client at it.
    /// The store starts freshly seeded in `dir`.
    pub(crate) async fn spawn_server(dir: &tempfile::TempDir) -> ApiClient {
        let store = BookmarkStore::open(dir.path().join("bookmarks.json"));
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let figment = rocket::Config::figment()
            .merge(("address", "127.0.0.1"))
            .merge(("port", port))
            .merge(("log_level", "off"));
        let app = rocket::custom(figment)
            .manage(SharedStore::new(store))
            .mount("/bookmarks", routes())
            .register("/", catchers![internal_error]);
        let server = app.ignite().await.expect("valid rocket instance");
        rocket::tokio::spawn(server.launch());

        let client = ApiClient::new(format!("http://127.0.0.1:{port}"));
        for _ in 0..200 {
            if client.fetch_bookmarks(None).await.is_ok() {
                return client;
            }
            rocket::tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!("server did not come up on port {port}");
    }

    #[rocket::async_test]
    async fn end_to_end_crud() {
        let dir = tempfile::tempdir().unwrap();
        let client = spawn_server(&dir).await;

        // the fresh store starts with the example seeds
        let seeded = client.fetch_bookmarks(None).await.unwrap();
        assert_eq!(seeded.len(), 5);

        let created = client
            .create_bookmark(&NewBookmark {
                url: "https://example.com".to_string(),
                title: "Example".to_string(),
                description: None,
                tags: None,
            })
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        assert!(created.tags.is_none());

        let updated = client
            .update_bookmark(
                &created.id,
                &ModifyBookmark {
                    title: Some("Example Domain".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Example Domain");
        assert_eq!(updated.url, created.url);

        client.delete_bookmark(&created.id).await.unwrap();
        let listed = client.fetch_bookmarks(None).await.unwrap();
        assert!(!listed.iter().any(|b| b.id == created.id));
    }

    #[rocket::async_test]
    async fn tag_filter_matches_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let client = spawn_server(&dir).await;

        let tagged = client
            .create_bookmark(&NewBookmark {
                tags: Some(vec!["React".to_string()]),
                ..rand_bookmark()
            })
            .await
            .unwrap();
        client.create_bookmark(&rand_bookmark()).await.unwrap();

        let results = client.fetch_bookmarks(Some("react")).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, tagged.id);

        let results = client.fetch_bookmarks(Some("REACT")).await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[rocket::async_test]
    async fn server_error_message_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let client = spawn_server(&dir).await;

        let err = client.delete_bookmark("no-such-id").await.unwrap_err();
        assert_eq!(err.to_string(), "Bookmark not found");

        let err = client
            .create_bookmark(&NewBookmark {
                url: "not-a-url".to_string(),
                title: "X".to_string(),
                description: None,
                tags: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error");
    }

    #[rocket::async_test]
    async fn unreachable_server_is_a_generic_fetch_error() {
        // nothing listens on port 9; the error is the generic list message
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.fetch_bookmarks(None).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch bookmarks");
    }
}
