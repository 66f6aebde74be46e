use std::path::PathBuf;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::store::snapshot;

/// A persisted bookmark. `id` and `created_at` are assigned once at creation
/// and never mutated afterwards.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
}

impl Bookmark {
    pub fn new(
        url: String,
        title: String,
        description: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            url,
            title,
            description,
            tags,
            created_at: time::OffsetDateTime::now_utc(),
        }
    }
}

/// Creation payload as it arrives off the wire, before validation. Every
/// field is optional here: requiredness of `url` and `title` is a schema
/// rule and has to surface as a field error, not as a body-parse failure.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BookmarkDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Validated creation payload. Only `url` and `title` are required.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewBookmark {
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Partial update payload. Only present fields overwrite existing ones.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ModifyBookmark {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Sole owner of the canonical bookmark collection. All reads and writes go
/// through here; every successful mutation rewrites the snapshot before the
/// call returns.
pub struct BookmarkStore {
    path: PathBuf,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    /// Load the collection from `path`. An unreadable or corrupt snapshot is
    /// logged and replaced with an empty collection; an empty collection is
    /// seeded with the fixed example set and written out.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let bookmarks = match snapshot::load(&path) {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                error!(path = %path.display(), "failed to load bookmarks: {e}");
                Vec::new()
            }
        };

        let mut store = Self { path, bookmarks };
        if store.bookmarks.is_empty() {
            info!(path = %store.path.display(), "seeding example bookmarks");
            store.bookmarks = snapshot::seed_bookmarks();
            store.persist();
        }
        store
    }

    /// All bookmarks, or only those carrying `tag` (case-insensitive) when a
    /// filter is given.
    pub fn get_all(&self, tag: Option<&str>) -> Vec<Bookmark> {
        match tag {
            Some(tag) => {
                let tag = tag.to_lowercase();
                self.bookmarks
                    .iter()
                    .filter(|b| {
                        b.tags
                            .as_deref()
                            .unwrap_or_default()
                            .iter()
                            .any(|t| t.to_lowercase() == tag)
                    })
                    .cloned()
                    .collect_vec()
            }
            None => self.bookmarks.clone(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Assign an id and creation time, append, persist. The input is expected
    /// to be validated already.
    pub fn create(&mut self, input: NewBookmark) -> Bookmark {
        let bookmark = Bookmark::new(input.url, input.title, input.description, input.tags);
        self.bookmarks.push(bookmark.clone());
        self.persist();
        bookmark
    }

    /// Shallow-merge present patch fields over the stored record. `id` and
    /// `created_at` are untouched. Returns `None` for an unknown id.
    pub fn update(&mut self, id: &str, patch: ModifyBookmark) -> Option<Bookmark> {
        let bookmark = self.bookmarks.iter_mut().find(|b| b.id == id)?;
        if let Some(url) = patch.url {
            bookmark.url = url;
        }
        if let Some(title) = patch.title {
            bookmark.title = title;
        }
        if let Some(description) = patch.description {
            bookmark.description = Some(description);
        }
        if let Some(tags) = patch.tags {
            bookmark.tags = Some(tags);
        }
        let updated = bookmark.clone();
        self.persist();
        Some(updated)
    }

    /// Remove the bookmark and persist. `false` for an unknown id.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.bookmarks.iter().position(|b| b.id == id) else {
            return false;
        };
        self.bookmarks.remove(index);
        self.persist();
        true
    }

    // Opens without the empty-collection seeding, so tests can start from a
    // genuinely empty store.
    #[cfg(test)]
    pub(crate) fn open_unseeded(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let bookmarks = snapshot::load(&path).unwrap_or_default();
        Self { path, bookmarks }
    }

    // A failed write is logged and swallowed: the in-memory mutation stands
    // and the caller still sees success.
    fn persist(&self) {
        if let Err(e) = snapshot::save(&self.path, &self.bookmarks) {
            warn!(path = %self.path.display(), "failed to save bookmarks: {e}");
        }
    }
}
