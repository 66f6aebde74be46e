use crate::client::api::{ApiClient, ApiResult};
use crate::store::bookmark::{Bookmark, ModifyBookmark, NewBookmark};

/// Case-insensitive substring match on title or url. Pure; callers recompute
/// it on demand instead of caching a derived list.
pub fn filter_bookmarks<'a>(bookmarks: &'a [Bookmark], query: &str) -> Vec<&'a Bookmark> {
    if query.is_empty() {
        return bookmarks.iter().collect();
    }
    let query = query.to_lowercase();
    bookmarks
        .iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&query) || b.url.to_lowercase().contains(&query)
        })
        .collect()
}

/// Everything the bookmark page holds between interactions. The rendering
/// layer is out of scope; this drives the data access layer and exposes the
/// flags a view needs.
#[derive(Debug, Default)]
pub struct UiState {
    pub bookmarks: Vec<Bookmark>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_query: String,
    pub active_tag: Option<String>,
    /// Id of the bookmark currently in the edit dialog, if any.
    pub editing: Option<String>,
    pub show_add_form: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The list the view renders: the loaded bookmarks narrowed by the
    /// search text.
    pub fn filtered(&self) -> Vec<&Bookmark> {
        filter_bookmarks(&self.bookmarks, &self.search_query)
    }

    /// Reload from the server, honoring the active tag filter. Failures land
    /// in the page-level error banner.
    pub async fn load(&mut self, client: &ApiClient) {
        self.loading = true;
        self.error = None;
        match client.fetch_bookmarks(self.active_tag.as_deref()).await {
            Ok(bookmarks) => self.bookmarks = bookmarks,
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    /// Clicking the active tag clears the filter, clicking any other tag
    /// activates it. Either way the search text resets and the list reloads.
    pub async fn toggle_tag(&mut self, client: &ApiClient, tag: &str) {
        if self.active_tag.as_deref() == Some(tag) {
            self.active_tag = None;
        } else {
            self.active_tag = Some(tag.to_string());
        }
        self.search_query.clear();
        self.load(client).await;
    }

    /// Create, reload, close the add form. A failure propagates to the
    /// caller so the form can show it inline instead of the page banner.
    pub async fn add_bookmark(
        &mut self,
        client: &ApiClient,
        input: NewBookmark,
    ) -> ApiResult<Bookmark> {
        let created = client.create_bookmark(&input).await?;
        self.load(client).await;
        self.show_add_form = false;
        Ok(created)
    }

    pub async fn edit_bookmark(&mut self, client: &ApiClient, id: &str, patch: ModifyBookmark) {
        match client.update_bookmark(id, &patch).await {
            Ok(_) => {
                self.editing = None;
                self.load(client).await;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn remove_bookmark(&mut self, client: &ApiClient, id: &str) {
        match client.delete_bookmark(id).await {
            Ok(()) => self.load(client).await,
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
