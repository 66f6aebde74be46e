use rocket::response::status;
use rocket::serde::json::Json;
use rocket::State;
use tokio::sync::RwLock;

use crate::api::errors::Error;
use crate::store::bookmark::{Bookmark, BookmarkDraft, BookmarkStore, ModifyBookmark, NewBookmark};
use crate::store::validate;

/// The store is built by the process entry point and injected as managed
/// state; handlers share it behind a lock so the mutate-then-persist
/// sequence is never interleaved.
pub type SharedStore = RwLock<BookmarkStore>;

#[get("/?<tag>")]
pub async fn list_bookmarks(store: &State<SharedStore>, tag: Option<&str>) -> Json<Vec<Bookmark>> {
    Json(store.read().await.get_all(tag))
}

// The payload lands as a draft so that a missing `url` or `title` reaches
// the schema and comes back as a 400 field error instead of being rejected
// by the body guard.
#[post("/", format = "application/json", data = "<payload>")]
pub async fn create_bookmark(
    store: &State<SharedStore>,
    payload: Json<BookmarkDraft>,
) -> Result<status::Created<Json<Bookmark>>, Error> {
    let input = validate::validate_bookmark(payload.into_inner())?;
    let created = store.write().await.create(input);
    let location = format!("/bookmarks/{}", created.id);
    Ok(status::Created::new(location).body(Json(created)))
}

#[put("/<id>", format = "application/json", data = "<payload>")]
pub async fn update_bookmark(
    store: &State<SharedStore>,
    id: &str,
    payload: Json<ModifyBookmark>,
) -> Result<Json<Bookmark>, Error> {
    let patch = validate::validate_patch(payload.into_inner())?;
    store
        .write()
        .await
        .update(id, patch)
        .map(Json)
        .ok_or_else(Error::not_found)
}

#[delete("/<id>")]
pub async fn delete_bookmark(
    store: &State<SharedStore>,
    id: &str,
) -> Result<status::NoContent, Error> {
    if store.write().await.delete(id) {
        Ok(status::NoContent)
    } else {
        Err(Error::not_found())
    }
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        list_bookmarks,
        create_bookmark,
        update_bookmark,
        delete_bookmark
    ]
}
