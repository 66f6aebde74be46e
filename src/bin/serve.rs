#[macro_use]
extern crate rocket;

use marklet::api::bookmark::{self, SharedStore};
use marklet::api::configs::Config;
use marklet::api::errors;
use marklet::store::bookmark::BookmarkStore;
use marklet::utils::logging;

#[launch]
#[cfg(not(tarpaulin_include))]
fn rocket() -> _ {
    logging::setup_console_log();

    let config = Config::from_env().expect("invalid configuration");
    let store = BookmarkStore::open(&config.data_file);

    let figment = rocket::Config::figment().merge(("port", config.port));
    rocket::custom(figment)
        .manage(SharedStore::new(store))
        .mount("/bookmarks", bookmark::routes())
        .register("/", catchers![errors::internal_error])
}
