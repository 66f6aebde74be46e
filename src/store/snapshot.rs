//! On-disk representation of the collection: a single pretty-printed JSON
//! array, rewritten wholesale after every mutation.

use std::fs;
use std::path::Path;

use crate::store::bookmark::Bookmark;
use crate::utils::SnapshotError;

/// Read the snapshot file. A missing file is an empty collection, not an
/// error.
pub fn load(path: &Path) -> Result<Vec<Bookmark>, SnapshotError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Overwrite the snapshot with the full collection. The write goes to a
/// `.tmp` sibling first and is moved into place with a rename, so a crash
/// mid-write cannot leave a truncated snapshot behind.
pub fn save(path: &Path, bookmarks: &[Bookmark]) -> Result<(), SnapshotError> {
    let content = serde_json::to_string_pretty(bookmarks)?;

    let mut temp_path = path.to_path_buf();
    let temp_name = match path.file_name() {
        Some(name) => format!("{}.tmp", name.to_string_lossy()),
        None => "snapshot.tmp".to_string(),
    };
    temp_path.set_file_name(temp_name);

    fs::write(&temp_path, content)?;
    fs::rename(temp_path, path)?;
    Ok(())
}

/// The fixed example set a fresh store starts with.
pub fn seed_bookmarks() -> Vec<Bookmark> {
    [
        (
            "https://www.rust-lang.org",
            "Rust Programming Language",
            "A language empowering everyone to build reliable and efficient software",
            vec!["rust", "programming"],
        ),
        (
            "https://rocket.rs",
            "Rocket - Simple, Fast, Type-Safe Web Framework for Rust",
            "Rocket makes writing fast, secure web applications simple",
            vec!["rust", "rocket", "framework"],
        ),
        (
            "https://docs.rs",
            "Docs.rs",
            "An open source documentation host for Rust crates",
            vec!["rust", "docs"],
        ),
        (
            "https://developer.mozilla.org",
            "MDN Web Docs",
            "Resources for developers, by developers",
            vec!["web", "docs", "reference"],
        ),
        (
            "https://github.com",
            "GitHub",
            "Where the world builds software",
            vec!["git", "development"],
        ),
    ]
    .into_iter()
    .map(|(url, title, description, tags)| {
        Bookmark::new(
            url.to_string(),
            title.to_string(),
            Some(description.to_string()),
            Some(tags.into_iter().map(str::to_string).collect()),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load(&dir.path().join("bookmarks.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        let bookmarks = seed_bookmarks();

        save(&path, &bookmarks).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, bookmarks);
    }

    #[test]
    fn snapshot_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        save(&path, &seed_bookmarks()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.lines().count() > 1);
    }

    #[test]
    fn corrupt_snapshot_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load(&path), Err(SnapshotError::Parse(_))));
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        save(&path, &seed_bookmarks()).unwrap();

        assert!(!dir.path().join("bookmarks.json.tmp").exists());
    }
}
