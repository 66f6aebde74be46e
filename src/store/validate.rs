use crate::store::bookmark::{BookmarkDraft, ModifyBookmark, NewBookmark};
use crate::utils::{FieldError, ValidationError};

const TITLE_MAX_CHARS: usize = 200;
const DESCRIPTION_MAX_CHARS: usize = 500;
const TAGS_MAX: usize = 5;

/// Validate and normalize a creation payload. All violations are collected
/// into one [`ValidationError`]; tags come back lowercased. A missing `url`
/// or `title` is reported as a field error like any other rule.
pub fn validate_bookmark(input: BookmarkDraft) -> Result<NewBookmark, ValidationError> {
    let BookmarkDraft {
        url,
        title,
        description,
        tags,
    } = input;
    let mut details = Vec::new();

    match &url {
        Some(url) => check_url(url, &mut details),
        None => details.push(FieldError::new("url", "Invalid URL format")),
    }
    match &title {
        Some(title) => check_title(title, &mut details),
        None => details.push(FieldError::new("title", "Title is required")),
    }
    if let Some(description) = &description {
        check_description(description, &mut details);
    }
    let tags = tags.map(|tags| normalize_tags(tags, &mut details));

    match (url, title) {
        (Some(url), Some(title)) if details.is_empty() => Ok(NewBookmark {
            url,
            title,
            description,
            tags,
        }),
        _ => Err(ValidationError { details }),
    }
}

/// Partial variant for updates: absent fields are neither validated nor
/// touched.
pub fn validate_patch(input: ModifyBookmark) -> Result<ModifyBookmark, ValidationError> {
    let ModifyBookmark {
        url,
        title,
        description,
        tags,
    } = input;
    let mut details = Vec::new();

    if let Some(url) = &url {
        check_url(url, &mut details);
    }
    if let Some(title) = &title {
        check_title(title, &mut details);
    }
    if let Some(description) = &description {
        check_description(description, &mut details);
    }
    let tags = tags.map(|tags| normalize_tags(tags, &mut details));

    if details.is_empty() {
        Ok(ModifyBookmark {
            url,
            title,
            description,
            tags,
        })
    } else {
        Err(ValidationError { details })
    }
}

fn check_url(url: &str, details: &mut Vec<FieldError>) {
    if url::Url::parse(url).is_err() {
        details.push(FieldError::new("url", "Invalid URL format"));
    }
}

fn check_title(title: &str, details: &mut Vec<FieldError>) {
    if title.is_empty() {
        details.push(FieldError::new("title", "Title is required"));
    } else if title.chars().count() > TITLE_MAX_CHARS {
        details.push(FieldError::new(
            "title",
            "Title must be 200 characters or less",
        ));
    }
}

fn check_description(description: &str, details: &mut Vec<FieldError>) {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        details.push(FieldError::new(
            "description",
            "Description must be 500 characters or less",
        ));
    }
}

fn normalize_tags(tags: Vec<String>, details: &mut Vec<FieldError>) -> Vec<String> {
    if tags.len() > TAGS_MAX {
        details.push(FieldError::new("tags", "Maximum 5 tags allowed"));
    }
    tags.into_iter().map(|t| t.to_lowercase()).collect()
}
