use super::{clean_str, clean_text};
use crate::model::Field;

// Bounds recursion through nested author/image lists
const MAX_DEPTH: usize = 16;

pub fn parse_ingredients(value: &Field) -> Vec<String> {
    match value {
        Field::Sequence(items) => non_empty(items.iter().map(clean_text)),
        _ => Vec::new(),
    }
}

/// Reads `keywords`, either one comma separated string or a list.
pub fn parse_tags(value: &Field) -> Vec<String> {
    match value {
        Field::Scalar(keywords) => non_empty(keywords.split(',').map(clean_str)),
        Field::Sequence(items) => non_empty(items.iter().map(clean_text)),
        Field::Null | Field::Object(_) => Vec::new(),
    }
}

/// Resolves `author` to a display string; multiple authors are joined with ", ".
pub fn parse_author(value: &Field) -> String {
    author_at(value, 0)
}

fn author_at(value: &Field, depth: usize) -> String {
    if depth > MAX_DEPTH {
        return String::new();
    }
    match value {
        Field::Sequence(authors) => {
            non_empty(authors.iter().map(|a| author_at(a, depth + 1))).join(", ")
        }
        Field::Object(_) => clean_text(value.field("name")),
        Field::Null | Field::Scalar(_) => clean_text(value),
    }
}

/// Picks one image URL out of the shapes publishers use for `image`.
///
/// Lists resolve to their first element; `ImageObject`s prefer `url` over
/// `contentUrl`.
pub fn image_url(value: &Field) -> String {
    image_at(value, 0)
}

fn image_at(value: &Field, depth: usize) -> String {
    if depth > MAX_DEPTH {
        return String::new();
    }
    match value {
        Field::Scalar(url) => url.clone(),
        Field::Sequence(images) => images
            .first()
            .map(|first| image_at(first, depth + 1))
            .unwrap_or_default(),
        Field::Object(_) => {
            let url = image_at(value.field("url"), depth + 1);
            if url.is_empty() {
                image_at(value.field("contentUrl"), depth + 1)
            } else {
                url
            }
        }
        Field::Null => String::new(),
    }
}

fn non_empty(values: impl Iterator<Item = String>) -> Vec<String> {
    values.filter(|v| !v.is_empty()).collect()
}
