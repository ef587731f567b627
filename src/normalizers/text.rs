use crate::model::Field;
use html_escape::decode_html_entities;
use regex::Regex;
use std::sync::LazyLock;

static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("markup regex"));

/// Strips tags, decodes entities and trims a field value.
///
/// Lists are joined with spaces first; objects carry no text of their own.
pub fn clean_text(value: &Field) -> String {
    match value {
        Field::Null | Field::Object(_) => String::new(),
        Field::Scalar(text) => clean_str(text),
        Field::Sequence(items) => {
            let joined = items
                .iter()
                .filter_map(Field::as_str)
                .collect::<Vec<&str>>()
                .join(" ");
            clean_str(&joined)
        }
    }
}

pub fn clean_str(text: &str) -> String {
    let stripped = MARKUP.replace_all(text, "");
    decode_html_entities(&stripped).trim().to_string()
}
