use super::clean_text;
use crate::model::Field;
use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("newline regex"));

/// Flattens `recipeInstructions` into ordered step strings.
///
/// Accepts a newline separated string, a list of strings, a list of `HowToStep`
/// objects, or `HowToSection` objects whose `itemListElement` steps are spliced
/// in place of the section. Section names are dropped.
pub fn parse_instructions(value: &Field) -> Vec<String> {
    match value {
        Field::Scalar(text) => LINE_BREAKS
            .split(text)
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .map(String::from)
            .collect(),
        Field::Sequence(items) => {
            let mut steps = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Field::Scalar(_) => steps.push(clean_text(item)),
                    Field::Object(_) if item.has_type("HowToSection") => {
                        if let Field::Sequence(section_steps) = item.field("itemListElement") {
                            steps.extend(section_steps.iter().map(step_text));
                        }
                    }
                    Field::Object(_) => steps.push(clean_text(item.field("text"))),
                    Field::Null | Field::Sequence(_) => {}
                }
            }
            steps.retain(|step| !step.is_empty());
            steps
        }
        Field::Null | Field::Object(_) => Vec::new(),
    }
}

fn step_text(step: &Field) -> String {
    match step {
        Field::Object(_) => clean_text(step.field("text")),
        Field::Scalar(_) => clean_text(step),
        Field::Null | Field::Sequence(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn instructions(value: serde_json::Value) -> Vec<String> {
        parse_instructions(&Field::from(value))
    }

    #[test]
    fn test_list_of_strings() {
        assert_eq!(
            instructions(json!(["Mix flour.", "Bake."])),
            vec!["Mix flour.", "Bake."]
        );
    }

    #[test]
    fn test_plain_string_split_on_newlines() {
        assert_eq!(
            instructions(json!("Preheat oven.\n\n  Mix everything.  \n\nBake.\n")),
            vec!["Preheat oven.", "Mix everything.", "Bake."]
        );
        assert!(instructions(json!("")).is_empty());
    }

    #[test]
    fn test_how_to_steps() {
        let steps = instructions(json!([
            {"@type": "HowToStep", "text": "Cook <b>pasta</b>"},
            {"@type": "HowToStep", "text": "Fry bacon &amp; onions"},
            {"@type": "HowToStep", "name": "No text here"},
            {"@type": "HowToStep", "text": "   "}
        ]));
        assert_eq!(steps, vec!["Cook pasta", "Fry bacon & onions"]);
    }

    #[test]
    fn test_how_to_sections_flatten_to_leaf_steps() {
        let steps = instructions(json!([
            {
                "@type": "HowToSection",
                "name": "For the dough",
                "itemListElement": [
                    {"@type": "HowToStep", "text": "Knead the dough."},
                    {"@type": "HowToStep", "text": "Let it rise."}
                ]
            },
            {
                "@type": "HowToSection",
                "name": "For the topping",
                "itemListElement": [
                    {"@type": "HowToStep", "text": "Spread the sauce."}
                ]
            },
            {"@type": "HowToStep", "text": "Bake for 12 minutes."}
        ]));
        assert_eq!(
            steps,
            vec![
                "Knead the dough.",
                "Let it rise.",
                "Spread the sauce.",
                "Bake for 12 minutes."
            ]
        );
    }

    #[test]
    fn test_section_without_steps() {
        let steps = instructions(json!([
            {"@type": "HowToSection", "name": "Empty"},
            "Serve."
        ]));
        assert_eq!(steps, vec!["Serve."]);
    }

    #[test]
    fn test_unexpected_shapes() {
        assert!(instructions(json!(null)).is_empty());
        assert!(instructions(json!({"text": "Not a list"})).is_empty());
        assert_eq!(instructions(json!([["nested"], null, 3])), vec!["3"]);
    }
}
