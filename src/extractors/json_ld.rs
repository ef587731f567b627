use crate::extractors::Extractor;
use crate::model::Field;
use log::debug;
use scraper::{Html, Selector};
use serde_json::Value;

const LD_JSON_TYPE: &str = "application/ld+json";

pub struct JsonLdExtractor;

impl Extractor for JsonLdExtractor {
    fn candidates(&self, html: &str) -> Vec<Field> {
        let document = Html::parse_document(html);
        let Ok(selector) = Selector::parse("script[type]") else {
            return Vec::new();
        };

        let blocks: Vec<String> = document
            .select(&selector)
            .filter(|script| {
                script
                    .value()
                    .attr("type")
                    .is_some_and(|t| t.trim().eq_ignore_ascii_case(LD_JSON_TYPE))
            })
            .map(|script| script.text().collect())
            .collect();
        debug!("JsonLdExtractor: Found {} JSON-LD script tags", blocks.len());

        let mut recipes = Vec::new();
        for (index, block) in blocks.iter().enumerate() {
            let Some(json_ld) = parse_block(index, block) else {
                continue;
            };
            collect_recipes(json_ld, &mut recipes);
        }
        debug!("JsonLdExtractor: {} Recipe candidates", recipes.len());
        recipes
    }
}

/// Parses one script body; malformed blocks are common and only skipped.
fn parse_block(index: usize, raw: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(sanitize_json(raw)) {
        Ok(json_ld) => Some(json_ld),
        Err(e) => {
            debug!("JsonLdExtractor: Skipping malformed JSON-LD {}: {}", index, e);
            None
        }
    }
}

fn collect_recipes(json_ld: Value, recipes: &mut Vec<Field>) {
    let json_ld = match json_ld {
        Value::Object(mut map) if map.contains_key("@graph") => {
            map.remove("@graph").unwrap_or(Value::Null)
        }
        other => other,
    };

    let items = match json_ld {
        Value::Array(items) => items,
        Value::Object(_) => vec![json_ld],
        _ => return,
    };

    recipes.extend(
        items
            .into_iter()
            .filter(Value::is_object)
            .map(Field::from)
            .filter(|item| item.has_type("Recipe")),
    );
}

// Strips comment and CDATA wrappers some CMSes put around the JSON
fn sanitize_json(json_str: &str) -> &str {
    let mut cleaned = json_str.trim();
    for (open, close) in [("<!--", "-->"), ("//<![CDATA[", "//]]>"), ("<![CDATA[", "]]>")] {
        if let Some(inner) = cleaned
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            cleaned = inner.trim();
        }
    }
    cleaned
}
