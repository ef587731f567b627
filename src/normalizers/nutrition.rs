use super::clean_text;
use crate::model::Field;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Source `NutritionInformation` keys and the record keys they map to.
pub const NUTRITION_KEYS: [(&str, &str); 8] = [
    ("calories", "calories"),
    ("fatContent", "fat"),
    ("carbohydrateContent", "carbs"),
    ("proteinContent", "protein"),
    ("fiberContent", "fiber"),
    ("sodiumContent", "sodium"),
    ("sugarContent", "sugar"),
    ("cholesterolContent", "cholesterol"),
];

static FIRST_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("integer regex"));

/// Keeps the known nutrition facts under their canonical keys; other keys are dropped.
pub fn parse_nutrition(value: &Field) -> BTreeMap<String, String> {
    if !matches!(value, Field::Object(_)) {
        return BTreeMap::new();
    }
    NUTRITION_KEYS
        .iter()
        .filter_map(|(source, label)| {
            let raw = value.get(source).filter(|v| v.is_present())?;
            let text = match raw {
                Field::Scalar(s) => s.clone(),
                other => clean_text(other),
            };
            Some((label.to_string(), text.replace(" calories", "").trim().to_string()))
        })
        .collect()
}

/// First integer in the normalized `calories` value.
pub fn calorie_count(nutrition: &BTreeMap<String, String>) -> Option<u64> {
    let calories = nutrition.get("calories")?;
    FIRST_INTEGER.find(calories)?.as_str().parse().ok()
}
