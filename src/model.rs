use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// A loosely-typed value decoded from a JSON-LD block.
///
/// Publishers put strings, lists or nested objects in the same Recipe field, so
/// every normalizer matches over this enum instead of assuming a shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Field {
    #[default]
    Null,
    Scalar(String),
    Sequence(Vec<Field>),
    Object(BTreeMap<String, Field>),
}

impl Field {
    /// Looks up `key` on an object; any other shape has no fields.
    pub fn get(&self, key: &str) -> Option<&Field> {
        match self {
            Field::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Same as [`Field::get`] but missing keys read as [`Field::Null`].
    pub fn field(&self, key: &str) -> &Field {
        static NULL: Field = Field::Null;
        self.get(key).unwrap_or(&NULL)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Field::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness of a JSON-LD value: empty strings, lists and objects count as absent.
    pub fn is_present(&self) -> bool {
        match self {
            Field::Null => false,
            Field::Scalar(s) => !s.is_empty(),
            Field::Sequence(items) => !items.is_empty(),
            Field::Object(map) => !map.is_empty(),
        }
    }

    /// Whether the object's `@type` (a string or a list of strings) includes `type_name`.
    pub fn has_type(&self, type_name: &str) -> bool {
        match self.get("@type") {
            Some(Field::Scalar(t)) => t.trim().eq_ignore_ascii_case(type_name),
            Some(Field::Sequence(types)) => types.iter().any(|t| {
                t.as_str()
                    .is_some_and(|t| t.trim().eq_ignore_ascii_case(type_name))
            }),
            _ => false,
        }
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => Field::Null,
            // Zero is falsy in JSON-LD consumers, like `false`
            Value::Number(n) if n.as_f64() == Some(0.0) => Field::Null,
            Value::Bool(true) => Field::Scalar("true".to_string()),
            Value::Number(n) => Field::Scalar(n.to_string()),
            Value::String(s) => Field::Scalar(s),
            Value::Array(items) => Field::Sequence(items.into_iter().map(Field::from).collect()),
            Value::Object(map) => {
                Field::Object(map.into_iter().map(|(k, v)| (k, Field::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Scalar(value.to_string())
    }
}

/// The canonical recipe record emitted for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub slug: String,
    pub source_url: String,
    /// Root-relative path of the downloaded image, empty if the download failed
    pub image: String,
    /// Image URL as declared by the page
    pub image_url: String,
    pub author: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub servings: String,
    #[serde(serialize_with = "number_or_empty")]
    pub calories: Option<u64>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub nutrition: BTreeMap<String, String>,
    pub tags: Vec<String>,
}

// Downstream consumers expect `""` rather than `null` for a missing calorie count.
fn number_or_empty<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(n) => serializer.serialize_u64(*n),
        None => serializer.serialize_str(""),
    }
}
