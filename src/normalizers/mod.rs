//! Normalizers turning loosely-typed JSON-LD fields into record values.
//!
//! None of these fail: a field with an unexpected shape reads as absent data.

mod duration;
mod fields;
mod instructions;
mod nutrition;
mod slug;
mod text;

pub use duration::{format_duration, parse_duration};
pub use fields::{image_url, parse_author, parse_ingredients, parse_tags};
pub use instructions::parse_instructions;
pub use nutrition::{calorie_count, parse_nutrition};
pub use slug::slugify;
pub use text::{clean_str, clean_text};
