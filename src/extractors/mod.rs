use crate::model::Field;

mod json_ld;

pub use self::json_ld::JsonLdExtractor;

pub trait Extractor {
    /// Every Recipe object found in the page, in document order.
    fn candidates(&self, html: &str) -> Vec<Field>;
}
