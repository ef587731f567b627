pub mod url;

pub use self::url::{emit, normalize, Stage, UrlPipeline};
