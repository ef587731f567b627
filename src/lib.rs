pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod images;
pub mod index;
pub mod model;
pub mod normalizers;
pub mod pipelines;

pub use config::ExtractConfig;
pub use error::ImportError;
pub use images::ImageStore;
pub use model::{Field, Recipe};
pub use pipelines::UrlPipeline;

/// Extract the recipe at `url` using default settings.
///
/// Images are written to `./images`.
pub async fn fetch_recipe(url: &str) -> Result<Recipe, ImportError> {
    UrlPipeline::from_config(&ExtractConfig::default())?
        .process(url)
        .await
}

/// Extract the recipe at `url` with the given settings and return it as JSON.
pub async fn import_recipe(url: &str, config: &ExtractConfig) -> Result<String, ImportError> {
    let recipe = UrlPipeline::from_config(config)?.process(url).await?;
    pipelines::emit(&recipe)
}
