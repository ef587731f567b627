use crate::config::ExtractConfig;
use crate::error::ImportError;
use crate::extractors::{Extractor, JsonLdExtractor};
use crate::fetchers::{Fetcher, RequestFetcher};
use crate::images::ImageStore;
use crate::model::{Field, Recipe};
use crate::normalizers::{
    calorie_count, clean_text, image_url, parse_author, parse_duration, parse_ingredients,
    parse_instructions, parse_nutrition, parse_tags, slugify,
};
use log::{debug, info, warn};

/// Stages of a single import, run strictly in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Extracting,
    SelectingCandidate,
    Normalizing,
    DownloadingImage,
    Emitting,
}

/// Turns a recipe page URL into a [`Recipe`]
///
/// This pipeline:
/// 1. Fetches the page HTML
/// 2. Collects JSON-LD Recipe candidates and keeps the first one
/// 3. Normalizes the candidate into the record fields
/// 4. Downloads the image into the [`ImageStore`]
///
/// Only a failed page fetch or a page without a Recipe fails the import.
pub struct UrlPipeline<F = RequestFetcher> {
    fetcher: F,
    images: ImageStore,
}

impl UrlPipeline<RequestFetcher> {
    pub fn from_config(config: &ExtractConfig) -> Result<Self, ImportError> {
        Ok(Self::new(
            RequestFetcher::from_config(config)?,
            ImageStore::from_config(config),
        ))
    }
}

impl<F: Fetcher> UrlPipeline<F> {
    pub fn new(fetcher: F, images: ImageStore) -> Self {
        Self { fetcher, images }
    }

    pub async fn process(&self, url: &str) -> Result<Recipe, ImportError> {
        enter(Stage::Fetching, url);
        let html = self.fetcher.fetch_text(url).await?;

        enter(Stage::Extracting, url);
        let candidates = JsonLdExtractor.candidates(&html);

        enter(Stage::SelectingCandidate, url);
        let total = candidates.len();
        let candidate = candidates
            .into_iter()
            .next()
            .ok_or(ImportError::NoRecipeFound)?;
        if total > 1 {
            debug!("UrlPipeline: Using first of {} Recipe candidates", total);
        }

        enter(Stage::Normalizing, url);
        let mut recipe = normalize(&candidate, url);
        info!("UrlPipeline: Extracted recipe {:?}", recipe.title);

        enter(Stage::DownloadingImage, url);
        if recipe.image_url.is_empty() {
            debug!("UrlPipeline: Recipe has no image");
        } else if recipe.slug.is_empty() {
            warn!("Recipe has no title; not storing image {}", recipe.image_url);
        } else {
            let download_url = resolve_image_url(url, &recipe.image_url);
            recipe.image = self
                .images
                .download(&self.fetcher, &download_url, &recipe.slug)
                .await;
        }

        Ok(recipe)
    }
}

/// Builds the record from a Recipe candidate; `image` is left empty.
pub fn normalize(candidate: &Field, source_url: &str) -> Recipe {
    let title = clean_text(candidate.field("name"));
    let nutrition = parse_nutrition(candidate.field("nutrition"));

    Recipe {
        slug: slugify(&title),
        title,
        source_url: source_url.to_string(),
        image: String::new(),
        image_url: image_url(candidate.field("image")),
        author: parse_author(candidate.field("author")),
        description: clean_text(candidate.field("description")),
        prep_time: parse_duration(candidate.field("prepTime")),
        cook_time: parse_duration(candidate.field("cookTime")),
        total_time: parse_duration(candidate.field("totalTime")),
        servings: clean_text(candidate.field("recipeYield")),
        calories: calorie_count(&nutrition),
        ingredients: parse_ingredients(candidate.field("recipeIngredient")),
        instructions: parse_instructions(candidate.field("recipeInstructions")),
        nutrition,
        tags: parse_tags(candidate.field("keywords")),
    }
}

/// Serializes the record as pretty-printed JSON.
pub fn emit(recipe: &Recipe) -> Result<String, ImportError> {
    enter(Stage::Emitting, &recipe.source_url);
    Ok(serde_json::to_string_pretty(recipe)?)
}

fn enter(stage: Stage, url: &str) {
    debug!("UrlPipeline: {:?} {}", stage, url);
}

// Relative image paths are resolved against the page; the record keeps the declared value.
fn resolve_image_url(page_url: &str, image_url: &str) -> String {
    if image_url.starts_with("data:") {
        return image_url.to_string();
    }
    reqwest::Url::parse(page_url)
        .and_then(|base| base.join(image_url))
        .map(|resolved| resolved.to_string())
        .unwrap_or_else(|_| image_url.to_string())
}
