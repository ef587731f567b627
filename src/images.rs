//! Persists the recipe image next to the published records.

use crate::config::ExtractConfig;
use crate::error::ImportError;
use crate::fetchers::Fetcher;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Directory images are written to, and the public prefix they are served under.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    url_prefix: String,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            url_prefix: url_prefix.into(),
        }
    }

    pub fn from_config(config: &ExtractConfig) -> Self {
        Self::new(&config.images_dir, &config.image_url_prefix)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores the image as `<slug><ext>` and returns its public path.
    ///
    /// Download failures are not fatal to an import: they are logged and an
    /// empty path is returned. Inline `data:` images are decoded instead of
    /// fetched.
    pub async fn download(&self, fetcher: &dyn Fetcher, url: &str, slug: &str) -> String {
        if url.is_empty() {
            return String::new();
        }
        match self.store(fetcher, url, slug).await {
            Ok(path) => {
                info!("Stored image {} from {}", path, url);
                path
            }
            Err(e) => {
                warn!("Could not download image {}: {}", url, e);
                String::new()
            }
        }
    }

    async fn store(
        &self,
        fetcher: &dyn Fetcher,
        url: &str,
        slug: &str,
    ) -> Result<String, ImportError> {
        let (bytes, ext) = match url.strip_prefix("data:") {
            Some(data_uri) => decode_data_uri(data_uri)?,
            None => (fetcher.fetch_bytes(url).await?, extension_for(url)),
        };

        tokio::fs::create_dir_all(&self.dir).await?;
        let filename = format!("{slug}{ext}");
        tokio::fs::write(self.dir.join(&filename), bytes).await?;

        Ok(format!("{}/{}", self.url_prefix.trim_end_matches('/'), filename))
    }
}

/// File extension for an image URL, judged by its last path segment.
pub fn extension_for(url: &str) -> &'static str {
    let path = match reqwest::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };
    let file_name = path.rsplit('/').next().unwrap_or_default();
    match file_name.rsplit_once('.') {
        Some((_, ext)) => normalize_extension(ext),
        None => ".jpg",
    }
}

fn normalize_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "png" => ".png",
        "webp" => ".webp",
        "gif" => ".gif",
        _ => ".jpg",
    }
}

// `image/png;base64,<payload>`, with the leading `data:` already removed
fn decode_data_uri(data_uri: &str) -> Result<(Vec<u8>, &'static str), ImportError> {
    let invalid = || ImportError::InvalidDataUri(format!("data:{}", truncate(data_uri)));

    let (meta, payload) = data_uri.split_once(',').ok_or_else(invalid)?;
    let media_type = meta.strip_suffix(";base64").ok_or_else(invalid)?;
    let subtype = media_type
        .strip_prefix("image/")
        .and_then(|rest| rest.split(';').next())
        .ok_or_else(invalid)?;

    let bytes = STANDARD.decode(payload.trim())?;
    Ok((bytes, normalize_extension(subtype)))
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(40) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
