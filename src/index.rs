//! Builds the `index.md` listing page from already-normalized recipe files.
//!
//! Recipes live under `<project>/recipes/**/*.md`, each starting with a
//! `---` frontmatter block. Only `title`, `meal_type`, `image` and
//! `total_time` are read.

use crate::error::ImportError;
use log::debug;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Meal types in page order; recipes of any other type are not listed.
pub const MEAL_TYPE_ORDER: [&str; 4] = ["breakfast", "dinner", "dessert", "other"];

const DEFAULT_MEAL_TYPE: &str = "other";

static FRONTMATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\s*\n(.*?)\n---").expect("frontmatter regex"));
static FRONTMATTER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\w[\w_]*)\s*:\s*"?(.*?)"?\s*$"#).expect("frontmatter line regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub title: String,
    pub image: String,
    pub total_time: String,
    /// Site path of the rendered recipe page
    pub url: String,
}

pub type MealGroups = BTreeMap<String, Vec<IndexEntry>>;

pub fn parse_frontmatter(text: &str) -> BTreeMap<String, String> {
    let Some(block) = FRONTMATTER.captures(text).and_then(|caps| caps.get(1)) else {
        return BTreeMap::new();
    };
    block
        .as_str()
        .lines()
        .filter_map(|line| FRONTMATTER_LINE.captures(line))
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Reads every recipe under `<project_dir>/recipes` and groups them by meal type.
pub fn collect_entries(project_dir: &Path) -> Result<MealGroups, ImportError> {
    let mut files = Vec::new();
    find_markdown(&project_dir.join("recipes"), &mut files)?;
    files.sort();

    let mut groups = MealGroups::new();
    for path in files {
        let frontmatter = parse_frontmatter(&fs::read_to_string(&path)?);
        let Some(title) = frontmatter.get("title").filter(|t| !t.is_empty()) else {
            debug!("Skipping {}: no title", path.display());
            continue;
        };
        // A blank `meal_type:` is kept as-is and so left off the page
        let meal_type = frontmatter
            .get("meal_type")
            .map_or(DEFAULT_MEAL_TYPE, String::as_str);

        let entry = IndexEntry {
            title: title.clone(),
            image: frontmatter.get("image").cloned().unwrap_or_default(),
            total_time: frontmatter.get("total_time").cloned().unwrap_or_default(),
            url: page_url(project_dir, &path),
        };
        groups.entry(meal_type.to_string()).or_default().push(entry);
    }
    Ok(groups)
}

fn find_markdown(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ImportError> {
    if !dir.is_dir() {
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            find_markdown(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    Ok(())
}

// Jekyll serves `recipes/x.md` as `/recipes/x.html`
fn page_url(project_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(project_dir).unwrap_or(path);
    let segments: Vec<String> = relative
        .with_extension("html")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("/{}", segments.join("/"))
}

pub fn render_index(groups: &MealGroups) -> String {
    let mut lines: Vec<String> = [
        "---",
        "layout: default",
        "title: \"Our Family Recipes\"",
        "---",
        "",
        "# Our Family Recipes",
        "",
        "_Use your browser's search (Ctrl+F / Cmd+F) to find recipes by ingredient or name._",
        "",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect();

    for meal_type in MEAL_TYPE_ORDER {
        let Some(entries) = groups.get(meal_type).filter(|e| !e.is_empty()) else {
            continue;
        };
        let heading = title_case(meal_type);
        lines.push(format!("<h2 class=\"meal-type\">{heading}</h2>"));
        lines.push(String::new());
        lines.push("<div class=\"recipe-grid\">".to_string());
        for entry in entries {
            lines.push(format!(
                "<a class=\"recipe-card\" href=\"{{{{ '{}' | relative_url }}}}\">",
                entry.url
            ));
            if !entry.image.is_empty() {
                lines.push(format!(
                    "  <img src=\"{{{{ '{}' | relative_url }}}}\" alt=\"{}\">",
                    entry.image, entry.title
                ));
            }
            let time = if entry.total_time.is_empty() {
                String::new()
            } else {
                format!(" &middot; {}", entry.total_time)
            };
            lines.push("  <div class=\"card-body\">".to_string());
            lines.push(format!("    <h3>{}</h3>", entry.title));
            lines.push(format!("    <span class=\"card-meta\">{heading}{time}</span>"));
            lines.push("  </div>".to_string());
            lines.push("</a>".to_string());
        }
        lines.push("</div>".to_string());
        lines.push(String::new());
    }

    lines.join("\n") + "\n"
}

/// Writes `<project_dir>/index.md`; returns its path and the number of recipes found.
pub fn build_index(project_dir: &Path) -> Result<(PathBuf, usize), ImportError> {
    let groups = collect_entries(project_dir)?;
    let count = groups.values().map(Vec::len).sum();
    let index_path = project_dir.join("index.md");
    fs::write(&index_path, render_index(&groups))?;
    Ok((index_path, count))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frontmatter() {
        let text = "---\ntitle: \"Banana Bread\"\nmeal_type: breakfast\ntotal_time: 1 hour\nimage: /images/banana-bread.jpg\n---\n\n# Banana Bread\n";
        let frontmatter = parse_frontmatter(text);
        assert_eq!(frontmatter.get("title").unwrap(), "Banana Bread");
        assert_eq!(frontmatter.get("meal_type").unwrap(), "breakfast");
        assert_eq!(frontmatter.get("total_time").unwrap(), "1 hour");
        assert_eq!(frontmatter.get("image").unwrap(), "/images/banana-bread.jpg");
    }

    #[test]
    fn test_parse_frontmatter_missing() {
        assert!(parse_frontmatter("# Just a heading\n").is_empty());
        assert!(parse_frontmatter("intro\n---\ntitle: x\n---\n").is_empty());
    }

    #[test]
    fn test_render_groups_in_meal_type_order() {
        let entry = |title: &str, image: &str, time: &str| IndexEntry {
            title: title.to_string(),
            image: image.to_string(),
            total_time: time.to_string(),
            url: format!("/recipes/{}.html", title.to_lowercase()),
        };
        let mut groups = MealGroups::new();
        groups.insert("dessert".to_string(), vec![entry("Pie", "", "")]);
        groups.insert(
            "breakfast".to_string(),
            vec![entry("Pancakes", "/images/pancakes.jpg", "20 minutes")],
        );
        groups.insert("brunch".to_string(), vec![entry("Hidden", "", "")]);
        groups.insert("dinner".to_string(), Vec::new());

        let page = render_index(&groups);

        assert!(page.starts_with("---\nlayout: default\ntitle: \"Our Family Recipes\"\n---\n"));
        let breakfast = page.find("<h2 class=\"meal-type\">Breakfast</h2>").unwrap();
        let dessert = page.find("<h2 class=\"meal-type\">Dessert</h2>").unwrap();
        assert!(breakfast < dessert);
        assert!(!page.contains("Dinner</h2>"));
        assert!(!page.contains("Hidden"));
        assert!(page.contains("<a class=\"recipe-card\" href=\"{{ '/recipes/pancakes.html' | relative_url }}\">"));
        assert!(page.contains("  <img src=\"{{ '/images/pancakes.jpg' | relative_url }}\" alt=\"Pancakes\">"));
        assert!(page.contains("<span class=\"card-meta\">Breakfast &middot; 20 minutes</span>"));
        assert!(page.contains("<span class=\"card-meta\">Dessert</span>"));
        assert!(page.ends_with("</div>\n\n"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("breakfast"), "Breakfast");
        assert_eq!(title_case(""), "");
    }
}
