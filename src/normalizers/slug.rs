use regex::Regex;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("non-word regex"));
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("separator regex"));
static HYPHENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("hyphen regex"));

/// Derives a file- and URL-safe identifier from a recipe title.
///
/// The result only holds lowercase word characters and single inner hyphens,
/// so slugifying a slug returns it unchanged.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let text = NON_WORD.replace_all(lowered.trim(), "");
    let text = SEPARATORS.replace_all(&text, "-");
    let text = HYPHENS.replace_all(&text, "-");
    text.trim_matches('-').to_string()
}
