use std::collections::HashSet;

/// Category → related themes. Categories not listed here relate only to themselves.
const THEME_TAXONOMY: &[(&str, &[&str])] = &[
    ("fashion", &["fashion", "luxury", "beauty", "lifestyle"]),
    ("food", &["food", "restaurant", "hospitality", "lifestyle"]),
    ("technology", &["technology", "startup", "innovation", "corporate"]),
    ("real_estate", &["real_estate", "architecture", "luxury", "interior"]),
    ("travel", &["travel", "tourism", "adventure", "landscape", "culture"]),
    ("automotive", &["automotive", "luxury", "commercial"]),
    ("healthcare", &["healthcare", "education", "social_impact"]),
    ("finance", &["finance", "corporate", "technology"]),
];

/// Lowercase a tag list into a set
pub fn normalize_tags<I, S>(tags: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter().map(|t| t.as_ref().to_lowercase()).collect()
}

/// Jaccard similarity between two tag lists (0-1)
///
/// Case-insensitive. Returns 0.0 when either side is empty.
pub fn jaccard<A, B>(a: &[A], b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a = normalize_tags(a);
    let set_b = normalize_tags(b);

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    intersection as f64 / union as f64
}

/// Themes related to a category, lowercased
pub fn related_themes(category: &str) -> Vec<String> {
    let key = category.to_lowercase();
    THEME_TAXONOMY
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, themes)| themes.iter().map(|t| t.to_string()).collect())
        .unwrap_or_else(|| vec![key])
}

/// Fraction of the category's related themes covered by `themes` (0-1)
///
/// Asymmetric: only the category side is expanded through the taxonomy.
pub fn theme_overlap<S: AsRef<str>>(category: &str, themes: &[S]) -> f64 {
    let related = related_themes(category);

    let overlap = themes
        .iter()
        .map(|t| t.as_ref().to_lowercase())
        .filter(|t| related.contains(t))
        .count();

    (overlap as f64 / related.len() as f64).min(1.0)
}
