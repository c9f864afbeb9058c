//! Fixed category and tag catalog.
//!
//! Both lists are code-configured and immutable at runtime; they are not
//! persisted per-deployment. Prompt records reference catalog entries by id
//! and dangling references are tolerated.

use serde::Serialize;

/// A content category. Disabled categories are hidden from browsing and
/// slug lookup but existing records may still reference them.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub order: u32,
    pub enabled: bool,
}

/// A content tag with an optional display color.
#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    pub id: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

const CATEGORIES: &[Category] = &[
    Category { id: "photography", name: "Photography", slug: "photography", description: "Photorealistic AI imagery", order: 1, enabled: true },
    Category { id: "illustration", name: "Illustration", slug: "illustration", description: "Hand-drawn and illustrated styles", order: 2, enabled: true },
    Category { id: "3d", name: "3D", slug: "3d", description: "Three-dimensional renders and modelling", order: 3, enabled: true },
    Category { id: "ai-art", name: "AI Art", slug: "ai-art", description: "Creative AI artwork", order: 4, enabled: true },
    Category { id: "poster", name: "Poster", slug: "poster", description: "Poster and promotional design", order: 5, enabled: true },
    Category { id: "branding", name: "Branding", slug: "branding", description: "Brand and logo design", order: 6, enabled: true },
    Category { id: "product", name: "Product", slug: "product", description: "Product photography and showcases", order: 7, enabled: true },
    Category { id: "concept", name: "Concept", slug: "concept", description: "Concept art and design", order: 8, enabled: true },
    Category { id: "character", name: "Character", slug: "character", description: "People and character design", order: 9, enabled: true },
    Category { id: "landscape", name: "Landscape", slug: "landscape", description: "Natural and urban scenery", order: 10, enabled: true },
];

const TAGS: &[Tag] = &[
    Tag { id: "portrait", name: "Portrait", slug: "portrait", color: Some("#FF6B6B") },
    Tag { id: "minimalist", name: "Minimalist", slug: "minimalist", color: Some("#4ECDC4") },
    Tag { id: "cinematic", name: "Cinematic", slug: "cinematic", color: Some("#FFB84D") },
    Tag { id: "vibrant", name: "Vibrant", slug: "vibrant", color: Some("#A8E6CF") },
    Tag { id: "dark", name: "Dark", slug: "dark", color: Some("#95A5A6") },
    Tag { id: "fantasy", name: "Fantasy", slug: "fantasy", color: Some("#C39BD3") },
    Tag { id: "realistic", name: "Realistic", slug: "realistic", color: Some("#85C1E2") },
    Tag { id: "abstract", name: "Abstract", slug: "abstract", color: Some("#F8B195") },
    Tag { id: "retro", name: "Retro", slug: "retro", color: Some("#F67280") },
    Tag { id: "futuristic", name: "Futuristic", slug: "futuristic", color: Some("#6C5CE7") },
    Tag { id: "studio", name: "Studio", slug: "studio", color: Some("#A29BFE") },
    Tag { id: "outdoor", name: "Outdoor", slug: "outdoor", color: Some("#74B9FF") },
    Tag { id: "closeup", name: "Close-up", slug: "closeup", color: Some("#FD79A8") },
    Tag { id: "wideangle", name: "Wide Angle", slug: "wideangle", color: Some("#FDCB6E") },
    Tag { id: "macro", name: "Macro", slug: "macro", color: Some("#00B894") },
    Tag { id: "fashion", name: "Fashion", slug: "fashion", color: Some("#E17055") },
    Tag { id: "editorial", name: "Editorial", slug: "editorial", color: Some("#B2BEC3") },
    Tag { id: "artistic", name: "Artistic", slug: "artistic", color: Some("#DFE6E9") },
    Tag { id: "cyberpunk", name: "Cyberpunk", slug: "cyberpunk", color: Some("#FF006E") },
    Tag { id: "anime", name: "Anime", slug: "anime", color: Some("#FB5607") },
    Tag { id: "watercolor", name: "Watercolor", slug: "watercolor", color: Some("#8ECAE6") },
    Tag { id: "sketch", name: "Sketch", slug: "sketch", color: Some("#023047") },
    Tag { id: "neon", name: "Neon", slug: "neon", color: Some("#FF006E") },
    Tag { id: "monochrome", name: "Monochrome", slug: "monochrome", color: Some("#495057") },
    Tag { id: "pastel", name: "Pastel", slug: "pastel", color: Some("#FFD6FF") },
];

/// All enabled categories, sorted by display order.
pub fn all_categories() -> Vec<&'static Category> {
    let mut cats: Vec<_> = CATEGORIES.iter().filter(|c| c.enabled).collect();
    cats.sort_by_key(|c| c.order);
    cats
}

/// Look up an enabled category by its URL slug.
pub fn category_by_slug(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.slug == slug && c.enabled)
}

/// All tags, in configured order.
pub fn all_tags() -> &'static [Tag] {
    TAGS
}

/// Look up a tag by its URL slug.
pub fn tag_by_slug(slug: &str) -> Option<&'static Tag> {
    TAGS.iter().find(|t| t.slug == slug)
}

/// Resolve a prompt's tag ids against the catalog, dropping dangling ids.
pub fn tags_for(tag_ids: &[String]) -> Vec<&'static Tag> {
    TAGS.iter()
        .filter(|t| tag_ids.iter().any(|id| id == t.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_sorted_by_order() {
        let cats = all_categories();
        assert!(cats.windows(2).all(|w| w[0].order <= w[1].order));
    }

    #[test]
    fn category_lookup_by_slug() {
        assert_eq!(category_by_slug("photography").map(|c| c.id), Some("photography"));
        assert!(category_by_slug("no-such-category").is_none());
    }

    #[test]
    fn tag_lookup_by_slug() {
        assert_eq!(tag_by_slug("portrait").map(|t| t.id), Some("portrait"));
        assert!(tag_by_slug("no-such-tag").is_none());
    }

    #[test]
    fn tags_for_drops_dangling_ids() {
        let ids = vec!["portrait".to_string(), "does-not-exist".to_string()];
        let resolved = tags_for(&ids);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "portrait");
    }
}
