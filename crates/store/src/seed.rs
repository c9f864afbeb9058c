//! Fixed seed content, written only when the backing document does not yet
//! exist.

use gallery_core::prompt::{Prompt, PromptMetadata, PromptStatus};
use gallery_core::types::Timestamp;

// Seed timestamps are literal constants; a parse failure is a programming
// error, so panicking here is fine.
fn ts(s: &str) -> Timestamp {
    format!("{s}T00:00:00Z").parse().expect("seed timestamp")
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    title: &str,
    content: &str,
    description: &str,
    image_url: &str,
    category_id: &str,
    tags: &[&str],
    metadata: PromptMetadata,
    counters: (u64, u64, u64),
    created: &str,
    updated: &str,
) -> Prompt {
    let (views, copies, likes) = counters;
    Prompt {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        description: Some(description.to_string()),
        image_url: image_url.to_string(),
        category_id: Some(category_id.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        metadata: Some(metadata),
        status: PromptStatus::Published,
        views,
        copies,
        likes,
        created_at: ts(created),
        updated_at: ts(updated),
        published_at: Some(ts(created)),
    }
}

fn meta(model: &str, aspect_ratio: &str, style: Option<&str>) -> PromptMetadata {
    PromptMetadata {
        model: Some(model.to_string()),
        aspect_ratio: Some(aspect_ratio.to_string()),
        style: style.map(|s| s.to_string()),
        negative_prompt: None,
    }
}

/// The bundled seed list used for first-run bootstrap.
pub fn seed_prompts() -> Vec<Prompt> {
    vec![
        entry(
            "1",
            "Urban Fisheye Flash Contrast Portrait",
            "A striking urban portrait taken with a fisheye lens, dramatic flash lighting creating high contrast shadows, street photography style, modern fashion aesthetic, vibrant city background, dynamic composition",
            "Urban fisheye flash contrast portrait",
            "/urban-fisheye-flash-portrait.jpg",
            "photography",
            &["portrait", "cinematic", "fashion"],
            meta("Midjourney v6", "2:3", Some("raw")),
            (2340, 234, 567),
            "2026-01-10",
            "2026-01-13",
        ),
        entry(
            "2",
            "Pure White 3D Monthly Icons",
            "12 minimalist 3D icons representing each month of the year, pure white design with soft shadows, clean aesthetic, modern UI design, floating composition, monochromatic palette",
            "Pure white 3D monthly icons",
            "/3d-white-monthly-icons.jpg",
            "3d",
            &["minimalist", "3d", "design"],
            meta("DALL-E 3", "1:1", None),
            (1890, 189, 421),
            "2026-01-09",
            "2026-01-12",
        ),
        entry(
            "3",
            "Melancholic White Frame Editorial",
            "Editorial fashion photography with melancholic mood, subject framed by white architectural elements, soft natural window lighting, muted color palette, artistic portrait, contemplative expression",
            "Melancholic white frame editorial portrait",
            "/melancholic-editorial-portrait.jpg",
            "photography",
            &["portrait", "editorial", "minimalist"],
            meta("Midjourney v6", "4:5", None),
            (4210, 421, 892),
            "2026-01-08",
            "2026-01-13",
        ),
        entry(
            "4",
            "Real-Cartoon Street Portrait",
            "Hybrid style portrait seamlessly blending photorealistic features with cartoon elements, vibrant street background with graffiti, playful artistic expression, bold colors, creative digital art",
            "Real-cartoon hybrid street portrait",
            "/real-cartoon-street-portrait.jpg",
            "ai-art",
            &["portrait", "vibrant", "artistic"],
            meta("Stable Diffusion XL", "2:3", None),
            (3120, 312, 678),
            "2026-01-11",
            "2026-01-13",
        ),
        entry(
            "5",
            "Seagull Freedom Portrait",
            "Cinematic portrait with seagull in flight above subject, freedom and liberation concept, golden hour lighting, coastal setting with ocean backdrop, emotional depth, wide angle composition",
            "Seagull freedom portrait",
            "/seagull-freedom-portrait.jpg",
            "photography",
            &["portrait", "cinematic", "outdoor"],
            meta("Midjourney v6", "16:9", None),
            (5670, 567, 1243),
            "2026-01-07",
            "2026-01-13",
        ),
        entry(
            "6",
            "Underwater Macro Half-Face Close-up",
            "Extreme macro underwater photography, half-face composition with water surface splitting the frame, crystal clear water with visible bubbles, dreamy bokeh background, surreal aesthetic, refreshing mood",
            "Underwater macro half-face close-up",
            "/underwater-macro-closeup.jpg",
            "photography",
            &["macro", "closeup", "artistic"],
            meta("Midjourney v6", "1:1", None),
            (2890, 289, 634),
            "2026-01-12",
            "2026-01-13",
        ),
    ]
}
