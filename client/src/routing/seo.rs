//! SEO landing-page variants.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every variant renders the public landing page; only the metadata and the
//! hero headline change. The registry is built once from the tables below
//! on first access and is read-only afterwards. The host server reuses it
//! to emit `sitemap.xml`.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use std::collections::HashMap;
use std::sync::LazyLock;

/// Metadata for one landing-page variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeoRoute {
    pub path: String,
    pub title: String,
    pub description: String,
    pub headline: String,
}

struct Curated {
    path: &'static str,
    title: &'static str,
    description: &'static str,
    headline: &'static str,
}

/// Metadata used by `/` and by any path the route table does not know.
pub const DEFAULT_TITLE: &str = "Cadenza | AI Music & Video Generator";
pub const DEFAULT_DESCRIPTION: &str =
    "Create original songs, lyrics, and music videos with AI. Royalty-free tracks in minutes.";
pub const DEFAULT_HEADLINE: &str = "Make a song about anything";

const CURATED: &[Curated] = &[
    Curated {
        path: "/ai-music-generator",
        title: "AI Music Generator | Cadenza",
        description: "Generate full songs with vocals from a text prompt.",
        headline: "The AI music generator for creators",
    },
    Curated {
        path: "/ai-song-generator",
        title: "AI Song Generator | Cadenza",
        description: "Write, sing, and master a complete song with AI.",
        headline: "Turn any idea into a finished song",
    },
    Curated {
        path: "/ai-lyrics-generator",
        title: "AI Lyrics Generator | Cadenza",
        description: "Get verses, hooks, and choruses written for your track.",
        headline: "Lyrics that fit your melody",
    },
    Curated {
        path: "/ai-music-video-generator",
        title: "AI Music Video Generator | Cadenza",
        description: "Turn your tracks into shareable music videos.",
        headline: "Give every song a music video",
    },
    Curated {
        path: "/royalty-free-music",
        title: "Royalty-Free Music Maker | Cadenza",
        description: "Original background music you own, ready for YouTube and TikTok.",
        headline: "Royalty-free music, made for you",
    },
    Curated {
        path: "/birthday-song-generator",
        title: "Personalized Birthday Song Generator | Cadenza",
        description: "Make a custom birthday song with their name in it.",
        headline: "A birthday song nobody else has",
    },
    Curated {
        path: "/text-to-music",
        title: "Text to Music | Cadenza",
        description: "Describe a vibe and hear it as a song seconds later.",
        headline: "Type it. Hear it.",
    },
    Curated {
        path: "/suno-alternative",
        title: "A Suno Alternative with Music Videos | Cadenza",
        description: "Songs and videos in one place, with commercial rights on paid plans.",
        headline: "Songs and videos, one studio",
    },
];

/// Genres that each get a generated `/ai-{slug}-generator` variant.
const GENRES: &[(&str, &str)] = &[
    ("rap", "Rap"),
    ("hip-hop", "Hip-Hop"),
    ("country", "Country"),
    ("rock", "Rock"),
    ("pop", "Pop"),
    ("edm", "EDM"),
    ("lofi", "Lo-Fi"),
    ("jazz", "Jazz"),
    ("rnb", "R&B"),
    ("metal", "Metal"),
    ("kpop", "K-Pop"),
    ("gospel", "Gospel"),
    ("reggaeton", "Reggaeton"),
    ("christmas", "Christmas"),
    ("lullaby", "Lullaby"),
    ("anime", "Anime"),
];

fn genre_route(slug: &str, label: &str) -> SeoRoute {
    SeoRoute {
        path: format!("/ai-{slug}-generator"),
        title: format!("AI {label} Song Generator | Cadenza"),
        description: format!("Create original {label} songs with AI vocals and beats."),
        headline: format!("Make {label} tracks with AI"),
    }
}

fn build_routes() -> Vec<SeoRoute> {
    let curated = CURATED.iter().map(|c| SeoRoute {
        path: c.path.to_owned(),
        title: c.title.to_owned(),
        description: c.description.to_owned(),
        headline: c.headline.to_owned(),
    });
    let generated = GENRES.iter().map(|(slug, label)| genre_route(slug, label));
    curated.chain(generated).collect()
}

static ROUTES: LazyLock<Vec<SeoRoute>> = LazyLock::new(build_routes);

static BY_PATH: LazyLock<HashMap<&'static str, &'static SeoRoute>> =
    LazyLock::new(|| ROUTES.iter().map(|r| (r.path.as_str(), r)).collect());

/// All SEO variants in declaration order.
pub fn routes() -> &'static [SeoRoute] {
    &ROUTES
}

/// Variant registered for `path`, if any.
pub fn lookup(path: &str) -> Option<&'static SeoRoute> {
    BY_PATH.get(path).copied()
}
