use crate::domain::content::{ContentRecord, ContentSource, CuratedRepository};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

struct CuratedEntry {
    id: &'static str,
    title: &'static str,
    caption: &'static str,
    image_url: &'static str,
    post_url: &'static str,
    author: &'static str,
    tags: &'static [&'static str],
    published_at: i64,
}

const ENTRIES: &[CuratedEntry] = &[
    CuratedEntry {
        id: "STONKS",
        title: "STONKS",
        caption: "Numbers go up.",
        image_url: "https://i.imgflip.com/3oevdk.jpg",
        post_url: "https://knowyourmeme.com/memes/stonks",
        author: "Special Meme Fresh",
        tags: &["finance", "optimism"],
        published_at: 1_561_939_200,
    },
    CuratedEntry {
        id: "DOGE",
        title: "DOGE",
        caption: "Such coin. Much wow.",
        image_url: "https://i.imgur.com/zcG8RKy.jpg",
        post_url: "https://knowyourmeme.com/memes/doge",
        author: "Kabosu",
        tags: &["dog", "crypto"],
        published_at: 1_388_534_400,
    },
    CuratedEntry {
        id: "NYAN",
        title: "Nyan Cat",
        caption: "To the stars with rainbow trails.",
        image_url: "https://i.imgur.com/ik5nX0m.gif",
        post_url: "https://knowyourmeme.com/memes/nyan-cat",
        author: "Chris Torres",
        tags: &["cat", "gif", "retro"],
        published_at: 1_303_862_400,
    },
    CuratedEntry {
        id: "RICKROLL",
        title: "Rickroll",
        caption: "Never gonna give you up.",
        image_url: "https://i.imgur.com/H1toF6C.png",
        post_url: "https://knowyourmeme.com/memes/rickroll",
        author: "Rick Astley",
        tags: &["music", "bait"],
        published_at: 1_174_080_000,
    },
    CuratedEntry {
        id: "DISTRACTED",
        title: "Distracted Boyfriend",
        caption: "A tale of temptation.",
        image_url: "https://i.imgur.com/gCq8lr3.jpg",
        post_url: "https://knowyourmeme.com/memes/distracted-boyfriend",
        author: "Antonio Guillem",
        tags: &["stock photo", "relationship"],
        published_at: 1_502_755_200,
    },
];

static CURATED_RECORDS: LazyLock<Vec<ContentRecord>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|entry| ContentRecord {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            caption: Some(entry.caption.to_string()),
            image_url: Url::parse(entry.image_url).ok(),
            post_url: Url::parse(entry.post_url).ok(),
            author: Some(entry.author.to_string()),
            tags: entry.tags.iter().map(|t| t.to_string()).collect(),
            popularity: None,
            source: ContentSource::Curated,
            is_trending: false,
            timestamp: DateTime::<Utc>::from_timestamp(entry.published_at, 0),
        })
        .collect()
});

/// Hand-picked classics shown when live content is unavailable
pub struct HardcodedCuratedRepository;

impl HardcodedCuratedRepository {
    pub fn new() -> Self {
        // Verify data integrity at construction time
        debug_assert!(!CURATED_RECORDS.is_empty(), "Curated set must not be empty");
        debug_assert_eq!(
            CURATED_RECORDS
                .iter()
                .map(|r| r.dedup_key())
                .collect::<HashSet<_>>()
                .len(),
            CURATED_RECORDS.len(),
            "Curated records must have distinct dedup keys"
        );

        Self
    }
}

impl CuratedRepository for HardcodedCuratedRepository {
    fn load(&self, shuffled: bool) -> Vec<ContentRecord> {
        let mut records = CURATED_RECORDS.clone();
        if shuffled {
            records.shuffle(&mut rand::rng());
        }
        records
    }
}

impl Default for HardcodedCuratedRepository {
    fn default() -> Self {
        Self::new()
    }
}
