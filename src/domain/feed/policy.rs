use crate::domain::content::{ContentProvider, ContentRecord, FeedKind};
use std::sync::Arc;

/// Community records above this popularity are flagged as trending
pub const DEFAULT_TRENDING_THRESHOLD: i64 = 5000;

/// How a provider failure affects the aggregation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderRole {
    /// Failure propagates when no other provider produced a result
    Required,
    /// Failure is logged and treated as an empty contribution
    Optional,
}

/// Per-provider rule for the `is_trending` flag.
/// Provider-reported flags are never trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingPolicy {
    /// Trending when popularity is strictly greater than the threshold
    PopularityAbove(i64),
    /// Trending whenever the call builds the trending feed
    CallContext,
}

impl TrendingPolicy {
    pub fn classify(&self, record: &ContentRecord, kind: FeedKind) -> bool {
        match self {
            TrendingPolicy::PopularityAbove(threshold) => {
                record.popularity.is_some_and(|p| p > *threshold)
            }
            TrendingPolicy::CallContext => kind == FeedKind::Trending,
        }
    }
}

/// One row of the policy table: a provider plus the rules applied to it
#[derive(Clone)]
pub struct ProviderSlot {
    pub provider: Arc<dyn ContentProvider>,
    pub role: ProviderRole,
    pub trending: TrendingPolicy,
}

impl ProviderSlot {
    pub fn required(provider: Arc<dyn ContentProvider>, trending: TrendingPolicy) -> Self {
        Self {
            provider,
            role: ProviderRole::Required,
            trending,
        }
    }

    pub fn optional(provider: Arc<dyn ContentProvider>, trending: TrendingPolicy) -> Self {
        Self {
            provider,
            role: ProviderRole::Optional,
            trending,
        }
    }
}

/// Providers for one feed kind, in merge priority order
#[derive(Clone, Default)]
pub struct FeedPlan {
    pub slots: Vec<ProviderSlot>,
    /// Shuffle the merged list before deduplication (discovery only)
    pub shuffle: bool,
}

impl FeedPlan {
    pub fn new(slots: Vec<ProviderSlot>) -> Self {
        Self {
            slots,
            shuffle: false,
        }
    }

    pub fn shuffled(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}

/// How many records to ask each provider for, given how many of them are
/// configured. A lone provider gets the full limit; combined providers are oversubscribed
/// past half the limit to absorb duplicates.
pub fn per_provider_limit(limit: usize, providers: usize) -> usize {
    if providers <= 1 {
        limit
    } else {
        (limit / 2 + 1).max(3)
    }
}
