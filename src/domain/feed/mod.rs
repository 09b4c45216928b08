pub mod policy;
pub mod service;

pub use policy::{
    per_provider_limit, FeedPlan, ProviderRole, ProviderSlot, TrendingPolicy,
    DEFAULT_TRENDING_THRESHOLD,
};
pub use service::{deduplicate, rank_by_popularity, FeedService, FeedServiceApi};
