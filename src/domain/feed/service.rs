use super::policy::{per_provider_limit, FeedPlan, ProviderRole, ProviderSlot, TrendingPolicy};
use crate::domain::content::{ContentProvider, ContentRecord, FeedKind, FeedRequest, ProviderError};
use async_trait::async_trait;
use futures::future::join_all;
use rand::seq::SliceRandom;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

pub struct FeedService {
    trending: FeedPlan,
    discovery: FeedPlan,
}

impl FeedService {
    pub fn new(trending: FeedPlan, discovery: FeedPlan) -> Self {
        Self {
            trending,
            discovery,
        }
    }

    /// Standard policy table. Community is required in both feeds and is
    /// flagged trending above `trending_threshold`; the generated endpoints are
    /// optional and trend only on the trending path.
    pub fn with_default_policy(
        community: Arc<dyn ContentProvider>,
        generated_trending: Arc<dyn ContentProvider>,
        generated_latest: Arc<dyn ContentProvider>,
        trending_threshold: i64,
        shuffle_discovery: bool,
    ) -> Self {
        let community_rule = TrendingPolicy::PopularityAbove(trending_threshold);

        let trending = FeedPlan::new(vec![
            ProviderSlot::required(community.clone(), community_rule),
            ProviderSlot::optional(generated_trending, TrendingPolicy::CallContext),
        ]);
        let discovery = FeedPlan::new(vec![
            ProviderSlot::required(community, community_rule),
            ProviderSlot::optional(generated_latest, TrendingPolicy::CallContext),
        ])
        .shuffled(shuffle_discovery);

        Self::new(trending, discovery)
    }

    fn plan(&self, kind: FeedKind) -> &FeedPlan {
        match kind {
            FeedKind::Trending => &self.trending,
            FeedKind::Discovery => &self.discovery,
        }
    }

    /// Fan out to every provider of the plan, join, then merge/rank/dedup.
    async fn aggregate(&self, request: FeedRequest) -> Result<Vec<ContentRecord>, ProviderError> {
        let plan = self.plan(request.kind);
        let configured = plan
            .slots
            .iter()
            .filter(|slot| slot.provider.is_configured())
            .count();
        let per_provider = per_provider_limit(request.limit, configured);

        tracing::info!(
            feed = %request.kind,
            limit = request.limit,
            providers = plan.slots.len(),
            configured = configured,
            per_provider = per_provider,
            "Aggregating feed"
        );

        let fetches = plan.slots.iter().map(|slot| async move {
            let started = Instant::now();
            let result = slot.provider.fetch(per_provider).await;
            (slot, result, started.elapsed())
        });
        let outcomes = join_all(fetches).await;

        let mut merged = Vec::new();
        let mut succeeded = 0usize;
        let mut required_failure: Option<ProviderError> = None;

        for (slot, result, elapsed) in outcomes {
            let provider = slot.provider.name();
            match result {
                Ok(records) => {
                    succeeded += 1;
                    tracing::debug!(
                        feed = %request.kind,
                        provider = provider,
                        records = records.len(),
                        latency_ms = elapsed.as_millis() as u64,
                        "Provider fetch completed"
                    );
                    merged.extend(records.into_iter().map(|record| {
                        debug_assert_eq!(record.source, slot.provider.source(), "{}", provider);
                        let trending = slot.trending.classify(&record, request.kind);
                        record.with_trending(trending)
                    }));
                }
                Err(err) => {
                    log_provider_failure(request.kind, slot, &err);
                    if slot.role == ProviderRole::Required && required_failure.is_none() {
                        required_failure = Some(err);
                    }
                }
            }
        }

        if let Some(err) = required_failure {
            if succeeded == 0 {
                tracing::error!(
                    feed = %request.kind,
                    error = %err,
                    "Required provider failed with no fallback"
                );
                return Err(err);
            }
        }

        match request.kind {
            FeedKind::Trending => rank_by_popularity(&mut merged),
            FeedKind::Discovery if plan.shuffle => shuffle_records(&mut merged),
            FeedKind::Discovery => {}
        }

        let merged_count = merged.len();
        let output = deduplicate(merged, request.limit);

        tracing::info!(
            feed = %request.kind,
            merged = merged_count,
            returned = output.len(),
            "Feed aggregated"
        );

        Ok(output)
    }
}

fn log_provider_failure(kind: FeedKind, slot: &ProviderSlot, err: &ProviderError) {
    let provider = slot.provider.name();
    match (slot.role, err) {
        (ProviderRole::Optional, ProviderError::MissingCredential) => {
            tracing::debug!(feed = %kind, provider = provider, "Provider not configured, skipping");
        }
        (ProviderRole::Optional, _) => {
            tracing::warn!(
                feed = %kind,
                provider = provider,
                error = %err,
                "Optional provider failed, treating as empty"
            );
        }
        (ProviderRole::Required, _) => {
            tracing::warn!(
                feed = %kind,
                provider = provider,
                error = %err,
                "Required provider failed"
            );
        }
    }
}

fn shuffle_records(records: &mut [ContentRecord]) {
    records.shuffle(&mut rand::rng());
}

/// Descending popularity, absent counted as zero. Stable: ties keep merge order.
pub fn rank_by_popularity(records: &mut [ContentRecord]) {
    records.sort_by_key(|record| Reverse(record.rank_score()));
}

/// Single left-to-right pass; the first record for a dedup key (or id) wins.
/// Stops once `limit` records are collected.
pub fn deduplicate(records: Vec<ContentRecord>, limit: usize) -> Vec<ContentRecord> {
    let mut seen_keys: HashSet<String> = HashSet::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut output = Vec::with_capacity(limit.min(records.len()));

    for record in records {
        if output.len() >= limit {
            break;
        }
        if seen_keys.contains(record.dedup_key()) || seen_ids.contains(&record.id) {
            continue;
        }
        seen_keys.insert(record.dedup_key().to_string());
        seen_ids.insert(record.id.clone());
        output.push(record);
    }

    output
}

#[async_trait]
pub trait FeedServiceApi: Send + Sync {
    /// Ranked trending collection, limit clamped to 1..=40
    async fn fetch_trending(&self, limit: usize) -> Result<Vec<ContentRecord>, ProviderError>;

    /// Discovery collection in merge order, limit clamped to 1..=60
    async fn fetch_discovery(&self, limit: usize) -> Result<Vec<ContentRecord>, ProviderError>;
}

#[async_trait]
impl FeedServiceApi for FeedService {
    async fn fetch_trending(&self, limit: usize) -> Result<Vec<ContentRecord>, ProviderError> {
        self.aggregate(FeedRequest::new(FeedKind::Trending, limit))
            .await
    }

    async fn fetch_discovery(&self, limit: usize) -> Result<Vec<ContentRecord>, ProviderError> {
        self.aggregate(FeedRequest::new(FeedKind::Discovery, limit))
            .await
    }
}
