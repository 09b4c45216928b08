use super::model::{LoadState, SessionSettings, SessionSnapshot, NO_LIVE_CONTENT};
use crate::domain::content::{ContentRecord, CuratedRepository, ProviderError};
use crate::domain::feed::FeedServiceApi;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

/// Sole owner of the observable session state.
///
/// All writes go through the snapshot lock and are published as a whole, so
/// a reader never sees a state paired with collections from another refresh.
/// Overlapping refreshes are resolved by cancel-and-supersede: each refresh
/// claims a generation, and an older refresh that notices a newer generation
/// abandons its fetches without committing.
pub struct SessionController {
    feeds: Arc<dyn FeedServiceApi>,
    curated: Arc<dyn CuratedRepository>,
    settings: SessionSettings,
    snapshot: RwLock<SessionSnapshot>,
    generation: watch::Sender<u64>,
    booted: AtomicBool,
}

impl SessionController {
    pub fn new(
        feeds: Arc<dyn FeedServiceApi>,
        curated: Arc<dyn CuratedRepository>,
        settings: SessionSettings,
    ) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            feeds,
            curated,
            settings,
            snapshot: RwLock::new(SessionSnapshot::default()),
            generation,
            booted: AtomicBool::new(false),
        }
    }

    /// Copy of the current state and collections
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.read().await.clone()
    }

    pub fn is_booted(&self) -> bool {
        self.booted.load(Ordering::Acquire)
    }

    /// Start the first load in the background. Only the first call has any
    /// effect; returns whether this call started it.
    pub fn boot(self: &Arc<Self>) -> bool {
        if self.booted.swap(true, Ordering::AcqRel) {
            tracing::debug!("Session already booted");
            return false;
        }

        tracing::info!("Booting session");
        let session = Arc::clone(self);
        tokio::spawn(async move {
            session.refresh().await;
        });
        true
    }

    /// Re-run the whole pipeline and return the resulting snapshot. A refresh
    /// superseded by a newer one returns the snapshot as it stands, untouched.
    pub async fn refresh(&self) -> SessionSnapshot {
        let generation = self.next_generation();
        let superseded = superseded_by_newer(self.generation.subscribe(), generation);

        let curated = self.curated.load(self.settings.shuffle_curated);
        let started = self
            .commit(generation, |snapshot| {
                snapshot.state = LoadState::Loading;
                snapshot.curated = curated;
            })
            .await;
        if !started {
            return self.snapshot().await;
        }
        tracing::info!(generation = generation, "Session loading");

        let fetches = async {
            tokio::join!(
                self.feeds.fetch_trending(self.settings.trending_limit),
                self.feeds.fetch_discovery(self.settings.discovery_limit),
            )
        };

        let (trending, discovery) = tokio::select! {
            results = fetches => results,
            _ = superseded => {
                tracing::info!(generation = generation, "Refresh superseded, dropping in-flight fetches");
                return self.snapshot().await;
            }
        };

        let outcome = resolve(trending, discovery);
        let committed = self
            .commit(generation, |snapshot| {
                snapshot.state = outcome.state;
                snapshot.trending = outcome.trending;
                snapshot.discoveries = outcome.discoveries;
            })
            .await;

        let snapshot = self.snapshot().await;
        if committed {
            match &snapshot.state {
                LoadState::Failed(message) => tracing::warn!(
                    generation = generation,
                    message = %message,
                    curated = snapshot.curated.len(),
                    "Session failed, curated fallback available"
                ),
                state => tracing::info!(
                    generation = generation,
                    state = state.label(),
                    trending = snapshot.trending.len(),
                    discoveries = snapshot.discoveries.len(),
                    "Session refreshed"
                ),
            }
        }
        snapshot
    }

    fn next_generation(&self) -> u64 {
        let mut claimed = 0;
        self.generation.send_modify(|current| {
            *current += 1;
            claimed = *current;
        });
        claimed
    }

    /// Apply `update` only while `generation` is still the latest
    async fn commit(&self, generation: u64, update: impl FnOnce(&mut SessionSnapshot)) -> bool {
        let mut snapshot = self.snapshot.write().await;
        if *self.generation.borrow() != generation {
            return false;
        }
        update(&mut snapshot);
        true
    }
}

/// Resolves once a generation other than `generation` is published
async fn superseded_by_newer(mut receiver: watch::Receiver<u64>, generation: u64) {
    let _ = receiver.wait_for(|current| *current != generation).await;
}

struct RefreshOutcome {
    state: LoadState,
    trending: Vec<ContentRecord>,
    discoveries: Vec<ContentRecord>,
}

/// Fold both feed results into the next state. A feed that failed while
/// the other succeeded contributes an empty collection.
fn resolve(
    trending: Result<Vec<ContentRecord>, ProviderError>,
    discovery: Result<Vec<ContentRecord>, ProviderError>,
) -> RefreshOutcome {
    match (trending, discovery) {
        (Err(err), Err(_)) => RefreshOutcome {
            state: LoadState::Failed(err.to_string()),
            trending: Vec::new(),
            discoveries: Vec::new(),
        },
        (Ok(trending), Ok(discoveries)) if trending.is_empty() && discoveries.is_empty() => {
            RefreshOutcome {
                state: LoadState::Failed(NO_LIVE_CONTENT.to_string()),
                trending,
                discoveries,
            }
        }
        (trending, discovery) => {
            if let Err(err) = &trending {
                tracing::warn!(error = %err, "Trending feed failed, showing discoveries only");
            }
            if let Err(err) = &discovery {
                tracing::warn!(error = %err, "Discovery feed failed, showing trending only");
            }
            RefreshOutcome {
                state: LoadState::Loaded,
                trending: trending.unwrap_or_default(),
                discoveries: discovery.unwrap_or_default(),
            }
        }
    }
}
