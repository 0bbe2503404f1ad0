//! Standings data provider
//!
//! Orchestrates the cache and the API client: decides whether the cached
//! snapshot is still fresh, refetches when it is absent, corrupt, stale, or
//! a refresh is forced, and persists every successful fetch.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::cache::{CacheLookup, CacheStore};
use crate::clock::Clock;
use crate::data::{FetchError, StandingsResponse, StandingsSource};

/// Errors that can occur while obtaining standings
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Fetching from the API failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The fetched payload was not a valid standings document
    #[error("standings payload malformed: {0}")]
    Payload(#[from] serde_json::Error),

    /// Writing the cache record failed
    #[error("failed to write cache: {0}")]
    Storage(#[from] std::io::Error),
}

/// Result of a standings request, with cache provenance
#[derive(Debug)]
pub struct StandingsReport {
    /// The standings snapshot
    pub snapshot: StandingsResponse,
    /// Whether the snapshot came from a fresh fetch rather than the cache
    pub refreshed: bool,
    /// Timestamp of the stale record that was replaced, when one existed
    pub previous_update: Option<DateTime<Utc>>,
}

/// Provides standings snapshots from cache or the remote API
///
/// Generic over the fetch source and the clock so the freshness logic can be
/// tested with a fake fetcher and a pinned time.
#[derive(Debug)]
pub struct StandingsProvider<S, C> {
    source: S,
    store: CacheStore,
    ttl: Duration,
    clock: C,
}

impl<S: StandingsSource, C: Clock> StandingsProvider<S, C> {
    /// Creates a provider over a fetch source and a cache store
    ///
    /// # Arguments
    /// * `source` - Fetcher for raw standings payloads
    /// * `store` - Cache store keyed by competition code
    /// * `ttl` - Maximum cache age before a snapshot is considered stale
    /// * `clock` - Time source for freshness decisions
    pub fn new(source: S, store: CacheStore, ttl: Duration, clock: C) -> Self {
        Self {
            source,
            store,
            ttl,
            clock,
        }
    }

    /// Obtains the standings for a competition
    ///
    /// Returns the cached snapshot when a well-formed record younger than
    /// the TTL exists and no refresh is forced; otherwise fetches from the
    /// API, overwrites the cache record, and returns the fresh snapshot.
    /// A corrupt cache record is recovered silently by refetching.
    ///
    /// # Arguments
    /// * `competition` - Competition code (e.g. "bsa")
    /// * `force_refresh` - Bypass the cache regardless of its age
    pub async fn get_standings(
        &self,
        competition: &str,
        force_refresh: bool,
    ) -> Result<StandingsReport, ProviderError> {
        if force_refresh {
            log::info!("Refresh forced for {}", competition);
            return self.refresh(competition, None).await;
        }

        match self.store.read(competition) {
            CacheLookup::Miss => {
                log::info!("No cache record for {}", competition);
                self.refresh(competition, None).await
            }
            CacheLookup::Corrupt => {
                log::info!("Cache record for {} corrupt, refetching", competition);
                self.refresh(competition, None).await
            }
            CacheLookup::Found(record) => {
                let snapshot: StandingsResponse = match serde_json::from_str(&record.payload) {
                    Ok(snapshot) => snapshot,
                    Err(err) => {
                        // Stored payload no longer parses; same recovery as
                        // any other corrupt record.
                        log::warn!("Cached payload for {} malformed: {}", competition, err);
                        return self.refresh(competition, None).await;
                    }
                };

                let age = self.clock.now() - record.last_update;
                if age > self.ttl {
                    log::info!(
                        "Cache for {} is {} minutes old, refetching",
                        competition,
                        age.num_minutes()
                    );
                    return self.refresh(competition, Some(record.last_update)).await;
                }

                log::debug!(
                    "Serving {} from cache ({} minutes old)",
                    competition,
                    age.num_minutes()
                );
                Ok(StandingsReport {
                    snapshot,
                    refreshed: false,
                    previous_update: None,
                })
            }
        }
    }

    /// Fetches from the API, stores the record, and returns the snapshot
    async fn refresh(
        &self,
        competition: &str,
        previous_update: Option<DateTime<Utc>>,
    ) -> Result<StandingsReport, ProviderError> {
        eprintln!("Accessing football-data.org API - updating data");

        let payload = self.source.fetch(competition).await?;
        let snapshot: StandingsResponse = serde_json::from_str(&payload)?;
        self.store.write(competition, &payload, self.clock.now())?;

        Ok(StandingsReport {
            snapshot,
            refreshed: true,
            previous_update,
        })
    }
}
