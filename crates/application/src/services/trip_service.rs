//! Trip lookup orchestration
//!
//! Cache-aside lookup over a set of racing providers:
//!
//! 1. Check the cache; a hit short-circuits without touching any provider.
//! 2. On a miss, invoke every configured provider concurrently and accept
//!    the first completion - success or error alike - as the primary
//!    candidate.
//! 3. If the primary candidate is an error, call the failing provider's
//!    statically paired alternate once, synchronously. No further chaining.
//! 4. Write a successful final result back to the cache, best-effort.
//!
//! Cache failures never surface to the caller: read failures fall through to
//! the race, write failures are logged and swallowed.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use domain::{ProviderId, RouteKey, TripInfo};
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{CachePort, CachePortExt, CacheStats, ProviderError, RoutingPort};

/// Default upper bound on the provider race
const DEFAULT_RACE_DEADLINE: Duration = Duration::from_secs(30);

/// Trip lookup service racing multiple routing providers over a shared cache
pub struct TripService {
    cache: Arc<dyn CachePort>,
    providers: Vec<Arc<dyn RoutingPort>>,
    race_deadline: Duration,
}

impl fmt::Debug for TripService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripService")
            .field("cache", &self.cache)
            .field(
                "providers",
                &self.providers.iter().map(|p| p.id()).collect::<Vec<_>>(),
            )
            .field("race_deadline", &self.race_deadline)
            .finish()
    }
}

impl TripService {
    /// Create a new trip service
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two providers are configured - the
    /// race-and-fallback policy needs at least a pair.
    pub fn new(
        cache: Arc<dyn CachePort>,
        providers: Vec<Arc<dyn RoutingPort>>,
    ) -> Result<Self, ApplicationError> {
        if providers.len() < 2 {
            return Err(ApplicationError::Internal(
                "at least two routing providers are required".to_string(),
            ));
        }
        Ok(Self {
            cache,
            providers,
            race_deadline: DEFAULT_RACE_DEADLINE,
        })
    }

    /// Override the upper bound on the provider race
    #[must_use]
    pub const fn with_race_deadline(mut self, deadline: Duration) -> Self {
        self.race_deadline = deadline;
        self
    }

    /// Look up trip duration and distance between two locations
    ///
    /// Returns the cached result when present; otherwise races all providers,
    /// applies the single fallback hop on a primary error, and caches a
    /// successful final result.
    ///
    /// # Errors
    ///
    /// Returns an error when the locations fail validation, when no provider
    /// answers before the race deadline, or when both the primary candidate
    /// and its paired fallback fail.
    #[instrument(skip(self))]
    pub async fn lookup(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<TripInfo, ApplicationError> {
        let key = RouteKey::new(origin, destination)?;

        if let Some(cached) = self.cached(&key).await {
            debug!(key = %key, "Cache hit, skipping providers");
            return Ok(cached);
        }

        let primary = self.race(origin, destination).await?;

        let resolved = match primary {
            Ok(info) => Ok(info),
            Err(failure) => {
                warn!(
                    provider = %failure.provider,
                    error = %failure,
                    "Primary candidate failed, invoking fallback provider"
                );
                self.fallback_provider(failure.provider)
                    .trip_info(origin, destination)
                    .await
            },
        };

        let info = resolved?;
        self.store(&key, &info).await;
        Ok(info)
    }

    /// Cache statistics of the underlying store
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Availability of each configured provider
    pub async fn provider_availability(&self) -> Vec<(ProviderId, bool)> {
        let mut availability = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            availability.push((provider.id(), provider.is_available().await));
        }
        availability
    }

    /// Read the cache, treating misses, transport failures, and undecodable
    /// records identically as "not cached"
    async fn cached(&self, key: &RouteKey) -> Option<TripInfo> {
        match self.cache.get::<TripInfo>(key.as_str()).await {
            Ok(hit) => hit,
            Err(e) => {
                debug!(key = %key, error = %e, "Cache read failed, treating as miss");
                None
            },
        }
    }

    /// Launch every provider concurrently and accept the first completion
    ///
    /// The result channel is sized to the provider set, so a losing
    /// provider's send lands in the buffer and is dropped with it - a late
    /// finisher never blocks. Cancellation of losers is advisory only;
    /// their tasks run to completion.
    async fn race(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Result<TripInfo, ProviderError>, ApplicationError> {
        let (tx, mut rx) = mpsc::channel(self.providers.len());

        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let tx = tx.clone();
            let origin = origin.to_string();
            let destination = destination.to_string();
            tokio::spawn(async move {
                // Only the first result is consumed; a lost send means we
                // raced and lost.
                let _ = tx
                    .send(provider.trip_info(&origin, &destination).await)
                    .await;
            });
        }
        drop(tx);

        match tokio::time::timeout(self.race_deadline, rx.recv()).await {
            Ok(Some(result)) => Ok(result),
            Ok(None) => Err(ApplicationError::Internal(
                "all provider tasks exited without reporting a result".to_string(),
            )),
            Err(_) => Err(ApplicationError::DeadlineElapsed(self.race_deadline)),
        }
    }

    /// Resolve the statically paired alternate for a failed provider
    ///
    /// When the paired provider is not in the configured set, the set's
    /// first member acts as the default fallback.
    fn fallback_provider(&self, failed: ProviderId) -> &Arc<dyn RoutingPort> {
        let paired = failed.fallback();
        self.providers
            .iter()
            .find(|p| p.id() == paired)
            .unwrap_or(&self.providers[0])
    }

    /// Best-effort cache write; a failure is logged and never fails the lookup
    async fn store(&self, key: &RouteKey, info: &TripInfo) {
        if let Err(e) = self.cache.set(key.as_str(), info).await {
            warn!(key = %key, error = %e, "Failed to cache trip info");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::ports::MockRoutingPort;

    /// In-memory cache stub with switchable read/write failure and counters
    #[derive(Debug, Default)]
    struct StubCache {
        entries: Mutex<HashMap<String, Vec<u8>>>,
        fail_reads: bool,
        fail_writes: bool,
        gets: AtomicUsize,
        sets: AtomicUsize,
    }

    impl StubCache {
        fn with_entry(key: &str, info: &TripInfo) -> Self {
            let cache = Self::default();
            let bytes = serde_json::to_vec(info).expect("serializes");
            cache
                .entries
                .lock()
                .expect("lock")
                .insert(key.to_string(), bytes);
            cache
        }

        fn failing_reads() -> Self {
            Self {
                fail_reads: true,
                ..Self::default()
            }
        }

        fn failing_writes() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        fn set_count(&self) -> usize {
            self.sets.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CachePort for StubCache {
        async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            if self.fail_reads {
                return Err(ApplicationError::Cache("store unavailable".to_string()));
            }
            Ok(self.entries.lock().expect("lock").get(key).cloned())
        }

        async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError> {
            self.sets.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes {
                return Err(ApplicationError::Cache("store unavailable".to_string()));
            }
            self.entries
                .lock()
                .expect("lock")
                .insert(key.to_string(), value);
            Ok(())
        }

        async fn invalidate(&self, key: &str) -> Result<(), ApplicationError> {
            self.entries.lock().expect("lock").remove(key);
            Ok(())
        }

        async fn exists(&self, key: &str) -> Result<bool, ApplicationError> {
            Ok(self.entries.lock().expect("lock").contains_key(key))
        }

        fn stats(&self) -> CacheStats {
            CacheStats::default()
        }
    }

    /// Provider stub completing with a fixed result after a fixed delay
    struct StubProvider {
        id: ProviderId,
        delay: Duration,
        result: Result<TripInfo, ProviderError>,
        calls: Arc<AtomicUsize>,
    }

    impl StubProvider {
        fn new(
            id: ProviderId,
            delay: Duration,
            result: Result<TripInfo, ProviderError>,
        ) -> (Arc<Self>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let stub = Arc::new(Self {
                id,
                delay,
                result,
                calls: Arc::clone(&calls),
            });
            (stub, calls)
        }
    }

    #[async_trait]
    impl RoutingPort for StubProvider {
        fn id(&self) -> ProviderId {
            self.id
        }

        async fn trip_info(
            &self,
            _origin: &str,
            _destination: &str,
        ) -> Result<TripInfo, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.result.clone()
        }

        async fn is_available(&self) -> bool {
            true
        }
    }

    fn google_error() -> ProviderError {
        ProviderError::new(ProviderId::Google, "No routes found")
    }

    fn osm_error() -> ProviderError {
        ProviderError::new(ProviderId::Openstreetmap, "No location matches")
    }

    fn service(cache: Arc<StubCache>, providers: Vec<Arc<dyn RoutingPort>>) -> TripService {
        TripService::new(cache, providers).expect("at least two providers")
    }

    #[test]
    fn rejects_fewer_than_two_providers() {
        let cache = Arc::new(StubCache::default());
        let (solo, _) = StubProvider::new(
            ProviderId::Google,
            Duration::ZERO,
            Ok(TripInfo::new(ProviderId::Google, 1, 1)),
        );
        let result = TripService::new(cache, vec![solo]);
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cache_hit_short_circuits_providers() {
        let cached = TripInfo::new(ProviderId::Openstreetmap, 12, 5);
        let cache = Arc::new(StubCache::with_entry("A:B", &cached));
        let (google, google_calls) = StubProvider::new(
            ProviderId::Google,
            Duration::ZERO,
            Ok(TripInfo::new(ProviderId::Google, 99, 99)),
        );
        let (osm, osm_calls) = StubProvider::new(
            ProviderId::Openstreetmap,
            Duration::ZERO,
            Ok(TripInfo::new(ProviderId::Openstreetmap, 99, 99)),
        );

        let service = service(Arc::clone(&cache), vec![google, osm]);
        let info = service.lookup("A", "B").await.expect("cached result");

        assert_eq!(info, cached);
        assert_eq!(google_calls.load(Ordering::SeqCst), 0);
        assert_eq!(osm_calls.load(Ordering::SeqCst), 0);
        assert_eq!(cache.set_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cache_miss_races_all_providers_and_keeps_the_fastest() {
        let cache = Arc::new(StubCache::default());
        let fast = TripInfo::new(ProviderId::Openstreetmap, 12, 5);
        let slow = TripInfo::new(ProviderId::Google, 14, 6);
        let (google, google_calls) =
            StubProvider::new(ProviderId::Google, Duration::from_millis(50), Ok(slow));
        let (osm, osm_calls) =
            StubProvider::new(ProviderId::Openstreetmap, Duration::from_millis(5), Ok(fast));

        let service = service(Arc::clone(&cache), vec![google, osm]);
        let info = service.lookup("A", "B").await.expect("race winner");

        assert_eq!(info, fast);
        assert_eq!(google_calls.load(Ordering::SeqCst), 1);
        assert_eq!(osm_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn successful_result_is_written_to_cache_once() {
        let cache = Arc::new(StubCache::default());
        let winner = TripInfo::new(ProviderId::Openstreetmap, 12, 5);
        let (google, _) = StubProvider::new(
            ProviderId::Google,
            Duration::from_millis(50),
            Ok(TripInfo::new(ProviderId::Google, 14, 6)),
        );
        let (osm, _) = StubProvider::new(
            ProviderId::Openstreetmap,
            Duration::from_millis(5),
            Ok(winner),
        );

        let service = service(Arc::clone(&cache), vec![google, osm]);
        service.lookup("A", "B").await.expect("race winner");

        assert_eq!(cache.set_count(), 1);
        let stored = cache
            .entries
            .lock()
            .expect("lock")
            .get("A:B")
            .cloned()
            .expect("cache entry written under the route key");
        let stored: TripInfo = serde_json::from_slice(&stored).expect("deserializes");
        assert_eq!(stored, winner);
    }

    #[tokio::test(start_paused = true)]
    async fn primary_error_triggers_paired_fallback() {
        let cache = Arc::new(StubCache::default());
        let fallback_result = TripInfo::new(ProviderId::Openstreetmap, 12, 5);
        // Google errors first; Openstreetmap is slow enough to lose the race,
        // then answers the synchronous fallback call.
        let (google, google_calls) = StubProvider::new(
            ProviderId::Google,
            Duration::from_millis(5),
            Err(google_error()),
        );
        let (osm, osm_calls) = StubProvider::new(
            ProviderId::Openstreetmap,
            Duration::from_millis(500),
            Ok(fallback_result),
        );

        let service = service(Arc::clone(&cache), vec![google, osm]);
        let info = service.lookup("A", "B").await.expect("fallback result");

        assert_eq!(info, fallback_result);
        assert_eq!(google_calls.load(Ordering::SeqCst), 1);
        // Once for the lost race, once for the fallback hop.
        assert_eq!(osm_calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.set_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn fallback_error_is_returned_without_chaining() {
        let cache = Arc::new(StubCache::default());
        let (google, google_calls) = StubProvider::new(
            ProviderId::Google,
            Duration::from_millis(5),
            Err(google_error()),
        );
        let (osm, osm_calls) = StubProvider::new(
            ProviderId::Openstreetmap,
            Duration::from_millis(500),
            Err(osm_error()),
        );

        let service = service(Arc::clone(&cache), vec![google, osm]);
        let result = service.lookup("A", "B").await;

        match result {
            Err(ApplicationError::Provider(err)) => {
                assert_eq!(err.provider, ProviderId::Openstreetmap);
            },
            other => panic!("expected fallback provider error, got {other:?}"),
        }
        // The erroring primary is never retried.
        assert_eq!(google_calls.load(Ordering::SeqCst), 1);
        assert_eq!(osm_calls.load(Ordering::SeqCst), 2);
        // Failed lookups never touch the cache.
        assert_eq!(cache.set_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cache_read_failure_falls_through_to_the_race() {
        let cache = Arc::new(StubCache::failing_reads());
        let fresh = TripInfo::new(ProviderId::Openstreetmap, 12, 5);
        let (google, _) = StubProvider::new(
            ProviderId::Google,
            Duration::from_millis(50),
            Ok(TripInfo::new(ProviderId::Google, 14, 6)),
        );
        let (osm, osm_calls) = StubProvider::new(
            ProviderId::Openstreetmap,
            Duration::from_millis(5),
            Ok(fresh),
        );

        let service = service(Arc::clone(&cache), vec![google, osm]);
        let info = service.lookup("A", "B").await.expect("fresh result");

        assert_eq!(info, fresh);
        assert_eq!(osm_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn undecodable_cache_record_is_a_miss() {
        let cache = Arc::new(StubCache::default());
        cache
            .entries
            .lock()
            .expect("lock")
            .insert("A:B".to_string(), b"not json".to_vec());
        let fresh = TripInfo::new(ProviderId::Openstreetmap, 12, 5);
        let (google, _) = StubProvider::new(
            ProviderId::Google,
            Duration::from_millis(50),
            Ok(TripInfo::new(ProviderId::Google, 14, 6)),
        );
        let (osm, _) = StubProvider::new(
            ProviderId::Openstreetmap,
            Duration::from_millis(5),
            Ok(fresh),
        );

        let service = service(Arc::clone(&cache), vec![google, osm]);
        let info = service.lookup("A", "B").await.expect("fresh result");

        assert_eq!(info, fresh);
    }

    #[tokio::test(start_paused = true)]
    async fn cache_write_failure_does_not_change_the_result() {
        let cache = Arc::new(StubCache::failing_writes());
        let fresh = TripInfo::new(ProviderId::Openstreetmap, 12, 5);
        let (google, _) = StubProvider::new(
            ProviderId::Google,
            Duration::from_millis(50),
            Ok(TripInfo::new(ProviderId::Google, 14, 6)),
        );
        let (osm, _) = StubProvider::new(
            ProviderId::Openstreetmap,
            Duration::from_millis(5),
            Ok(fresh),
        );

        let service = service(Arc::clone(&cache), vec![google, osm]);
        let info = service.lookup("A", "B").await.expect("write failure swallowed");

        assert_eq!(info, fresh);
        assert_eq!(cache.set_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn race_deadline_bounds_the_wait() {
        let cache = Arc::new(StubCache::default());
        let (google, _) = StubProvider::new(
            ProviderId::Google,
            Duration::from_secs(3600),
            Ok(TripInfo::new(ProviderId::Google, 14, 6)),
        );
        let (osm, _) = StubProvider::new(
            ProviderId::Openstreetmap,
            Duration::from_secs(3600),
            Ok(TripInfo::new(ProviderId::Openstreetmap, 12, 5)),
        );

        let service = service(Arc::clone(&cache), vec![google, osm])
            .with_race_deadline(Duration::from_secs(5));
        let result = service.lookup("A", "B").await;

        assert!(matches!(result, Err(ApplicationError::DeadlineElapsed(_))));
        assert_eq!(cache.set_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_origin_fails_before_any_network_work() {
        let cache = Arc::new(StubCache::default());
        let (google, google_calls) = StubProvider::new(
            ProviderId::Google,
            Duration::ZERO,
            Ok(TripInfo::new(ProviderId::Google, 14, 6)),
        );
        let (osm, osm_calls) = StubProvider::new(
            ProviderId::Openstreetmap,
            Duration::ZERO,
            Ok(TripInfo::new(ProviderId::Openstreetmap, 12, 5)),
        );

        let service = service(Arc::clone(&cache), vec![google, osm]);
        let result = service.lookup("   ", "B").await;

        assert!(matches!(result, Err(ApplicationError::Domain(_))));
        assert_eq!(google_calls.load(Ordering::SeqCst), 0);
        assert_eq!(osm_calls.load(Ordering::SeqCst), 0);
        assert_eq!(cache.gets.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fallback_resolution_uses_the_static_pairing() {
        let cache = Arc::new(StubCache::default());
        let mut google = MockRoutingPort::new();
        google.expect_id().return_const(ProviderId::Google);
        let mut osm = MockRoutingPort::new();
        osm.expect_id().return_const(ProviderId::Openstreetmap);

        let service = service(cache, vec![Arc::new(google), Arc::new(osm)]);

        assert_eq!(
            service.fallback_provider(ProviderId::Google).id(),
            ProviderId::Openstreetmap
        );
        assert_eq!(
            service.fallback_provider(ProviderId::Openstreetmap).id(),
            ProviderId::Google
        );
    }

    #[tokio::test(start_paused = true)]
    async fn missing_paired_provider_falls_back_to_the_first_in_set() {
        let cache = Arc::new(StubCache::default());
        // Two providers with the same identity: the Openstreetmap pairing
        // is not configured, so the set's first member is the default.
        let (primary, primary_calls) = StubProvider::new(
            ProviderId::Google,
            Duration::from_millis(5),
            Err(google_error()),
        );
        let (secondary, _) = StubProvider::new(
            ProviderId::Google,
            Duration::from_millis(500),
            Err(google_error()),
        );

        let service = service(cache, vec![primary, secondary]);
        let result = service.lookup("A", "B").await;

        assert!(matches!(result, Err(ApplicationError::Provider(_))));
        // Primary wins the race, then serves the fallback hop as set default.
        assert_eq!(primary_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn provider_availability_reports_each_provider() {
        let cache = Arc::new(StubCache::default());
        let (google, _) = StubProvider::new(
            ProviderId::Google,
            Duration::ZERO,
            Ok(TripInfo::new(ProviderId::Google, 1, 1)),
        );
        let (osm, _) = StubProvider::new(
            ProviderId::Openstreetmap,
            Duration::ZERO,
            Ok(TripInfo::new(ProviderId::Openstreetmap, 1, 1)),
        );

        let service = service(cache, vec![google, osm]);
        let availability = service.provider_availability().await;

        assert_eq!(
            availability,
            vec![
                (ProviderId::Google, true),
                (ProviderId::Openstreetmap, true)
            ]
        );
    }
}
