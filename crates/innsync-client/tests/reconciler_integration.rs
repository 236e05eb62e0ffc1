//! End-to-end reconciler tests over the on-disk SQLite store.
//!
//! The unit tests in `cache::tests` cover the policy against the in-memory
//! fake; these exercise the full stack a device would run: SQLite store,
//! envelope codec, reconciler, across process "restarts" (store reopen).

use std::sync::Mutex;

use chrono::{Duration, Utc};
use serde_json::Map;

use innsync_client::api::{ApiError, BookingPage, BookingSource};
use innsync_client::store::{SqliteStore, load_envelope};
use innsync_client::{BookingCache, CachedBookings};
use innsync_core::FilterOptions;
use innsync_core::booking::{Booking, BookingStatus};
use innsync_core::config::CacheConfig;

fn init_logging() {
    // First test to run installs the subscriber; the rest are no-ops.
    let _ = innsync_core::tracing_init::init_tracing("innsync_client=debug", false);
}

fn booking(id: &str, days_from_now: i64, status: BookingStatus) -> Booking {
    let check_in = Utc::now() + Duration::days(days_from_now);
    Booking {
        id: id.to_string(),
        status,
        check_in,
        check_out: check_in + Duration::days(2),
        guests: 2,
        room: None,
        customer: None,
        payment: None,
        extra: Map::new(),
    }
}

/// Source returning a queue of booking lists, one per call.
struct QueueSource {
    lists: Mutex<Vec<Vec<Booking>>>,
}

impl QueueSource {
    fn new(mut lists: Vec<Vec<Booking>>) -> Self {
        lists.reverse();
        Self {
            lists: Mutex::new(lists),
        }
    }
}

impl BookingSource for QueueSource {
    async fn list_hotel_bookings(
        &self,
        _hotel_id: &str,
        _filters: &FilterOptions,
        _token: Option<&str>,
    ) -> Result<BookingPage, ApiError> {
        let data = self.lists.lock().unwrap().pop().unwrap_or_default();
        Ok(BookingPage {
            data,
            page: Some(1),
            limit: Some(10),
            total: None,
            total_pages: None,
        })
    }
}

async fn fetch(
    cache: &BookingCache<SqliteStore>,
    source: &QueueSource,
    hotel_id: &str,
) -> CachedBookings {
    cache
        .get_filtered_hotel_bookings(source, hotel_id, &FilterOptions::default(), Some("token"))
        .await
        .unwrap()
}

#[tokio::test]
async fn snapshot_survives_restart_and_reconciles() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("device.db");

    let first = vec![
        booking("b1", 1, BookingStatus::Pending),
        booking("b2", 4, BookingStatus::Confirmed),
    ];

    // First run: empty store, network populates it.
    {
        let store = SqliteStore::open(&path).await.unwrap();
        let cache = BookingCache::new(store, &CacheConfig::default());
        let source = QueueSource::new(vec![first.clone()]);

        let result = fetch(&cache, &source, "H1").await;
        assert!(!result.is_from_cache);
        assert_eq!(result.data.len(), 2);
    }

    // Second run: same data from the network reads as a cache hit; then a
    // status flip on b1 forces a rewrite.
    {
        let store = SqliteStore::open(&path).await.unwrap();
        let cache = BookingCache::new(store, &CacheConfig::default());

        let mut flipped = first.clone();
        flipped[0].status = BookingStatus::Confirmed;
        let source = QueueSource::new(vec![first, flipped]);

        let hit = fetch(&cache, &source, "H1").await;
        assert!(hit.is_from_cache);

        let miss = fetch(&cache, &source, "H1").await;
        assert!(!miss.is_from_cache);
        assert_eq!(miss.data[0].status, BookingStatus::Confirmed);

        let stored = load_envelope(cache.store(), "H1").await.unwrap().unwrap();
        assert_eq!(stored.bookings[0].status, BookingStatus::Confirmed);
    }
}

#[tokio::test]
async fn hotels_do_not_share_envelopes() {
    init_logging();
    let store = SqliteStore::open_in_memory().await.unwrap();
    let cache = BookingCache::new(store, &CacheConfig::default());

    let source_a = QueueSource::new(vec![vec![booking("a1", 1, BookingStatus::Confirmed)]]);
    let source_b = QueueSource::new(vec![vec![booking("b1", 2, BookingStatus::Pending)]]);

    fetch(&cache, &source_a, "H1").await;
    fetch(&cache, &source_b, "H2").await;

    let h1 = load_envelope(cache.store(), "H1").await.unwrap().unwrap();
    let h2 = load_envelope(cache.store(), "H2").await.unwrap().unwrap();
    assert_eq!(h1.bookings[0].id, "a1");
    assert_eq!(h2.bookings[0].id, "b1");
}

#[tokio::test]
async fn read_path_prune_is_written_back_on_disk() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("device.db");

    // Seed a snapshot containing a booking that has since left the
    // retention window, bypassing the reconciler.
    let stale = booking("stale", -12, BookingStatus::Completed);
    let fresh = booking("fresh", 1, BookingStatus::Confirmed);
    {
        let store = SqliteStore::open(&path).await.unwrap();
        let envelope = innsync_core::booking::CacheEnvelope {
            last_updated: Utc::now() - Duration::days(12),
            bookings: vec![stale, fresh.clone()],
        };
        innsync_client::store::store_envelope(&store, "H1", &envelope)
            .await
            .unwrap();
    }

    // The network returns only the fresh booking. The read-path prune drops
    // the stale record before the diff, so the lists match and the pruned
    // snapshot is what ends up on disk.
    let store = SqliteStore::open(&path).await.unwrap();
    let cache = BookingCache::new(store, &CacheConfig::default());
    let source = QueueSource::new(vec![vec![fresh]]);
    let result = fetch(&cache, &source, "H1").await;
    assert!(result.is_from_cache);

    let stored = load_envelope(cache.store(), "H1").await.unwrap().unwrap();
    assert_eq!(stored.bookings.len(), 1);
    assert_eq!(stored.bookings[0].id, "fresh");
}
