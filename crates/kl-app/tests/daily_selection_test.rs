//! Daily selection engine tests
//!
//! Exercises the full orchestration (normalize → override → rotation) against
//! in-memory ports so every property of the selection contract can be pinned
//! down without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use kl_app::usecases::daily::GetDailyWord;
use kl_core::config::AppConfig;
use kl_core::daily::{DailyOverride, DayKey, SelectionError, SelectionSource, OVERRIDE_INDEX};
use kl_core::ids::WordId;
use kl_core::ports::{
    CatalogError, ClockPort, OverrideStoreError, OverrideStorePort, WordCatalogPort,
};
use kl_core::words::{NewWordEntry, WordEntry};

/// In-memory catalog keyed by word id.
#[derive(Default)]
struct TestCatalog {
    entries: Mutex<HashMap<i64, WordEntry>>,
}

impl TestCatalog {
    fn with_words(words: &[(i64, &str)]) -> Self {
        let catalog = Self::default();
        {
            let mut entries = catalog.entries.lock().unwrap();
            for (id, word) in words {
                entries.insert(
                    *id,
                    WordEntry {
                        id: WordId::new(*id),
                        word: word.to_string(),
                        definition: format!("definition of {word}"),
                        meta: None,
                    },
                );
            }
        }
        catalog
    }

    fn add(&self, id: i64, word: &str) {
        self.entries.lock().unwrap().insert(
            id,
            WordEntry {
                id: WordId::new(id),
                word: word.to_string(),
                definition: format!("definition of {word}"),
                meta: None,
            },
        );
    }
}

#[async_trait]
impl WordCatalogPort for TestCatalog {
    async fn list_ids(&self) -> Result<Vec<WordId>, CatalogError> {
        let mut ids: Vec<i64> = self.entries.lock().unwrap().keys().copied().collect();
        ids.sort_unstable();
        Ok(ids.into_iter().map(WordId::new).collect())
    }

    async fn find_by_id(&self, id: &WordId) -> Result<Option<WordEntry>, CatalogError> {
        Ok(self.entries.lock().unwrap().get(&id.value()).cloned())
    }

    async fn insert_many(&self, entries: Vec<NewWordEntry>) -> Result<usize, CatalogError> {
        let mut map = self.entries.lock().unwrap();
        let mut next_id = map.keys().max().copied().unwrap_or(0) + 1;
        let count = entries.len();
        for entry in entries {
            map.insert(
                next_id,
                WordEntry {
                    id: WordId::new(next_id),
                    word: entry.word,
                    definition: entry.definition,
                    meta: entry.meta,
                },
            );
            next_id += 1;
        }
        Ok(count)
    }
}

#[derive(Default)]
struct TestOverrides {
    pins: Mutex<HashMap<String, i64>>,
}

impl TestOverrides {
    fn pin(&self, day: &str, word_id: i64) {
        self.pins.lock().unwrap().insert(day.to_string(), word_id);
    }
}

#[async_trait]
impl OverrideStorePort for TestOverrides {
    async fn find_for_day(
        &self,
        day: &DayKey,
    ) -> Result<Option<DailyOverride>, OverrideStoreError> {
        Ok(self
            .pins
            .lock()
            .unwrap()
            .get(&day.to_string())
            .map(|id| DailyOverride {
                day: *day,
                word_id: WordId::new(*id),
            }))
    }

    async fn set(&self, day: &DayKey, word_id: &WordId) -> Result<(), OverrideStoreError> {
        self.pins
            .lock()
            .unwrap()
            .insert(day.to_string(), word_id.value());
        Ok(())
    }

    async fn clear(&self, day: &DayKey) -> Result<bool, OverrideStoreError> {
        Ok(self.pins.lock().unwrap().remove(&day.to_string()).is_some())
    }
}

/// Clock frozen at a fixed UTC instant.
struct FixedClock(DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn engine_with(
    catalog: Arc<TestCatalog>,
    overrides: Arc<TestOverrides>,
    now_utc: DateTime<Utc>,
) -> GetDailyWord {
    GetDailyWord::new(
        catalog,
        overrides,
        Arc::new(FixedClock(now_utc)),
        &AppConfig::default(),
    )
}

fn noon_utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

/// Five words with ids 1..=5; default epoch 2025-01-01.
fn five_word_engine() -> GetDailyWord {
    let catalog = Arc::new(TestCatalog::with_words(&[
        (1, "سلام"),
        (2, "كتاب"),
        (3, "قمر"),
        (4, "شمس"),
        (5, "بحر"),
    ]));
    engine_with(catalog, Arc::new(TestOverrides::default()), noon_utc(2025, 1, 1))
}

#[tokio::test]
async fn epoch_day_maps_to_first_word() {
    let selection = five_word_engine()
        .execute(Some("2025-01-01"))
        .await
        .expect("selection");
    assert_eq!(selection.index, 0);
    assert_eq!(selection.entry.id, WordId::new(1));
    assert_eq!(selection.source, SelectionSource::PrimaryCatalog);
}

#[tokio::test]
async fn rotation_wraps_after_full_cycle() {
    let selection = five_word_engine()
        .execute(Some("2025-01-06"))
        .await
        .expect("selection");
    assert_eq!(selection.index, 0);
    assert_eq!(selection.entry.id, WordId::new(1));
}

#[tokio::test]
async fn day_before_epoch_normalizes_to_tail() {
    let selection = five_word_engine()
        .execute(Some("2024-12-31"))
        .await
        .expect("selection");
    assert_eq!(selection.index, 4);
    assert_eq!(selection.entry.id, WordId::new(5));
}

#[tokio::test]
async fn repeated_calls_are_deterministic() {
    let engine = five_word_engine();
    let first = engine.execute(Some("2025-02-14")).await.expect("selection");
    for _ in 0..5 {
        let again = engine.execute(Some("2025-02-14")).await.expect("selection");
        assert_eq!(again, first);
    }
}

#[tokio::test]
async fn index_stays_in_range_across_many_days() {
    let engine = five_word_engine();
    for day in 1..=28 {
        let date = format!("2024-11-{day:02}");
        let selection = engine.execute(Some(&date)).await.expect("selection");
        assert!((0..5).contains(&selection.index), "{date}");
    }
}

#[tokio::test]
async fn missing_date_uses_reference_offset_today() {
    // 22:30 UTC on Jan 1 is already Jan 2 in the +03:00 reference zone.
    let catalog = Arc::new(TestCatalog::with_words(&[(1, "سلام"), (2, "كتاب")]));
    let engine = engine_with(
        catalog,
        Arc::new(TestOverrides::default()),
        Utc.with_ymd_and_hms(2025, 1, 1, 22, 30, 0).unwrap(),
    );
    let selection = engine.execute(None).await.expect("selection");
    assert_eq!(selection.day.to_string(), "2025-01-02");
    assert_eq!(selection.index, 1);
}

#[tokio::test]
async fn malformed_date_is_a_typed_error() {
    let engine = five_word_engine();
    for input in ["2025-02-30", "yesterday", "2025/01/01"] {
        assert!(matches!(
            engine.execute(Some(input)).await,
            Err(SelectionError::InvalidDate { .. })
        ));
    }
}

#[tokio::test]
async fn override_wins_with_sentinel_index() {
    let catalog = Arc::new(TestCatalog::with_words(&[
        (1, "سلام"),
        (2, "كتاب"),
        (3, "قمر"),
        (4, "شمس"),
        (5, "بحر"),
    ]));
    let overrides = Arc::new(TestOverrides::default());
    // Rotation would pick a different id for 2025-03-10; the pin wins.
    overrides.pin("2025-03-10", 3);
    let engine = engine_with(Arc::clone(&catalog), overrides, noon_utc(2025, 1, 1));

    let selection = engine.execute(Some("2025-03-10")).await.expect("selection");
    assert_eq!(selection.index, OVERRIDE_INDEX);
    assert_eq!(selection.entry.id, WordId::new(3));
    assert_eq!(selection.source, SelectionSource::Override);

    // Neighboring days still rotate.
    let next_day = engine.execute(Some("2025-03-11")).await.expect("selection");
    assert_eq!(next_day.source, SelectionSource::PrimaryCatalog);
    assert!(next_day.index >= 0);
}

#[tokio::test]
async fn dangling_override_is_surfaced_not_swallowed() {
    let catalog = Arc::new(TestCatalog::with_words(&[(1, "سلام")]));
    let overrides = Arc::new(TestOverrides::default());
    overrides.pin("2025-03-10", 99);
    let engine = engine_with(catalog, overrides, noon_utc(2025, 1, 1));

    match engine.execute(Some("2025-03-10")).await {
        Err(SelectionError::DanglingOverride { day, word_id }) => {
            assert_eq!(day.to_string(), "2025-03-10");
            assert_eq!(word_id, WordId::new(99));
        }
        other => panic!("expected DanglingOverride, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_catalog_switches_to_fallback() {
    let catalog = Arc::new(TestCatalog::default());
    let engine = engine_with(
        Arc::clone(&catalog),
        Arc::new(TestOverrides::default()),
        noon_utc(2025, 1, 1),
    );

    let selection = engine.execute(Some("2025-01-01")).await.expect("selection");
    assert_eq!(selection.source, SelectionSource::Fallback);
    assert_eq!(selection.index, 0);
    assert!(!selection.word().is_empty());
}

#[tokio::test]
async fn catalog_gaining_entries_switches_back_without_restart() {
    let catalog = Arc::new(TestCatalog::default());
    let engine = engine_with(
        Arc::clone(&catalog),
        Arc::new(TestOverrides::default()),
        noon_utc(2025, 1, 1),
    );

    let before = engine.execute(Some("2025-01-03")).await.expect("selection");
    assert_eq!(before.source, SelectionSource::Fallback);

    catalog.add(10, "نهر");
    let after = engine.execute(Some("2025-01-03")).await.expect("selection");
    assert_eq!(after.source, SelectionSource::PrimaryCatalog);
    assert_eq!(after.index, 0);
    assert_eq!(after.entry.id, WordId::new(10));
}

#[tokio::test]
async fn both_sources_empty_is_a_typed_error() {
    let engine = engine_with(
        Arc::new(TestCatalog::default()),
        Arc::new(TestOverrides::default()),
        noon_utc(2025, 1, 1),
    )
    .with_fallback(Vec::new());

    assert!(matches!(
        engine.execute(Some("2025-01-01")).await,
        Err(SelectionError::EmptyCatalog)
    ));
}

#[tokio::test]
async fn fallback_rotation_supports_pre_epoch_dates() {
    let engine = engine_with(
        Arc::new(TestCatalog::default()),
        Arc::new(TestOverrides::default()),
        noon_utc(2025, 1, 1),
    )
    .with_fallback(vec![
        WordEntry {
            id: WordId::new(1),
            word: "أ".to_string(),
            definition: "أول".to_string(),
            meta: None,
        },
        WordEntry {
            id: WordId::new(2),
            word: "ب".to_string(),
            definition: "ثان".to_string(),
            meta: None,
        },
        WordEntry {
            id: WordId::new(3),
            word: "ج".to_string(),
            definition: "ثالث".to_string(),
            meta: None,
        },
    ]);

    let selection = engine.execute(Some("2024-12-31")).await.expect("selection");
    assert_eq!(selection.source, SelectionSource::Fallback);
    assert_eq!(selection.index, 2);
    assert_eq!(selection.word(), "ج");
}

#[tokio::test]
async fn inserting_mid_sequence_does_not_shift_existing_days() {
    // ids 1, 2, 4, 5: the gap at 3 is about to be filled
    let catalog = Arc::new(TestCatalog::with_words(&[
        (1, "سلام"),
        (2, "كتاب"),
        (4, "شمس"),
        (5, "بحر"),
    ]));
    let engine = engine_with(
        Arc::clone(&catalog),
        Arc::new(TestOverrides::default()),
        noon_utc(2025, 1, 1),
    );

    // Size 4: epoch day picks position 0 (id 1), epoch+1 picks position 1 (id 2).
    let before = engine.execute(Some("2025-01-02")).await.expect("selection");
    assert_eq!(before.entry.id, WordId::new(2));

    // Filling the id-3 gap grows the cycle (size 5) but positions 0 and 1
    // still resolve to the same leading ids.
    catalog.add(3, "قمر");
    let after = engine.execute(Some("2025-01-02")).await.expect("selection");
    assert_eq!(after.entry.id, WordId::new(2));
}
