use chrono::NaiveTime;
use timeclock::core::store::{ACTIVE_SESSION_KEY, PUNCHES_KEY, SHIFTS_KEY};
use timeclock::core::{SessionTracker, ShiftStore};
use timeclock::db::{KeyValueStore, MemoryKv, SqliteKv};
use timeclock::errors::AppError;
use timeclock::models::{ActiveSession, Punch, PunchSource, PunchType, Shift};
use timeclock::utils::time::MS_PER_DAY;

mod common;
use common::{at, setup_test_db};

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn shift(id: &str, start: i64, end: i64, break_seconds: u64) -> Shift {
    Shift {
        id: id.to_string(),
        start_at: start,
        end_at: end,
        break_seconds,
    }
}

fn store_with(shifts: Vec<Shift>) -> ShiftStore<MemoryKv> {
    let mut store = ShiftStore::load(MemoryKv::new()).unwrap();
    for s in shifts.into_iter().rev() {
        store.upsert_shift(s).unwrap();
    }
    store
}

#[test]
fn edit_rejects_blank_comment() {
    let original = shift("s1", at(2025, 6, 18, 9, 0, 0), at(2025, 6, 18, 17, 0, 0), 600);
    let mut store = store_with(vec![original.clone()]);

    for comment in ["", "   ", "\t\n"] {
        let err = store
            .edit_shift("s1", hm(8, 0), hm(16, 0), comment, at(2025, 6, 18, 18, 0, 0))
            .unwrap_err();
        assert!(matches!(err, AppError::MissingEditComment));
    }

    assert_eq!(store.list_shifts(), &[original]);
    assert!(store.punches().is_empty());
}

#[test]
fn edit_same_day_updates_times_and_records_manual_punch() {
    let mut store = store_with(vec![shift(
        "s1",
        at(2025, 6, 18, 9, 3, 27),
        at(2025, 6, 18, 17, 1, 2),
        600,
    )]);
    let now = at(2025, 6, 19, 8, 0, 0);

    let updated = store
        .edit_shift("s1", hm(8, 30), hm(16, 45), "  forgot to clock in  ", now)
        .unwrap();

    assert_eq!(updated.id, "s1");
    assert_eq!(updated.start_at, at(2025, 6, 18, 8, 30, 0));
    assert_eq!(updated.end_at, at(2025, 6, 18, 16, 45, 0));
    assert_eq!(updated.break_seconds, 600);
    assert_eq!(store.list_shifts(), &[updated]);

    let punch = &store.punches()[0];
    assert_eq!(punch.kind, PunchType::Edit);
    assert_eq!(punch.source, PunchSource::Manual);
    assert_eq!(punch.shift_id, "s1");
    assert_eq!(punch.at, now);
    assert_eq!(punch.comment.as_deref(), Some("forgot to clock in"));
}

#[test]
fn edit_end_before_start_means_overnight() {
    let mut store = store_with(vec![shift(
        "night",
        at(2025, 6, 18, 22, 0, 0),
        at(2025, 6, 18, 23, 0, 0),
        0,
    )]);

    let updated = store
        .edit_shift("night", hm(22, 0), hm(6, 0), "night shift", at(2025, 6, 19, 7, 0, 0))
        .unwrap();

    assert_eq!(updated.start_at, at(2025, 6, 18, 22, 0, 0));
    assert_eq!(updated.end_at, at(2025, 6, 18, 6, 0, 0) + MS_PER_DAY);
    assert!(updated.end_at > updated.start_at);
    assert_eq!(updated.duration_seconds(), 8 * 3600);
}

#[test]
fn edit_unknown_shift_fails() {
    let mut store = store_with(vec![]);
    let err = store
        .edit_shift("nope", hm(9, 0), hm(10, 0), "why", at(2025, 6, 18, 9, 0, 0))
        .unwrap_err();
    assert!(matches!(err, AppError::ShiftNotFound(_)));
    assert!(store.punches().is_empty());
}

#[test]
fn delete_keeps_punches() {
    let mut store = store_with(vec![
        shift("keep", at(2025, 6, 18, 13, 0, 0), at(2025, 6, 18, 14, 0, 0), 0),
        shift("gone", at(2025, 6, 18, 9, 0, 0), at(2025, 6, 18, 10, 0, 0), 0),
    ]);
    store
        .edit_shift("gone", hm(9, 0), hm(11, 0), "stayed late", at(2025, 6, 18, 12, 0, 0))
        .unwrap();

    assert!(store.delete_shift("gone").unwrap());
    assert!(!store.delete_shift("gone").unwrap());

    let ids: Vec<&str> = store.list_shifts().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["keep"]);

    let kept: Vec<&Punch> = store.punches_for("gone").collect();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].kind, PunchType::Edit);

    // also after a reload
    let reloaded = ShiftStore::load(store.into_kv()).unwrap();
    assert!(reloaded.find_shift("gone").is_none());
    assert_eq!(reloaded.punches_for("gone").count(), 1);
}

#[test]
fn upsert_replaces_in_place() {
    let mut store = store_with(vec![
        shift("a", 3_000_000, 4_000_000, 0),
        shift("b", 1_000_000, 2_000_000, 0),
    ]);

    store.upsert_shift(shift("b", 1_000_000, 2_500_000, 60)).unwrap();

    let ids: Vec<&str> = store.list_shifts().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(store.find_shift("b").unwrap().end_at, 2_500_000);
    assert_eq!(store.find_shift("b").unwrap().break_seconds, 60);
}

#[test]
fn resolve_shift_id_by_prefix() {
    let store = store_with(vec![
        shift("1750000000000-aaa", 0, 1_000, 0),
        shift("1750000000000-abb", 0, 1_000, 0),
        shift("1760000000000-ccc", 0, 1_000, 0),
    ]);

    assert_eq!(store.resolve_shift_id("176").unwrap(), "1760000000000-ccc");
    assert_eq!(
        store.resolve_shift_id("1750000000000-abb").unwrap(),
        "1750000000000-abb"
    );
    assert!(matches!(
        store.resolve_shift_id("1750000000000-a"),
        Err(AppError::ShiftNotFound(_))
    ));
    assert!(store.resolve_shift_id("9").is_err());
    assert!(store.resolve_shift_id("").is_err());
}

#[test]
fn malformed_snapshots_load_as_empty() {
    let mut kv = MemoryKv::new();
    kv.set(SHIFTS_KEY, "{not json").unwrap();
    kv.set(PUNCHES_KEY, "42").unwrap();
    kv.set(ACTIVE_SESSION_KEY, "[]").unwrap();

    let tracker = SessionTracker::load(kv).unwrap();
    assert!(tracker.active().is_none());
    assert!(tracker.store().list_shifts().is_empty());
    assert!(tracker.store().punches().is_empty());
}

#[test]
fn active_session_with_wrong_shape_is_dropped() {
    let cases = [
        r#"{"shiftId":1,"startAt":1000,"breakSeconds":0,"breakStartedAt":null}"#,
        r#"{"shiftId":"x","startAt":"soon","breakSeconds":0,"breakStartedAt":null}"#,
        r#"{"shiftId":"x","startAt":1000,"breakSeconds":0,"breakStartedAt":"now"}"#,
        // break started before the session
        r#"{"shiftId":"x","startAt":5000,"breakSeconds":0,"breakStartedAt":1000}"#,
        "null",
    ];

    for raw in cases {
        let mut kv = MemoryKv::new();
        kv.set(ACTIVE_SESSION_KEY, raw).unwrap();
        let store = ShiftStore::load(kv).unwrap();
        assert!(store.load_active_session().unwrap().is_none(), "{raw}");
    }
}

#[test]
fn stored_json_shape() {
    let mut kv = MemoryKv::new();
    kv.set(
        SHIFTS_KEY,
        r#"[{"id":"old","startAt":1000,"endAt":61000}]"#,
    )
    .unwrap();
    kv.set(
        ACTIVE_SESSION_KEY,
        r#"{"shiftId":"x","startAt":1000,"breakSeconds":30,"breakStartedAt":2000}"#,
    )
    .unwrap();

    let mut store = ShiftStore::load(kv).unwrap();
    // missing breakSeconds reads as zero
    assert_eq!(store.list_shifts()[0].break_seconds, 0);
    assert_eq!(store.list_shifts()[0].duration_seconds(), 60);
    assert_eq!(
        store.load_active_session().unwrap(),
        Some(ActiveSession {
            shift_id: "x".into(),
            start_at: 1000,
            break_seconds: 30,
            break_started_at: Some(2000),
        })
    );

    store
        .append_punch(Punch::auto("x", PunchType::BreakStart, 2000))
        .unwrap();
    let raw = store.kv().get(PUNCHES_KEY).unwrap().unwrap();
    assert!(raw.contains(r#""shiftId":"x""#));
    assert!(raw.contains(r#""type":"BREAK_START""#));
    assert!(raw.contains(r#""source":"AUTO""#));
    assert!(!raw.contains("comment"));
}

#[test]
fn save_load_round_trip_is_idempotent() {
    let mut tracker = SessionTracker::load(MemoryKv::new()).unwrap();
    tracker.clock_in(at(2025, 6, 17, 9, 0, 0)).unwrap();
    tracker.clock_out(at(2025, 6, 17, 17, 0, 0)).unwrap();
    tracker.clock_in(at(2025, 6, 18, 9, 0, 0)).unwrap();
    tracker.start_break(at(2025, 6, 18, 12, 0, 0)).unwrap();
    let id = tracker.store().list_shifts()[0].id.clone();
    tracker
        .store_mut()
        .edit_shift(&id, hm(8, 0), hm(16, 0), "badge reader down", at(2025, 6, 18, 8, 0, 0))
        .unwrap();

    let kv = tracker.into_store().into_kv();
    let first = SessionTracker::load(kv.clone()).unwrap();
    let kv_again = first.into_store().into_kv();
    let second = SessionTracker::load(kv_again).unwrap();
    let original = SessionTracker::load(kv).unwrap();

    assert_eq!(second.active(), original.active());
    assert_eq!(second.store().list_shifts(), original.store().list_shifts());
    assert_eq!(second.store().punches(), original.store().punches());
    assert_eq!(original.store().punches().len(), 5);
}

#[test]
fn sqlite_store_persists_across_reopen() {
    let db = setup_test_db("store_reopen");

    let shift_id = {
        let mut tracker = SessionTracker::load(SqliteKv::open(&db).unwrap()).unwrap();
        tracker.clock_in(at(2025, 6, 18, 9, 0, 0)).unwrap();
        tracker.clock_out(at(2025, 6, 18, 9, 30, 0)).unwrap().unwrap().id
    };

    let mut tracker = SessionTracker::load(SqliteKv::open(&db).unwrap()).unwrap();
    assert!(tracker.active().is_none());
    assert_eq!(tracker.store().list_shifts()[0].id, shift_id);
    assert_eq!(tracker.store().list_shifts()[0].duration_seconds(), 1800);
    assert_eq!(tracker.store().punches().len(), 2);

    // an active session is stored, and removed again at clock-out
    tracker.clock_in(at(2025, 6, 18, 10, 0, 0)).unwrap();
    assert!(tracker.store().kv().get(ACTIVE_SESSION_KEY).unwrap().is_some());
    tracker.clock_out(at(2025, 6, 18, 11, 0, 0)).unwrap();
    assert!(tracker.store().kv().get(ACTIVE_SESSION_KEY).unwrap().is_none());
}

#[test]
fn sqlite_kv_basic_operations() {
    let db = setup_test_db("kv_basic");
    let mut kv = SqliteKv::open(&db).unwrap();

    assert_eq!(kv.get("k").unwrap(), None);
    kv.set("k", "one").unwrap();
    kv.set("k", "two").unwrap();
    assert_eq!(kv.get("k").unwrap().as_deref(), Some("two"));
    kv.delete("k").unwrap();
    kv.delete("k").unwrap();
    assert_eq!(kv.get("k").unwrap(), None);
}
