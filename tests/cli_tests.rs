use std::fs;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use timeclock::config::Config;
use timeclock::core::SessionTracker;
use timeclock::db::SqliteKv;
use timeclock::models::{PunchSource, PunchType};

mod common;
use common::{setup_test_db, tc, temp_out};

fn init(db: &str) {
    tc().args(["--db", db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));
}

fn first_shift_id(db: &str) -> String {
    let tracker = SessionTracker::load(SqliteKv::open(db).unwrap()).unwrap();
    tracker.store().list_shifts()[0].id.clone()
}

#[test]
fn clock_cycle_through_cli() {
    let db = setup_test_db("cli_cycle");
    init(&db);

    tc().args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(contains("Not clocked in"));

    tc().args(["--db", &db, "in"])
        .assert()
        .success()
        .stdout(contains("Clocked in at"));

    tc().args(["--db", &db, "in"])
        .assert()
        .success()
        .stdout(contains("Already clocked in"));

    tc().args(["--db", &db, "break-start"])
        .assert()
        .success()
        .stdout(contains("Break started"));

    tc().args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(contains("on break").and(contains("Clocked in since")));

    tc().args(["--db", &db, "break-end"])
        .assert()
        .success()
        .stdout(contains("Break ended"));

    tc().args(["--db", &db, "out"])
        .assert()
        .success()
        .stdout(contains("Clocked out at"));

    tc().args(["--db", &db, "out"])
        .assert()
        .success()
        .stdout(contains("Not clocked in"));

    tc().args(["--db", &db, "today"])
        .assert()
        .success()
        .stdout(contains("Total:").and(contains(first_shift_id(&db))));

    let tracker = SessionTracker::load(SqliteKv::open(&db).unwrap()).unwrap();
    assert!(tracker.active().is_none());
    assert_eq!(tracker.store().list_shifts().len(), 1);
    assert_eq!(tracker.store().punches().len(), 4);
}

#[test]
fn idle_commands_are_noops() {
    let db = setup_test_db("cli_idle");
    init(&db);

    for cmd in ["out", "break-start", "break-end"] {
        tc().args(["--db", &db, cmd])
            .assert()
            .success()
            .stdout(contains("nothing to do"));
    }

    let tracker = SessionTracker::load(SqliteKv::open(&db).unwrap()).unwrap();
    assert!(tracker.store().list_shifts().is_empty());
    assert!(tracker.store().punches().is_empty());
}

#[test]
fn edit_requires_comment() {
    let db = setup_test_db("cli_edit_comment");
    init(&db);
    tc().args(["--db", &db, "in"]).assert().success();
    tc().args(["--db", &db, "out"]).assert().success();
    let id = first_shift_id(&db);

    tc().args(["--db", &db, "edit", &id, "--start", "08:00", "--comment", "   "])
        .assert()
        .failure()
        .stderr(contains("comment"));

    let tracker = SessionTracker::load(SqliteKv::open(&db).unwrap()).unwrap();
    assert!(tracker.store().punches().iter().all(|p| p.kind != PunchType::Edit));
}

#[test]
fn edit_overnight_and_list() {
    let db = setup_test_db("cli_edit_overnight");
    init(&db);
    tc().args(["--db", &db, "in"]).assert().success();
    tc().args(["--db", &db, "out"]).assert().success();
    let id = first_shift_id(&db);

    tc().args([
        "--db",
        &db,
        "edit",
        &id[..8],
        "--start",
        "22:00",
        "--end",
        "06:00",
        "--comment",
        "covered the night shift",
    ])
    .assert()
    .success()
    .stdout(contains("updated").and(contains("08:00:00")));

    tc().args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("MANUAL").and(contains("22:00:00")));

    tc().args(["--db", &db, "punches", "--shift", &id])
        .assert()
        .success()
        .stdout(contains("EDIT").and(contains("covered the night shift")));

    let tracker = SessionTracker::load(SqliteKv::open(&db).unwrap()).unwrap();
    let shift = &tracker.store().list_shifts()[0];
    assert!(shift.end_at > shift.start_at);
    assert_eq!(shift.duration_seconds(), 8 * 3600 - shift.break_seconds);
    assert_eq!(tracker.store().punches()[0].source, PunchSource::Manual);
}

#[test]
fn invalid_edit_time_fails() {
    let db = setup_test_db("cli_edit_time");
    init(&db);
    tc().args(["--db", &db, "in"]).assert().success();
    tc().args(["--db", &db, "out"]).assert().success();
    let id = first_shift_id(&db);

    tc().args(["--db", &db, "edit", &id, "--end", "25:99", "--comment", "x"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn delete_keeps_audit_trail() {
    let db = setup_test_db("cli_del");
    init(&db);
    tc().args(["--db", &db, "in"]).assert().success();
    tc().args(["--db", &db, "out"]).assert().success();
    let id = first_shift_id(&db);

    tc().args(["--db", &db, "edit", &id, "--comment", "double checked"])
        .assert()
        .success();

    tc().args(["--db", &db, "del", &id, "--force"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    tc().args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("No shifts stored"));

    tc().args(["--db", &db, "punches", "--shift", &id])
        .assert()
        .success()
        .stdout(contains("CLOCK_IN").and(contains("double checked")));

    tc().args(["--db", &db, "del", &id, "--force"])
        .assert()
        .failure()
        .stderr(contains("Shift not found"));
}

#[test]
fn internal_log_records_operations() {
    let db = setup_test_db("cli_log");
    init(&db);
    tc().args(["--db", &db, "in"]).assert().success();
    tc().args(["--db", &db, "out"]).assert().success();

    tc().args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("Internal log")
                .and(contains("clock_in"))
                .and(contains("clock_out"))
                .and(contains("migration_applied")),
        );
}

#[test]
fn backup_command_creates_copy() {
    let db = setup_test_db("cli_backup");
    init(&db);
    let out = temp_out("cli_backup", "sqlite");
    let out_str = out.to_string_lossy().to_string();

    tc().args([
        "--db",
        &db,
        "backup",
        "--file",
        &out_str,
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("Backup created"));

    assert!(out.exists());
}

#[test]
fn config_print_shows_database() {
    let db = setup_test_db("cli_config");

    tc().args(["--db", &db, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("database:").and(contains("refresh_interval_secs")));
}

#[test]
fn config_yaml_defaults() {
    let cfg = Config::from_yaml("database: /tmp/x.sqlite\n").unwrap();
    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.refresh_interval_secs, 1);
    assert_eq!(cfg.time_format, "%H:%M:%S");

    assert!(Config::from_yaml("refresh_interval_secs: [nope]").is_err());
}

#[test]
fn relative_db_is_the_same_file_for_init_and_clock() {
    let dir = std::env::temp_dir().join("cli_relative_db_dir");
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();

    tc().current_dir(&dir)
        .args(["--db", "work.sqlite", "--test", "init"])
        .assert()
        .success();
    tc().current_dir(&dir)
        .args(["--db", "work.sqlite", "in"])
        .assert()
        .success();
    tc().current_dir(&dir)
        .args(["--db", "work.sqlite", "out"])
        .assert()
        .success()
        .stdout(contains("Clocked out at"));

    let db = dir.join("work.sqlite");
    let tracker = SessionTracker::load(SqliteKv::open(&db.to_string_lossy()).unwrap()).unwrap();
    assert_eq!(tracker.store().list_shifts().len(), 1);
}

#[test]
fn migration_notice_only_on_init() {
    let db = setup_test_db("cli_migration_quiet");
    tc().args(["--db", &db, "in"])
        .assert()
        .success()
        .stdout(contains("Migration applied").not());

    let fresh = setup_test_db("cli_migration_init");
    tc().args(["--db", &fresh, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied"));
}

#[test]
fn backup_onto_database_fails_and_keeps_it() {
    let db = setup_test_db("cli_backup_self");
    init(&db);
    tc().args(["--db", &db, "in"]).assert().success();
    let before = fs::read(&db).unwrap();

    tc().args(["--db", &db, "backup", "--file", &db, "--force"])
        .assert()
        .failure()
        .stderr(contains("onto itself"));

    assert_eq!(fs::read(&db).unwrap(), before);
}
