mod support;

use chrono::{Duration, Utc};
use predicates::str::contains;
use serde_json::json;

use support::TestHome;

fn seed_with_trash(home: &TestHome, trash_ages: &[Duration]) {
    let now = Utc::now();
    let mut tasks = vec![json!({
        "id": 0,
        "title": "Active",
        "description": "stays",
        "date": now.to_rfc3339(),
        "is_deleted": false
    })];

    for (i, age) in trash_ages.iter().enumerate() {
        tasks.push(json!({
            "id": i + 1,
            "title": format!("Trash {i}"),
            "description": "d",
            "date": now.to_rfc3339(),
            "is_deleted": true,
            "deleted_at": (now - *age).to_rfc3339()
        }));
    }

    let book = json!({ "size": 1, "tasks": tasks });
    home.write_data(&serde_json::to_string_pretty(&book).unwrap())
        .unwrap();
}

#[test]
fn startup_janitor_purges_expired_trash() {
    let home = TestHome::new();
    home.write_config("[trash]\nretention_days = 1\n").unwrap();
    seed_with_trash(&home, &[Duration::days(2), Duration::hours(1)]);

    // Any command triggers the janitor pass first.
    home.cmd().args(["view"]).assert().success();

    let book = home.read_book();
    assert_eq!(book.tasks.len(), 2);
    assert_eq!(book.tasks[0].title, "Active");
    assert_eq!(book.tasks[1].title, "Trash 1");
    assert!(book.tasks[1].is_deleted);
}

#[test]
fn janitor_keeps_trash_inside_the_window() {
    let home = TestHome::new();
    seed_with_trash(&home, &[Duration::hours(3)]);

    // Default retention is 30 days.
    home.cmd().args(["view"]).assert().success();

    assert_eq!(home.read_book().tasks.len(), 2);
}

#[test]
fn purge_command_reports_what_it_dropped() {
    let home = TestHome::new();
    seed_with_trash(&home, &[Duration::hours(2), Duration::minutes(30)]);

    home.cmd()
        .args(["purge", "--retention-days", "0"])
        .assert()
        .success()
        .stdout(contains("Purged: 2"));

    let book = home.read_book();
    assert_eq!(book.tasks.len(), 1);
    assert_eq!(book.tasks[0].title, "Active");
}

#[test]
fn purge_shifts_later_indices_down() {
    let home = TestHome::new();
    home.write_config("[trash]\nretention_days = 1\n").unwrap();
    // [Active, SoftDeleted(2 days), SoftDeleted(30m)]: only the old one goes.
    seed_with_trash(&home, &[Duration::days(2), Duration::minutes(30)]);

    home.cmd().args(["view"]).assert().success();

    let book = home.read_book();
    assert_eq!(book.tasks.len(), 2);
    // The surviving trash record moved from slot 2 to slot 1; after a
    // restore it is addressable at its new position.
    home.cmd()
        .args(["restore", "--index", "1"])
        .assert()
        .success();
    assert_eq!(home.read_book().size, 2);
}

#[test]
fn janitor_failure_is_logged_not_propagated() {
    let home = TestHome::new();
    home.write_data("{corrupt").unwrap();

    // The janitor hits the corrupt file first and only warns; the exit
    // code and error come from the command's own attempt to read it.
    home.cmd()
        .args(["view"])
        .env("RUST_LOG", "warn")
        .assert()
        .failure()
        .code(4)
        .stderr(contains("startup cleanup failed"))
        .stderr(contains("error: Decoding"));
}

#[test]
fn deleted_record_without_timestamp_survives_purge() {
    let home = TestHome::new();
    let book = json!({
        "size": 0,
        "tasks": [{
            "id": 0,
            "title": "Odd",
            "description": "deleted but no deleted_at",
            "date": Utc::now().to_rfc3339(),
            "is_deleted": true
        }]
    });
    home.write_data(&serde_json::to_string_pretty(&book).unwrap())
        .unwrap();

    home.cmd()
        .args(["purge", "--retention-days", "0"])
        .assert()
        .success()
        .stdout(contains("Purged: 0"));

    assert_eq!(home.read_book().tasks.len(), 1);
}
