mod support;

use predicates::str::contains;
use serde_json::Value;

use support::TestHome;

#[test]
fn add_creates_the_file_and_first_task() {
    let home = TestHome::new();

    home.cmd()
        .args(["add", "--title", "New Task", "--desc", "A description"])
        .assert()
        .success()
        .stdout(contains("Added new task"))
        .stdout(contains("New Task"));

    let book = home.read_book();
    assert_eq!(book.size, 1);
    assert_eq!(book.tasks.len(), 1);
    assert_eq!(book.tasks[0].title, "New Task");
    assert_eq!(book.tasks[0].description, "A description");
    assert!(!book.tasks[0].is_deleted);
    assert!(book.tasks[0].deleted_at.is_none());
}

#[test]
fn sequential_adds_keep_insertion_order() {
    let home = TestHome::new();

    for i in 0..4 {
        home.cmd()
            .args(["add", "--title", &format!("Task {i}"), "--desc", "d"])
            .assert()
            .success();
    }

    let book = home.read_book();
    assert_eq!(book.size, 4);
    let titles: Vec<_> = book.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Task 0", "Task 1", "Task 2", "Task 3"]);

    let ids: Vec<_> = book.tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn add_supports_short_flags() {
    let home = TestHome::new();

    home.cmd()
        .args(["add", "-t", "Short", "-d", "flags"])
        .assert()
        .success();

    assert_eq!(home.read_book().tasks[0].title, "Short");
}

#[test]
fn add_requires_title_and_desc() {
    let home = TestHome::new();

    home.cmd()
        .args(["add", "--title", "only a title"])
        .assert()
        .failure();

    home.cmd()
        .args(["add", "--title", "", "--desc", "x"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("non-empty"));
}

#[test]
fn add_json_envelope() {
    let home = TestHome::new();

    let stdout = home
        .cmd()
        .args(["add", "--title", "Json", "--desc", "d", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&stdout).expect("json output");
    assert_eq!(value["schema_version"], "taski.v1");
    assert_eq!(value["command"], "add");
    assert_eq!(value["status"], "success");
    assert_eq!(value["data"]["title"], "Json");
    assert_eq!(value["data"]["index"], 0);
}

#[test]
fn quiet_suppresses_human_output() {
    let home = TestHome::new();

    home.cmd()
        .args(["add", "--title", "Quiet", "--desc", "d", "--quiet"])
        .assert()
        .success()
        .stdout("");
}
