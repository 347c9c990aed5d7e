mod support;

use predicates::str::contains;

use support::TestHome;

fn seed(home: &TestHome, n: usize) {
    for i in 0..n {
        home.cmd()
            .args(["add", "--title", &format!("Task {i}"), "--desc", "d"])
            .assert()
            .success();
    }
}

#[test]
fn delete_soft_deletes_and_view_hides_it() {
    let home = TestHome::new();
    seed(&home, 1);

    home.cmd()
        .args(["delete", "--index", "0"])
        .assert()
        .success()
        .stdout(contains("Deleted task"));

    // Hidden from view.
    home.cmd()
        .args(["view"])
        .assert()
        .success()
        .stdout(contains("Tasks: 0"));

    // Raw record still there, flagged and timestamped.
    let book = home.read_book();
    assert_eq!(book.size, 0);
    assert_eq!(book.tasks.len(), 1);
    assert!(book.tasks[0].is_deleted);
    assert!(book.tasks[0].deleted_at.is_some());
}

#[test]
fn delete_out_of_bounds_fails() {
    let home = TestHome::new();
    seed(&home, 2);

    home.cmd()
        .args(["delete", "--index", "2"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("out of bounds"));

    home.cmd()
        .args(["delete", "--index", "-3"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("negative"));
}

#[test]
fn restore_round_trip() {
    let home = TestHome::new();
    seed(&home, 2);

    home.cmd().args(["delete", "--index", "1"]).assert().success();
    home.cmd()
        .args(["restore", "--index", "1"])
        .assert()
        .success()
        .stdout(contains("Task restored"));

    let book = home.read_book();
    assert_eq!(book.size, 2);
    assert!(!book.tasks[1].is_deleted);
    assert!(book.tasks[1].deleted_at.is_none());
}

#[test]
fn restore_of_active_task_is_a_silent_no_op() {
    let home = TestHome::new();
    seed(&home, 1);

    home.cmd()
        .args(["restore", "--index", "0"])
        .assert()
        .success()
        .stdout(contains("nothing to do"));

    assert_eq!(home.read_book().size, 1);
}

#[test]
fn restore_all_empties_the_trash() {
    let home = TestHome::new();
    seed(&home, 3);

    home.cmd().args(["delete", "--index", "0"]).assert().success();
    home.cmd().args(["delete", "--index", "2"]).assert().success();

    home.cmd()
        .args(["restore", "--all"])
        .assert()
        .success()
        .stdout(contains("Restored: 2"));

    let book = home.read_book();
    assert_eq!(book.size, 3);
    assert!(book.tasks.iter().all(|t| !t.is_deleted));
}

#[test]
fn restore_requires_index_or_all() {
    let home = TestHome::new();
    seed(&home, 1);

    home.cmd()
        .args(["restore"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("--index or --all"));

    // clap rejects the combination outright.
    home.cmd()
        .args(["restore", "--all", "--index", "0"])
        .assert()
        .failure();
}

#[test]
fn restore_out_of_bounds_fails() {
    let home = TestHome::new();
    seed(&home, 1);

    home.cmd()
        .args(["restore", "--index", "1"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("out of bounds"));
}
