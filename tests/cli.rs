use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A jot invocation pinned to a throwaway home: store paths come from the
/// environment and nothing leaks from the developer's real config.
fn jot(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jot").unwrap();
    cmd.env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("XDG_DATA_HOME", dir.path().join("data"))
        .env("JOT_PATH", dir.path().join("notes"))
        .env("JOT_CATEGORIES", dir.path().join("categories"))
        .env("NO_COLOR", "1");
    cmd
}

fn add(dir: &TempDir, content: &str) {
    jot(dir).args(["add", content]).assert().success();
}

fn add_dated(dir: &TempDir, content: &str, date: &str) {
    jot(dir).args(["add", content, date]).assert().success();
}

fn list_stdout(dir: &TempDir) -> String {
    let output = jot(dir).arg("list").output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn a_fresh_note_gets_id_one_and_todays_date() {
    let dir = TempDir::new().unwrap();
    add(&dir, "buy milk");

    let expected = format!("1\tUndone\t{}\tbuy milk", jot::date::today());
    jot(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn ids_follow_append_order() {
    let dir = TempDir::new().unwrap();
    for content in ["one", "two", "three"] {
        add(&dir, content);
    }

    let stdout = list_stdout(&dir);
    let ids: Vec<&str> = stdout
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn the_store_is_plain_tab_separated_text() {
    let dir = TempDir::new().unwrap();
    add_dated(&dir, "buy milk", "2014-11-01");

    let raw = fs::read_to_string(dir.path().join("notes")).unwrap();
    assert_eq!(raw, "1\tUndone\t2014-11-01\tbuy milk\n");
}

#[test]
fn running_without_a_subcommand_lists() {
    let dir = TempDir::new().unwrap();
    add(&dir, "hello");
    jot(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"));
}

#[test]
fn a_bad_date_is_malformed_input() {
    let dir = TempDir::new().unwrap();
    jot(&dir)
        .args(["add", "x", "2014-13-01"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid"));
    assert!(!dir.path().join("notes").exists());
}

#[test]
fn latest_two_of_five() {
    let dir = TempDir::new().unwrap();
    for content in ["a", "b", "c", "d", "e"] {
        add(&dir, content);
    }

    let output = jot(&dir).args(["latest", "2"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(ids, vec!["4", "5"]);
}

#[test]
fn latest_with_a_negative_count_lists_everything() {
    let dir = TempDir::new().unwrap();
    add(&dir, "a");
    add(&dir, "b");

    let output = jot(&dir).args(["latest", "-5"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 2);
}

#[test]
fn delete_removes_exactly_one_note() {
    let dir = TempDir::new().unwrap();
    for content in ["a", "b", "c"] {
        add(&dir, content);
    }

    jot(&dir).args(["delete", "2"]).assert().success();

    let stdout = list_stdout(&dir);
    let ids: Vec<&str> = stdout
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn deleting_the_same_note_twice_is_not_found() {
    let dir = TempDir::new().unwrap();
    for content in ["a", "b", "c"] {
        add(&dir, content);
    }
    jot(&dir).args(["delete", "2"]).assert().success();

    let before = fs::read_to_string(dir.path().join("notes")).unwrap();
    jot(&dir)
        .args(["delete", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
    let after = fs::read_to_string(dir.path().join("notes")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn delete_all_with_yes_drops_the_store_file() {
    let dir = TempDir::new().unwrap();
    add(&dir, "doomed");

    jot(&dir).args(["delete", "--all", "--yes"]).assert().success();
    assert!(!dir.path().join("notes").exists());
    assert_eq!(list_stdout(&dir), "");
}

#[test]
fn delete_all_respects_a_declined_prompt() {
    let dir = TempDir::new().unwrap();
    add(&dir, "survivor");

    jot(&dir)
        .args(["delete", "--all"])
        .write_stdin("n\n")
        .assert()
        .success();
    assert!(dir.path().join("notes").exists());
}

#[test]
fn delete_all_prompt_accepts_y() {
    let dir = TempDir::new().unwrap();
    add(&dir, "doomed");

    jot(&dir)
        .args(["delete", "--all"])
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(!dir.path().join("notes").exists());
}

#[test]
fn the_confirm_delete_config_flag_skips_the_prompt() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config").join("jot");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        r#"{ "confirm_delete": false }"#,
    )
    .unwrap();

    add(&dir, "doomed");
    // no stdin provided: the command must not block on a prompt
    jot(&dir).args(["delete", "--all"]).assert().success();
    assert!(!dir.path().join("notes").exists());
}

#[test]
fn done_is_idempotent_end_to_end() {
    let dir = TempDir::new().unwrap();
    add(&dir, "task");

    jot(&dir).args(["done", "1"]).assert().success();
    let once = fs::read_to_string(dir.path().join("notes")).unwrap();

    jot(&dir).args(["done", "1"]).assert().success();
    let twice = fs::read_to_string(dir.path().join("notes")).unwrap();
    assert_eq!(once, twice);
    assert!(once.starts_with("1\tDone\t"));
}

#[test]
fn postponed_notes_hide_until_asked_for() {
    let dir = TempDir::new().unwrap();
    add(&dir, "visible");
    add(&dir, "sleeper");
    jot(&dir).args(["postpone", "2"]).assert().success();

    jot(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("sleeper").not());

    jot(&dir)
        .args(["list", "--postponed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sleeper"));
}

#[test]
fn done_all_spares_postponed_notes() {
    let dir = TempDir::new().unwrap();
    for content in ["a", "b", "c"] {
        add(&dir, content);
    }
    jot(&dir).args(["postpone", "2"]).assert().success();
    jot(&dir).args(["done", "--all"]).assert().success();

    let raw = fs::read_to_string(dir.path().join("notes")).unwrap();
    let statuses: Vec<&str> = raw
        .lines()
        .map(|line| line.split('\t').nth(1).unwrap())
        .collect();
    assert_eq!(statuses, vec!["Done", "Postponed", "Done"]);
}

#[test]
fn delete_done_sweeps_finished_notes() {
    let dir = TempDir::new().unwrap();
    for content in ["a", "b", "c"] {
        add(&dir, content);
    }
    jot(&dir).args(["done", "1"]).assert().success();
    jot(&dir).args(["done", "3"]).assert().success();
    jot(&dir).args(["delete", "--done"]).assert().success();

    let stdout = list_stdout(&dir);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("2\t"));
}

#[test]
fn search_is_case_sensitive_and_scoped_to_content() {
    let dir = TempDir::new().unwrap();
    add_dated(&dir, "Buy milk", "2014-11-01");
    add_dated(&dir, "buy stamps", "2014-11-01");

    jot(&dir)
        .args(["search", "buy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stamps"))
        .stdout(predicate::str::contains("milk").not());

    // dates never match
    jot(&dir).args(["search", "2014"]).assert().code(1);
}

#[test]
fn zero_search_matches_exit_nonzero() {
    let dir = TempDir::new().unwrap();
    add(&dir, "something");
    jot(&dir).args(["search", "absent"]).assert().code(1);
}

#[test]
fn grep_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Buy milk");

    jot(&dir)
        .args(["grep", "^buy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"));
}

#[test]
fn a_malformed_pattern_is_fatal_with_code_two() {
    let dir = TempDir::new().unwrap();
    add(&dir, "anything");
    jot(&dir)
        .args(["grep", "res["])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn tree_groups_notes_under_date_headings() {
    let dir = TempDir::new().unwrap();
    add_dated(&dir, "one", "2014-11-01");
    add_dated(&dir, "two", "2014-11-01");
    add_dated(&dir, "three", "2014-11-02");

    let output = jot(&dir).arg("tree").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "2014-11-01\n\t1\tUndone\tone\n\t2\tUndone\ttwo\n2014-11-02\n\t3\tUndone\tthree\n"
    );
}

#[test]
fn replace_swaps_content_or_date() {
    let dir = TempDir::new().unwrap();
    add_dated(&dir, "original", "2014-11-01");

    jot(&dir).args(["replace", "1", "2015-02-03"]).assert().success();
    jot(&dir).args(["replace", "1", "updated text"]).assert().success();

    let raw = fs::read_to_string(dir.path().join("notes")).unwrap();
    assert_eq!(raw, "1\tUndone\t2015-02-03\tupdated text\n");
}

#[test]
fn replacing_an_unknown_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    add(&dir, "only note");
    jot(&dir).args(["replace", "9", "data"]).assert().code(1);
}

#[test]
fn add_reads_notes_from_stdin() {
    let dir = TempDir::new().unwrap();
    jot(&dir)
        .args(["add", "-"])
        .write_stdin("first\nsecond\n\nthird\n")
        .assert()
        .success();

    let stdout = list_stdout(&dir);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains("1\tUndone"));
    assert!(stdout.contains("3\tUndone"));
}

#[test]
fn categories_keep_separate_plain_stores() {
    let dir = TempDir::new().unwrap();
    jot(&dir)
        .args(["-c", "work", "add", "meet bob"])
        .assert()
        .success();
    jot(&dir)
        .args(["-c", "home", "add", "water plants"])
        .assert()
        .success();
    add(&dir, "global note");

    // category records carry no status column
    let raw = fs::read_to_string(dir.path().join("categories").join("work")).unwrap();
    assert!(raw.starts_with("1\t"));
    assert!(!raw.contains("Undone"));

    jot(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("home (1 note)"))
        .stdout(predicate::str::contains("work (1 note)"));
}

#[test]
fn an_empty_category_file_lists_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("categories")).unwrap();
    fs::write(dir.path().join("categories").join("blank"), "").unwrap();

    jot(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("blank (empty)"));
}

#[test]
fn status_commands_are_refused_for_categories() {
    let dir = TempDir::new().unwrap();
    jot(&dir)
        .args(["-c", "work", "add", "meet bob"])
        .assert()
        .success();
    jot(&dir).args(["-c", "work", "done", "1"]).assert().code(2);
}

#[test]
fn export_writes_an_html_table() {
    let dir = TempDir::new().unwrap();
    add_dated(&dir, "buy milk", "2014-11-01");
    let out = dir.path().join("notes.html");

    jot(&dir)
        .args(["export", out.to_str().unwrap()])
        .assert()
        .success();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<td>buy milk</td>"));
    assert!(html.contains("<!DOCTYPE html>"));
}

#[test]
fn path_prints_the_resolved_store_file() {
    let dir = TempDir::new().unwrap();
    jot(&dir)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            dir.path().join("notes").to_str().unwrap(),
        ));
}

#[test]
fn corrupt_lines_do_not_break_a_listing() {
    let dir = TempDir::new().unwrap();
    add_dated(&dir, "good", "2014-11-01");
    let path = dir.path().join("notes");
    let mut raw = fs::read_to_string(&path).unwrap();
    raw.push_str("garbage without tabs\n");
    fs::write(&path, raw).unwrap();
    add_dated(&dir, "still fine", "2014-11-02");

    let stdout = list_stdout(&dir);
    let ids: Vec<&str> = stdout
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    // the corrupt line is skipped, allocation falls back to the last good id
    assert_eq!(ids, vec!["1", "2"]);
}
