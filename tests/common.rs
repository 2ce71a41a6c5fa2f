#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary under test, with HOME pointed at a scratch directory so that a
/// real `~/.coursedesk/coursedesk.conf` never leaks into the tests.
pub fn desk() -> Command {
    let home = env::temp_dir().join("coursedesk_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("coursedesk");
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_coursedesk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run a command against `db_path` and require success.
pub fn ok(db_path: &str, args: &[&str]) {
    let mut full = vec!["--db", db_path];
    full.extend_from_slice(args);
    desk().args(&full).assert().success();
}

pub fn add_course(db_path: &str, id: &str, name: &str, dept: &str, faculty: &str) {
    ok(
        db_path,
        &[
            "add-course", id, "--name", name, "--dept", dept, "--faculty", faculty,
        ],
    );
}

/// Init the DB with student `s1` in CS and a three-course catalog:
/// CS101 (CS), CS102 (CS), MATH201 (MATH).
pub fn init_db_with_catalog(db_path: &str) {
    ok(db_path, &["--test", "init"]);
    ok(db_path, &["add-student", "s1", "--name", "Ada", "--dept", "CS"]);
    add_course(db_path, "CS101", "Intro to Programming", "CS", "Dr. Hopper");
    add_course(db_path, "CS102", "Data Structures", "CS", "Dr. Knuth");
    add_course(db_path, "MATH201", "Linear Algebra", "MATH", "Dr. Noether");
}
