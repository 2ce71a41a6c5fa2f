use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_course, desk, init_db_with_catalog, ok, setup_test_db};

#[test]
fn test_catalog_lists_only_eligible_courses() {
    let db_path = setup_test_db("catalog_eligible");
    init_db_with_catalog(&db_path);

    ok(&db_path, &["--student", "s1", "enroll", "CS101"]);

    desk()
        .args(["--db", &db_path, "--student", "s1", "catalog"])
        .assert()
        .success()
        .stdout(contains("CS102"))
        .stdout(contains("CS101").not())
        .stdout(contains("MATH201").not())
        .stdout(contains("1 course(s) available."));
}

#[test]
fn test_catalog_search_matches_name_code_or_faculty() {
    let db_path = setup_test_db("catalog_search");
    ok(&db_path, &["--test", "init"]);
    ok(&db_path, &["add-student", "s1", "--name", "Isaac", "--dept", "SCI"]);
    add_course(&db_path, "SCI1", "Calculus I", "SCI", "Dr. Newton");
    add_course(&db_path, "SCI2", "Physics", "SCI", "Dr. Euler");

    desk()
        .args(["--db", &db_path, "--student", "s1", "catalog", "--search", "calc"])
        .assert()
        .success()
        .stdout(contains("Calculus I"))
        .stdout(contains("Physics").not());

    desk()
        .args(["--db", &db_path, "--student", "s1", "catalog", "-s", "EULER"])
        .assert()
        .success()
        .stdout(contains("Physics"))
        .stdout(contains("Calculus I").not());
}

#[test]
fn test_catalog_empty_states_are_distinct() {
    let db_path = setup_test_db("catalog_empty");
    init_db_with_catalog(&db_path);

    desk()
        .args(["--db", &db_path, "--student", "s1", "catalog", "--search", "zzz"])
        .assert()
        .success()
        .stdout(contains("No courses match your search criteria."));

    ok(&db_path, &["add-student", "s2", "--name", "Rosalind", "--dept", "BIO"]);
    desk()
        .args(["--db", &db_path, "--student", "s2", "catalog"])
        .assert()
        .success()
        .stdout(contains(
            "There are no available courses for your department at the moment.",
        ));
}

#[test]
fn test_catalog_shows_description_placeholder() {
    let db_path = setup_test_db("catalog_placeholder");
    init_db_with_catalog(&db_path);
    ok(
        &db_path,
        &[
            "add-course", "CS103", "--name", "Compilers", "--dept", "CS", "--desc",
            "Lexing, parsing and code generation.",
        ],
    );

    desk()
        .args(["--db", &db_path, "--student", "s1", "catalog"])
        .assert()
        .success()
        .stdout(contains("No description available."))
        .stdout(contains("Lexing, parsing and code generation."));
}

#[test]
fn test_enroll_twice_is_rejected() {
    let db_path = setup_test_db("enroll_twice");
    init_db_with_catalog(&db_path);

    ok(&db_path, &["--student", "s1", "enroll", "CS102"]);

    desk()
        .args(["--db", &db_path, "--student", "s1", "enroll", "CS102"])
        .assert()
        .failure()
        .stderr(contains("already enrolled"));
}

#[test]
fn test_enroll_other_department_is_rejected() {
    let db_path = setup_test_db("enroll_other_dept");
    init_db_with_catalog(&db_path);

    desk()
        .args(["--db", &db_path, "--student", "s1", "enroll", "MATH201"])
        .assert()
        .failure()
        .stderr(contains("not open to your department"));
}

#[test]
fn test_enroll_full_course_is_rejected() {
    let db_path = setup_test_db("enroll_full");
    init_db_with_catalog(&db_path);
    ok(
        &db_path,
        &["add-course", "CS200", "--name", "Seminar", "--dept", "CS", "--capacity", "1"],
    );
    ok(&db_path, &["add-student", "s2", "--name", "Alan", "--dept", "CS"]);

    ok(&db_path, &["--student", "s2", "enroll", "CS200"]);

    desk()
        .args(["--db", &db_path, "--student", "s1", "enroll", "CS200"])
        .assert()
        .failure()
        .stderr(contains("course is full"));

    // the failed request leaves the catalog as it was
    desk()
        .args(["--db", &db_path, "--student", "s1", "catalog", "--search", "seminar"])
        .assert()
        .success()
        .stdout(contains("CS200"));
}

#[test]
fn test_no_active_student() {
    let db_path = setup_test_db("no_student");
    init_db_with_catalog(&db_path);

    desk()
        .args(["--db", &db_path, "catalog"])
        .assert()
        .failure()
        .stderr(contains("No active student"));

    desk()
        .args(["--db", &db_path, "--student", "ghost", "catalog"])
        .assert()
        .failure()
        .stderr(contains("Student not found: ghost"));
}
