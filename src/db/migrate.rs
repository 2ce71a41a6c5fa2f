use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, params};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251001_0001_create_courses_students",
        description: "Created courses and students tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS courses (
            id           TEXT PRIMARY KEY,
            name         TEXT NOT NULL,
            code         TEXT NOT NULL,
            department   TEXT NOT NULL,
            faculty      TEXT NOT NULL DEFAULT '',
            description  TEXT,
            semester     INTEGER NOT NULL DEFAULT 1,
            credits      INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS students (
            id           TEXT PRIMARY KEY,
            name         TEXT NOT NULL,
            department   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_courses_department ON courses(department);
        "#,
    },
    Migration {
        version: "20251001_0002_create_enrollments_attendance",
        description: "Created enrollments and attendance tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS enrollments (
            student_id   TEXT NOT NULL REFERENCES students(id) ON DELETE CASCADE,
            course_id    TEXT NOT NULL REFERENCES courses(id) ON DELETE CASCADE,
            enrolled_at  TEXT NOT NULL,
            PRIMARY KEY (student_id, course_id)
        );

        CREATE TABLE IF NOT EXISTS attendance (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id    TEXT NOT NULL REFERENCES students(id) ON DELETE CASCADE,
            course_id     TEXT NOT NULL REFERENCES courses(id) ON DELETE CASCADE,
            session_date  TEXT NOT NULL,
            present       INTEGER NOT NULL CHECK(present IN (0, 1))
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_student_course
            ON attendance(student_id, course_id);
        "#,
    },
    Migration {
        version: "20251012_0003_add_course_capacity",
        description: "Added capacity column to courses",
        sql: "ALTER TABLE courses ADD COLUMN capacity INTEGER;",
    },
];

/// Ensure that the `log` table exists; it also records applied migrations.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![m.version, m.description],
    )?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Public entry point: run all pending migrations, in order.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
