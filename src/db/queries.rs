use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, Course, Student};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::BTreeSet;

const COURSE_COLUMNS: &str =
    "id, name, code, department, faculty, description, semester, credits, capacity";

pub fn map_course(row: &Row) -> Result<Course> {
    Ok(Course {
        id: row.get("id")?,
        name: row.get("name")?,
        code: row.get("code")?,
        department: row.get("department")?,
        faculty: row.get("faculty")?,
        description: row.get("description")?,
        semester: row.get("semester")?,
        credits: row.get("credits")?,
        capacity: row.get("capacity")?,
    })
}

fn map_attendance(row: &Row) -> Result<AttendanceRecord> {
    let date_str: String = row.get("session_date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(AttendanceRecord {
        course_id: row.get("course_id")?,
        date,
        present: row.get::<_, i32>("present")? == 1,
    })
}

// ---------------------------
// Courses
// ---------------------------

/// All courses in insertion order.
pub fn load_courses(conn: &Connection) -> AppResult<Vec<Course>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COURSE_COLUMNS} FROM courses ORDER BY rowid ASC"
    ))?;

    let rows = stmt.query_map([], map_course)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_course(conn: &Connection, course_id: &str) -> AppResult<Option<Course>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?1"
    ))?;
    Ok(stmt.query_row([course_id], map_course).optional()?)
}

pub fn insert_course(conn: &Connection, c: &Course) -> AppResult<()> {
    conn.execute(
        "INSERT INTO courses (id, name, code, department, faculty, description, semester, credits, capacity)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            c.id,
            c.name,
            c.code,
            c.department,
            c.faculty,
            c.description,
            c.semester,
            c.credits,
            c.capacity,
        ],
    )?;
    Ok(())
}

// ---------------------------
// Students
// ---------------------------

pub fn insert_student(conn: &Connection, id: &str, name: &str, department: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO students (id, name, department) VALUES (?1, ?2, ?3)",
        params![id, name, department],
    )?;
    Ok(())
}

pub fn student_exists(conn: &Connection, student_id: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM students WHERE id = ?1")?;
    Ok(stmt.exists([student_id])?)
}

/// Loads a student together with enrolled course ids and attendance records.
pub fn load_student(conn: &Connection, student_id: &str) -> AppResult<Option<Student>> {
    let head = conn
        .query_row(
            "SELECT id, name, department FROM students WHERE id = ?1",
            [student_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        )
        .optional()?;

    let Some((id, name, department)) = head else {
        return Ok(None);
    };

    let mut stmt = conn.prepare("SELECT course_id FROM enrollments WHERE student_id = ?1")?;
    let enrolled = stmt
        .query_map([student_id], |row| row.get::<_, String>(0))?
        .collect::<Result<BTreeSet<String>>>()?;

    let mut stmt = conn.prepare(
        "SELECT course_id, session_date, present FROM attendance
         WHERE student_id = ?1
         ORDER BY session_date ASC, id ASC",
    )?;
    let attendance = stmt
        .query_map([student_id], map_attendance)?
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(Student {
        id,
        name,
        department,
        enrolled,
        attendance,
    }))
}

// ---------------------------
// Enrollments
// ---------------------------

pub fn is_enrolled(conn: &Connection, student_id: &str, course_id: &str) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM enrollments WHERE student_id = ?1 AND course_id = ?2")?;
    Ok(stmt.exists(params![student_id, course_id])?)
}

pub fn count_enrolled(conn: &Connection, course_id: &str) -> AppResult<u32> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM enrollments WHERE course_id = ?1",
        [course_id],
        |row| row.get(0),
    )?)
}

pub fn insert_enrollment(conn: &Connection, student_id: &str, course_id: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO enrollments (student_id, course_id, enrolled_at) VALUES (?1, ?2, ?3)",
        params![student_id, course_id, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Returns the number of rows removed (0 or 1).
pub fn delete_enrollment(conn: &Connection, student_id: &str, course_id: &str) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM enrollments WHERE student_id = ?1 AND course_id = ?2",
        params![student_id, course_id],
    )?)
}

// ---------------------------
// Attendance
// ---------------------------

pub fn insert_attendance(
    conn: &Connection,
    student_id: &str,
    record: &AttendanceRecord,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO attendance (student_id, course_id, session_date, present)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            student_id,
            record.course_id,
            record.date_str(),
            if record.present { 1 } else { 0 },
        ],
    )?;
    Ok(())
}
