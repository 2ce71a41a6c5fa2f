//! Text rendering of the catalog, the enrolled list and course details.

use crate::core::attendance::{AttendanceStatus, AttendanceSummary};
use crate::core::enrolled::EnrolledEntry;
use crate::core::listing::Listing;
use crate::models::{Course, Student};
use crate::ui::messages::empty_state;
use crate::utils::colors::{color_for_status, colorize, colorize_placeholder};
use crate::utils::formatting::{attendance_bar, bold, wrap_indented};
use crate::utils::table::{Column, Table};

const CARD_WIDTH: usize = 72;

pub const NO_MATCHES: &str = "No courses match your search criteria.";

fn tags(course: &Course) -> String {
    format!(
        "[{}]  [Semester {}]  [{} Credits]",
        course.department, course.semester, course.credits
    )
}

fn description(course: &Course, placeholder: &str) -> String {
    let text = course.description_or(placeholder);
    let wrapped = wrap_indented(text, CARD_WIDTH, 4);
    colorize_placeholder(&wrapped, text == placeholder)
}

/// One catalog card.
pub fn course_card(course: &Course, placeholder: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}  {}\n", bold(&course.name), course.code));
    out.push_str(&description(course, placeholder));
    out.push('\n');
    out.push_str(&format!("    Faculty: {}\n", course.faculty));
    out.push_str(&format!("    {}\n", tags(course)));
    if let Some(cap) = course.capacity {
        out.push_str(&format!("    Capacity: {}\n", cap));
    }
    out
}

pub fn print_catalog(listing: &Listing<&Course>, placeholder: &str) {
    match listing {
        Listing::NoCourses => empty_state(
            "No courses available",
            "There are no available courses for your department at the moment.",
        ),
        Listing::NoMatches => empty_state("No courses available", NO_MATCHES),
        Listing::Courses(courses) => {
            for course in courses {
                println!("{}", course_card(course, placeholder));
            }
            println!("{} course(s) available.", courses.len());
        }
    }
}

pub fn enrolled_table(entries: &[EnrolledEntry<'_>]) -> Table {
    let mut table = Table::new(vec![
        Column::new("Code", 12),
        Column::new("Name", 32),
        Column::new("Faculty", 24),
        Column::new("Sem", 3),
        Column::new("Cr", 3),
        Column::new("Sessions", 8),
    ]);

    for e in entries {
        table.add_row(vec![
            e.course.code.clone(),
            e.course.name.clone(),
            e.course.faculty.clone(),
            e.course.semester.to_string(),
            e.course.credits.to_string(),
            format!("{}/{}", e.attendance.present, e.attendance.total),
        ]);
    }
    table
}

pub fn print_enrolled(listing: &Listing<EnrolledEntry<'_>>) {
    match listing {
        Listing::NoCourses => empty_state(
            "No courses found",
            "You are not enrolled in any courses yet.",
        ),
        Listing::NoMatches => empty_state("No courses found", NO_MATCHES),
        Listing::Courses(entries) => {
            let table = enrolled_table(entries);
            let rendered = table.render();
            let mut lines = rendered.lines();

            // header + separator, then one row per entry followed by its bar
            for line in lines.by_ref().take(2) {
                println!("{line}");
            }
            for (line, e) in lines.zip(entries.iter()) {
                println!(
                    "{line} {} {}",
                    attendance_bar(e.attendance.percent, e.status),
                    status_label(e.status)
                );
            }

            let at_risk = entries
                .iter()
                .filter(|e| e.status == AttendanceStatus::AtRisk)
                .count();
            println!("\n{} course(s), {} at risk.", entries.len(), at_risk);
        }
    }
}

pub fn status_label(status: AttendanceStatus) -> String {
    colorize(status.label(), color_for_status(status))
}

/// Full details for one course; attendance history only when enrolled.
pub fn print_course_details(
    course: &Course,
    student: &Student,
    placeholder: &str,
    threshold: u8,
) {
    print!("{}", course_card(course, placeholder));

    if !student.is_enrolled(&course.id) {
        println!("\n    Not enrolled.");
        return;
    }

    let summary = AttendanceSummary::for_course(student, &course.id);
    let status = summary.status(threshold);
    println!(
        "\n    Attendance {} {}  ({} of {} sessions)",
        attendance_bar(summary.percent, status),
        status_label(status),
        summary.present,
        summary.total
    );

    for r in student.attendance_for(&course.id) {
        let mark = if r.present { "present" } else { "absent" };
        println!("      {}  {}", r.date_str(), mark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course::sample;

    #[test]
    fn card_uses_placeholder_for_missing_description() {
        let c = sample("CS101", "Intro", "CS", "Dr. Hopper");
        let card = course_card(&c, "No description available.");
        assert!(card.contains("No description available."));
        assert!(card.contains("Faculty: Dr. Hopper"));
        assert!(card.contains("[Semester 1]"));
        assert!(card.contains("[3 Credits]"));
    }
}
