use serde::Serialize;

/// A course as stored in the `courses` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub code: String,
    pub department: String,
    pub faculty: String,
    pub description: Option<String>, // ⇔ courses.description (NULL allowed)
    pub semester: u32,
    pub credits: u32,
    pub capacity: Option<u32>, // None = unlimited
}

impl Course {
    /// Description text, or `placeholder` when it is missing or blank.
    pub fn description_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => placeholder,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str, name: &str, department: &str, faculty: &str) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        code: id.to_string(),
        department: department.to_string(),
        faculty: faculty.to_string(),
        description: None,
        semester: 1,
        credits: 3,
        capacity: None,
    }
}
