//! Free-text course search shared by the catalog and the enrolled list.

use crate::models::Course;

/// A search term, lowercased once.
///
/// A course matches when the term is empty or is a case-insensitive
/// substring of its name, code or faculty.
#[derive(Debug, Clone, Default)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, course: &Course) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        [&course.name, &course.code, &course.faculty]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl From<Option<&str>> for SearchTerm {
    fn from(raw: Option<&str>) -> Self {
        SearchTerm::new(raw.unwrap_or_default())
    }
}
