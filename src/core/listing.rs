//! Result of a filtered view, keeping "nothing there" apart from "nothing matched".

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    /// The underlying subset (eligible or enrolled courses) is empty.
    NoCourses,
    /// There are courses, but none matched the search term.
    NoMatches,
    Courses(Vec<T>),
}

impl<T> Listing<T> {
    pub fn from_filtered(subset_len: usize, items: Vec<T>) -> Self {
        if subset_len == 0 {
            Listing::NoCourses
        } else if items.is_empty() {
            Listing::NoMatches
        } else {
            Listing::Courses(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Listing::Courses(items) => items,
            _ => &[],
        }
    }
}
