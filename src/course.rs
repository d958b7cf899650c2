/// A single catalog entry.
///
/// `number` is always stored in normalized form (see [`normalize_number`]) and
/// doubles as the catalog key. `prerequisites` keeps the order in which they
/// appeared in the source file and may mention courses the catalog doesn't know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Uppercase course number, e.g. `CSCI200`.
    pub number: String,
    /// Human readable title, kept exactly as written.
    pub title: String,
    /// Normalized numbers of the courses that must be taken first.
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Builder-style helper used when the prerequisites are known up front.
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }
}

/// Normalize a course number for keying and lookup.
///
/// Surrounding whitespace is trimmed and ASCII letters are uppercased. Inner
/// whitespace is left alone, so `" cs 101 "` becomes `"CS 101"`.
pub fn normalize_number(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}
