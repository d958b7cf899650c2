//! Ordered course storage and the two read queries the menu needs.

use crate::course::{Course, normalize_number};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

/// Courses keyed by their normalized number, iterated in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: BTreeMap<String, Course>,
}

/// Outcome of [`Catalog::lookup`]. A miss is an ordinary answer, not an error.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a Course),
    /// Carries the normalized number that was searched for.
    NotFound(String),
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a course under its own number.
    ///
    /// Refuses to replace an existing entry and hands the course back instead,
    /// so the first record for a number always wins.
    pub fn insert(&mut self, course: Course) -> Result<(), Course> {
        match self.courses.entry(course.number.clone()) {
            Entry::Occupied(_) => Err(course),
            Entry::Vacant(slot) => {
                slot.insert(course);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn contains(&self, number: &str) -> bool {
        self.courses.contains_key(&normalize_number(number))
    }

    /// All courses in ascending course-number order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// One summary line per course, sorted by course number.
    pub fn list_all(&self) -> impl Iterator<Item = CourseSummary<'_>> {
        self.iter().map(CourseSummary)
    }

    /// Case-insensitive lookup by course number.
    pub fn lookup(&self, number: &str) -> Lookup<'_> {
        let key = normalize_number(number);
        match self.courses.get(&key) {
            Some(course) => Lookup::Found(course),
            None => Lookup::NotFound(key),
        }
    }
}

/// `NUMBER, Title`, as shown in the full course listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseSummary<'a>(pub &'a Course);

impl<'a> CourseSummary<'a> {
    pub fn number(&self) -> &'a str {
        &self.0.number
    }

    pub fn title(&self) -> &'a str {
        &self.0.title
    }
}

impl fmt::Display for CourseSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.0.number, self.0.title)
    }
}

/// Two-line description of a single course:
///
/// ```text
/// CSCI300,Introduction to Algorithms
/// Prerequisites: CSCI200, MATH201
/// ```
///
/// `None` is printed when the course has no prerequisites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseDetail<'a>(pub &'a Course);

impl fmt::Display for CourseDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let course = self.0;
        writeln!(f, "{},{}", course.number, course.title)?;
        write!(f, "Prerequisites: ")?;
        if course.prerequisites.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", course.prerequisites.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        for course in [
            Course::new("MATH201", "Discrete Mathematics"),
            Course::new("CSCI300", "Introduction to Algorithms")
                .with_prerequisites(["CSCI200", "MATH201"]),
            Course::new("CSCI100", "Introduction to Computer Science"),
        ] {
            catalog.insert(course).unwrap();
        }
        catalog
    }

    #[test]
    fn test_list_all_is_sorted_by_number() {
        let catalog = sample();
        let lines: Vec<String> = catalog.list_all().map(|s| s.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "CSCI100, Introduction to Computer Science",
                "CSCI300, Introduction to Algorithms",
                "MATH201, Discrete Mathematics",
            ]
        );
    }

    #[test]
    fn test_summary_exposes_number_and_title() {
        let catalog = sample();
        let pairs: Vec<(&str, &str)> = catalog.list_all().map(|s| (s.number(), s.title())).collect();
        assert_eq!(
            pairs,
            vec![
                ("CSCI100", "Introduction to Computer Science"),
                ("CSCI300", "Introduction to Algorithms"),
                ("MATH201", "Discrete Mathematics"),
            ]
        );
    }

    #[test]
    fn test_insert_refuses_duplicates() {
        let mut catalog = sample();
        let rejected = catalog
            .insert(Course::new("MATH201", "Another Title"))
            .unwrap_err();
        assert_eq!(rejected.title, "Another Title");
        assert_eq!(catalog.len(), 3);

        match catalog.lookup("MATH201") {
            Lookup::Found(course) => assert_eq!(course.title, "Discrete Mathematics"),
            other => panic!("unexpected lookup result: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = sample();
        assert!(matches!(catalog.lookup("csci300"), Lookup::Found(c) if c.number == "CSCI300"));
        assert!(matches!(catalog.lookup("  math201 "), Lookup::Found(_)));
        assert!(catalog.contains("csci100"));
    }

    #[test]
    fn test_lookup_miss_reports_normalized_number() {
        let catalog = sample();
        assert_eq!(
            catalog.lookup("cs999"),
            Lookup::NotFound("CS999".to_string())
        );
    }

    #[test]
    fn test_course_detail_formats_prerequisites() {
        let course = Course::new("CSCI300", "Introduction to Algorithms")
            .with_prerequisites(["CSCI200", "MATH201"]);
        assert_eq!(
            CourseDetail(&course).to_string(),
            "CSCI300,Introduction to Algorithms\nPrerequisites: CSCI200, MATH201"
        );
    }

    #[test]
    fn test_course_detail_without_prerequisites_says_none() {
        let course = Course::new("CS101", "Intro");
        assert_eq!(
            CourseDetail(&course).to_string(),
            "CS101,Intro\nPrerequisites: None"
        );
    }
}
