use crate::catalog::SubjectCode;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Index of a [`Course`] in the registry's course table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CourseId(pub usize);

/// Identifies a course by subject and number (e.g., CPSC 5011)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CourseKey {
    pub subject: SubjectCode,
    pub number: u16,
}

impl CourseKey {
    pub fn new(subject: SubjectCode, number: u16) -> Self {
        Self { subject, number }
    }
}

impl Display for CourseKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.pad(&format!("{} {}", self.subject, self.number))
    }
}

/// A catalog course, e.g. CPSC 5011: Object-Oriented Concepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    key: CourseKey,
    name: String,
    credits: u8,
    /// Prerequisites in the order they were attached
    prerequisites: Vec<CourseId>,
}

impl Course {
    pub fn new(key: CourseKey, name: impl Into<String>, credits: u8) -> Self {
        Self {
            key,
            name: name.into(),
            credits,
            prerequisites: Vec::new(),
        }
    }

    pub fn key(&self) -> CourseKey {
        self.key
    }

    pub fn subject(&self) -> SubjectCode {
        self.key.subject
    }

    pub fn number(&self) -> u16 {
        self.key.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> u8 {
        self.credits
    }

    pub fn prerequisites(&self) -> &[CourseId] {
        &self.prerequisites
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_credits(&mut self, credits: u8) {
        self.credits = credits;
    }

    /// Appends a prerequisite. Duplicates and cycles are not checked.
    pub fn add_prerequisite(&mut self, prerequisite: CourseId) {
        self.prerequisites.push(prerequisite);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_key_display() {
        let key = CourseKey::new(SubjectCode::CPSC, 1420);
        assert_eq!(key.to_string(), "CPSC 1420");
        assert_eq!(format!("{key:<10}|"), "CPSC 1420 |");
    }

    #[test]
    fn test_course_prerequisites_keep_order() {
        let mut course = Course::new(
            CourseKey::new(SubjectCode::CPSC, 3400),
            "Languages and Computation",
            5,
        );
        assert!(course.prerequisites().is_empty());

        course.add_prerequisite(CourseId(2));
        course.add_prerequisite(CourseId(4));
        course.add_prerequisite(CourseId(2));
        assert_eq!(course.prerequisites(), &[CourseId(2), CourseId(4), CourseId(2)]);
    }

    #[test]
    fn test_course_setters() {
        let mut course = Course::new(CourseKey::new(SubjectCode::CPSC, 5400), "Complier", 5);
        course.set_name("Compiler Principles and Techniques");
        course.set_credits(3);
        assert_eq!(course.name(), "Compiler Principles and Techniques");
        assert_eq!(course.credits(), 3);
        assert_eq!(course.subject(), SubjectCode::CPSC);
        assert_eq!(course.number(), 5400);
    }
}
