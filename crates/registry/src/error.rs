use models::{catalog::SubjectCode, course::CourseKey};
use thiserror::Error;

/// Reasons an add or lookup against the registry can be rejected.
///
/// Every failing operation returns exactly one of these and leaves the
/// registry untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A student or faculty member with the same first and last name exists
    #[error("Person {first} {last} is already registered")]
    DuplicatePerson { first: String, last: String },

    #[error("Subject {0} is already registered")]
    DuplicateSubject(SubjectCode),

    #[error("Course {0} is already registered")]
    DuplicateCourse(CourseKey),

    #[error("Course {0} was not found")]
    CourseNotFound(CourseKey),

    /// No person matched the given name
    #[error("Person {0} was not found")]
    PersonNotFound(String),

    /// The caller asked for a listing category that does not exist
    #[error("Unknown listing category '{0}'")]
    UnknownCategory(String),
}

impl RegistryError {
    pub(crate) fn duplicate_person(first: &str, last: &str) -> Self {
        Self::DuplicatePerson {
            first: first.to_string(),
            last: last.to_string(),
        }
    }
}
