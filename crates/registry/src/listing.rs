use crate::error::RegistryError;
use models::{catalog::Subject, course::Course, person::Faculty, person::Student, section::Section};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The collections the registry can list
///
/// Variants are declared in report order, so [`Category::all`] lists faculty first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[strum(to_string = "faculty")]
    Faculty,
    #[strum(to_string = "students", serialize = "student")]
    Students,
    #[strum(to_string = "subjects", serialize = "subject")]
    Subjects,
    #[strum(to_string = "courses", serialize = "course")]
    Courses,
    #[strum(to_string = "sections", serialize = "section")]
    Sections,
}

impl Category {
    pub fn all() -> Vec<Category> {
        Category::iter().collect()
    }

    /// Parses a category name, rejecting unknown names as a caller error
    pub fn parse(name: &str) -> Result<Self, RegistryError> {
        Self::from_str(name.trim()).map_err(|_| RegistryError::UnknownCategory(name.to_string()))
    }
}

/// Read-only, insertion-ordered view over one registry collection
#[derive(Debug, Clone, Copy)]
pub enum Listing<'a> {
    Faculty(&'a [Faculty]),
    Students(&'a [Student]),
    Subjects(&'a [Subject]),
    Courses(&'a [Course]),
    Sections(&'a [Section]),
}

impl Listing<'_> {
    pub fn category(&self) -> Category {
        match self {
            Self::Students(_) => Category::Students,
            Self::Faculty(_) => Category::Faculty,
            Self::Subjects(_) => Category::Subjects,
            Self::Courses(_) => Category::Courses,
            Self::Sections(_) => Category::Sections,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Students(items) => items.len(),
            Self::Faculty(items) => items.len(),
            Self::Subjects(items) => items.len(),
            Self::Courses(items) => items.len(),
            Self::Sections(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
