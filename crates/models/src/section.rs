use crate::{
    catalog::Room,
    course::CourseId,
    person::FacultyId,
    term::{Quarter, Year},
};
use serde::Serialize;

/// Index of a [`Section`] in the registry's section table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SectionId(pub usize);

/// One scheduled offering of a course, e.g. CPSC 5011-02 in FQ 2018
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub course: CourseId,
    /// Section number, only meaningful together with the course
    pub number: u16,
    pub instructor: FacultyId,
    pub quarter: Quarter,
    pub year: Year,
    pub capacity: u16,
    pub location: Room,
}
