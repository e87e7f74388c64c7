use models::{
    catalog::Subject,
    course::Course,
    person::{Faculty, Student},
    section::Section,
};
use registry::{Category, Listing, RegistrationSystem};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FacultyResponse {
    pub last_name: String,
    pub first_name: String,
    pub suid: u32,
    pub status: String,
    pub rank: String,
    pub office: String,
    pub office_building: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub last_name: String,
    pub first_name: String,
    pub suid: u32,
    pub status: String,
    pub study_year: Option<String>,
    pub program: String,
    pub quarter: String,
    pub enroll_year: u16,
    pub advisor: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub code: String,
    pub number: u16,
    pub name: String,
    pub credits: u8,
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub course: String,
    pub section: u16,
    pub instructor: Option<String>,
    pub quarter: String,
    pub year: u16,
    /// Spelled-out term, e.g. "fall 2018"
    pub term: String,
    pub capacity: u16,
    pub location: String,
    pub building: String,
}

/// All requested listings, keyed by category
#[derive(Debug, Default, Serialize)]
pub struct CatalogResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<Vec<FacultyResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<StudentResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<SubjectResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<CourseResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<SectionResponse>>,
}

impl CatalogResponse {
    pub fn build(system: &RegistrationSystem, categories: &[Category]) -> Self {
        let mut response = Self::default();

        for &category in categories {
            match system.list_of(category) {
                Listing::Faculty(faculty) => {
                    response.faculty = Some(faculty.iter().map(convert_faculty).collect());
                }
                Listing::Students(students) => {
                    response.students = Some(
                        students
                            .iter()
                            .map(|s| convert_student(system, s))
                            .collect(),
                    );
                }
                Listing::Subjects(subjects) => {
                    response.subjects = Some(subjects.iter().map(convert_subject).collect());
                }
                Listing::Courses(courses) => {
                    response.courses = Some(
                        courses
                            .iter()
                            .map(|c| convert_course(system, c))
                            .collect(),
                    );
                }
                Listing::Sections(sections) => {
                    response.sections = Some(
                        sections
                            .iter()
                            .map(|s| convert_section(system, s))
                            .collect(),
                    );
                }
            }
        }

        response
    }
}

fn convert_faculty(faculty: &Faculty) -> FacultyResponse {
    FacultyResponse {
        last_name: faculty.last_name().to_string(),
        first_name: faculty.first_name().to_string(),
        suid: faculty.suid(),
        status: faculty.status().to_string(),
        rank: faculty.rank().to_string(),
        office: faculty.office().to_string(),
        office_building: faculty.office().building.full_name().to_string(),
        email: faculty.email().to_string(),
    }
}

fn convert_student(system: &RegistrationSystem, student: &Student) -> StudentResponse {
    StudentResponse {
        last_name: student.last_name().to_string(),
        first_name: student.first_name().to_string(),
        suid: student.suid(),
        status: student.status().to_string(),
        study_year: student.class_standing().map(|year| year.to_string()),
        program: student.program().to_string(),
        quarter: student.quarter().to_string(),
        enroll_year: *student.enroll_year(),
        advisor: student
            .advisor()
            .and_then(|id| system.faculty_member(id))
            .map(|f| f.last_name().to_string()),
        email: student.email().map(str::to_string),
    }
}

fn convert_subject(subject: &Subject) -> SubjectResponse {
    SubjectResponse {
        code: subject.code.to_string(),
        description: subject.description.clone(),
    }
}

fn convert_course(system: &RegistrationSystem, course: &Course) -> CourseResponse {
    CourseResponse {
        code: course.subject().to_string(),
        number: course.number(),
        name: course.name().to_string(),
        credits: course.credits(),
        prerequisites: system
            .prerequisites_of(course)
            .map(|prereq| prereq.key().to_string())
            .collect(),
    }
}

fn convert_section(system: &RegistrationSystem, section: &Section) -> SectionResponse {
    SectionResponse {
        course: system
            .course(section.course)
            .map(|c| c.key().to_string())
            .unwrap_or_default(),
        section: section.number,
        instructor: system
            .faculty_member(section.instructor)
            .map(|f| f.last_name().to_string()),
        quarter: section.quarter.to_string(),
        year: *section.year,
        term: format!("{} {}", section.quarter.as_full_str(), section.year),
        capacity: section.capacity,
        location: section.location.to_string(),
        building: section.location.building.full_name().to_string(),
    }
}
