use crate::{
    error::RegistryError,
    listing::{Category, Listing},
};
use log::{debug, trace};
use models::{
    catalog::{Building, Room, Subject, SubjectCode},
    course::{Course, CourseId, CourseKey},
    person::{Faculty, FacultyId, FacultyType, Student, StudentId, StudentProgram, StudentType},
    section::{Section, SectionId},
    term::{Quarter, Year},
};

/// Placeholder shown for a course without prerequisites
pub const NO_PREREQUISITES: &str = "----";

/// In-memory registry of students, faculty, subjects, courses, and sections.
///
/// Courses, faculty, and students are stored in insertion order and referred
/// to by index, so prerequisite edges and sections can alias the same record
/// without owning it.
#[derive(Debug, Clone)]
pub struct RegistrationSystem {
    /// Reference year used to derive student study years
    current_year: Year,
    students: Vec<Student>,
    faculty: Vec<Faculty>,
    subjects: Vec<Subject>,
    courses: Vec<Course>,
    sections: Vec<Section>,
}

impl Default for RegistrationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationSystem {
    pub fn new() -> Self {
        Self::with_current_year(Year::current())
    }

    pub fn with_current_year(current_year: Year) -> Self {
        Self {
            current_year,
            students: Vec::new(),
            faculty: Vec::new(),
            subjects: Vec::new(),
            courses: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn current_year(&self) -> Year {
        self.current_year
    }

    /// Adds a student, deriving the study year from `enroll_year`
    pub fn add_student(
        &mut self,
        first_name: &str,
        last_name: &str,
        status: StudentType,
        program: StudentProgram,
        quarter: Quarter,
        enroll_year: Year,
    ) -> Result<StudentId, RegistryError> {
        if self.students.iter().any(|s| s.is_named(first_name, last_name)) {
            return Err(RegistryError::duplicate_person(first_name, last_name));
        }

        let student = Student::new(
            first_name,
            last_name,
            status,
            program,
            quarter,
            enroll_year,
            self.current_year,
        );
        debug!(
            "Added student {first_name} {last_name} ({status}, {})",
            student.study_year()
        );
        self.students.push(student);

        Ok(StudentId(self.students.len() - 1))
    }

    pub fn add_faculty(
        &mut self,
        first_name: &str,
        last_name: &str,
        rank: FacultyType,
        building: Building,
        room: u16,
        email: &str,
    ) -> Result<FacultyId, RegistryError> {
        if self.faculty.iter().any(|f| f.is_named(first_name, last_name)) {
            return Err(RegistryError::duplicate_person(first_name, last_name));
        }

        let office = Room::new(building, room);
        self.faculty
            .push(Faculty::new(first_name, last_name, rank, office, email));
        debug!("Added faculty {first_name} {last_name} ({rank}, {office})");

        Ok(FacultyId(self.faculty.len() - 1))
    }

    pub fn add_subject(
        &mut self,
        code: SubjectCode,
        description: &str,
    ) -> Result<(), RegistryError> {
        if self.subjects.iter().any(|s| s.code == code) {
            return Err(RegistryError::DuplicateSubject(code));
        }

        self.subjects.push(Subject::new(code, description));
        debug!("Added subject {code} ({description})");

        Ok(())
    }

    pub fn add_course(
        &mut self,
        subject: SubjectCode,
        number: u16,
        name: &str,
        credits: u8,
    ) -> Result<CourseId, RegistryError> {
        let key = CourseKey::new(subject, number);
        if self.courses.iter().any(|c| c.key() == key) {
            return Err(RegistryError::DuplicateCourse(key));
        }

        self.courses.push(Course::new(key, name, credits));
        debug!("Added course {key}: {name} ({credits} credits)");

        Ok(CourseId(self.courses.len() - 1))
    }

    /// Attaches an existing course as a prerequisite of another existing
    /// course. Cycles are not detected.
    pub fn add_prerequisite(
        &mut self,
        subject: SubjectCode,
        number: u16,
        prereq_subject: SubjectCode,
        prereq_number: u16,
    ) -> Result<(), RegistryError> {
        let key = CourseKey::new(subject, number);
        let prereq_key = CourseKey::new(prereq_subject, prereq_number);

        let target = self.require_course(key)?;
        let prereq = self.require_course(prereq_key)?;

        self.courses[target.0].add_prerequisite(prereq);
        debug!("Added prerequisite {prereq_key} to {key}");

        Ok(())
    }

    /// Schedules a section of an existing course. The instructor is resolved
    /// by last name; the first faculty member with that name is used.
    pub fn add_section(
        &mut self,
        subject: SubjectCode,
        number: u16,
        section: u16,
        instructor_last_name: &str,
        quarter: Quarter,
        year: Year,
        capacity: u16,
        building: Building,
        room: u16,
    ) -> Result<SectionId, RegistryError> {
        let key = CourseKey::new(subject, number);
        let course = self.require_course(key)?;
        let instructor = self.require_faculty(instructor_last_name)?;

        self.sections.push(Section {
            course,
            number: section,
            instructor,
            quarter,
            year,
            capacity,
            location: Room::new(building, room),
        });
        debug!("Added section {key}-{section:02} taught by {instructor_last_name}");

        Ok(SectionId(self.sections.len() - 1))
    }

    /// Records a faculty member, resolved by last name, as a student's advisor
    pub fn assign_advisor(
        &mut self,
        first_name: &str,
        last_name: &str,
        advisor_last_name: &str,
    ) -> Result<FacultyId, RegistryError> {
        let student = self.student_id(first_name, last_name).ok_or_else(|| {
            trace!("No student named {first_name} {last_name}");
            RegistryError::PersonNotFound(format!("{first_name} {last_name}"))
        })?;
        let advisor = self.require_faculty(advisor_last_name)?;

        self.students[student.0].set_advisor(Some(advisor));
        debug!("Assigned advisor {advisor_last_name} to {first_name} {last_name}");

        Ok(advisor)
    }

    /// Insertion-ordered view of one collection
    pub fn list_of(&self, category: Category) -> Listing<'_> {
        match category {
            Category::Students => Listing::Students(&self.students),
            Category::Faculty => Listing::Faculty(&self.faculty),
            Category::Subjects => Listing::Subjects(&self.subjects),
            Category::Courses => Listing::Courses(&self.courses),
            Category::Sections => Listing::Sections(&self.sections),
        }
    }

    /// Like [`Self::list_of`], for callers holding a category name
    pub fn list_of_named(&self, name: &str) -> Result<Listing<'_>, RegistryError> {
        Category::parse(name).map(|category| self.list_of(category))
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn faculty(&self) -> &[Faculty] {
        &self.faculty
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(id.0)
    }

    pub fn faculty_member(&self, id: FacultyId) -> Option<&Faculty> {
        self.faculty.get(id.0)
    }

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(id.0)
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id.0)
    }

    pub fn find_student(&self, first_name: &str, last_name: &str) -> Option<&Student> {
        self.student_id(first_name, last_name)
            .and_then(|id| self.student(id))
    }

    /// First faculty member with the given last name
    pub fn find_faculty(&self, last_name: &str) -> Option<&Faculty> {
        self.faculty_id(last_name)
            .and_then(|id| self.faculty_member(id))
    }

    pub fn find_course(&self, key: CourseKey) -> Option<&Course> {
        self.course_id(key).and_then(|id| self.course(id))
    }

    pub fn find_subject(&self, code: SubjectCode) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.code == code)
    }

    /// Prerequisites of `course` in the order they were attached
    pub fn prerequisites_of<'a>(&'a self, course: &'a Course) -> impl Iterator<Item = &'a Course> {
        course
            .prerequisites()
            .iter()
            .filter_map(move |&id| self.course(id))
    }

    /// Prerequisites joined as "CPSC 2430 & CPSC 2600", or `----` if none
    pub fn prerequisite_summary(&self, course: &Course) -> String {
        let keys = self
            .prerequisites_of(course)
            .map(|prereq| prereq.key().to_string())
            .collect::<Vec<_>>();

        if keys.is_empty() {
            NO_PREREQUISITES.to_string()
        } else {
            keys.join(" & ")
        }
    }

    fn student_id(&self, first_name: &str, last_name: &str) -> Option<StudentId> {
        self.students
            .iter()
            .position(|s| s.is_named(first_name, last_name))
            .map(StudentId)
    }

    fn faculty_id(&self, last_name: &str) -> Option<FacultyId> {
        self.faculty
            .iter()
            .position(|f| f.last_name() == last_name)
            .map(FacultyId)
    }

    fn course_id(&self, key: CourseKey) -> Option<CourseId> {
        self.courses.iter().position(|c| c.key() == key).map(CourseId)
    }

    fn require_course(&self, key: CourseKey) -> Result<CourseId, RegistryError> {
        self.course_id(key).ok_or_else(|| {
            trace!("No course {key}");
            RegistryError::CourseNotFound(key)
        })
    }

    fn require_faculty(&self, last_name: &str) -> Result<FacultyId, RegistryError> {
        self.faculty_id(last_name).ok_or_else(|| {
            trace!("No faculty with last name {last_name}");
            RegistryError::PersonNotFound(last_name.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::person::StudentYear;

    fn system() -> RegistrationSystem {
        RegistrationSystem::with_current_year(Year(2020))
    }

    fn add_reeder(system: &mut RegistrationSystem) -> FacultyId {
        system
            .add_faculty(
                "Susan",
                "Reeder",
                FacultyType::SeniorInstructor,
                Building::ENGR,
                505,
                "sreeder@seattleu.edu",
            )
            .unwrap()
    }

    #[test]
    fn test_add_student_derives_year() {
        let mut system = system();
        let id = system
            .add_student(
                "Lucille",
                "Bluth",
                StudentType::Undergrad,
                StudentProgram::BSCS,
                Quarter::Winter,
                Year(2017),
            )
            .unwrap();

        let student = system.student(id).unwrap();
        assert_eq!(student.study_year(), StudentYear::Senior);
        assert_eq!(student.quarter(), Quarter::Winter);
        assert_eq!(student.enroll_year(), Year(2017));
    }

    #[test]
    fn test_duplicate_student_rejected() {
        let mut system = system();
        let add = |system: &mut RegistrationSystem, first: &str| {
            system.add_student(
                first,
                "Bluth",
                StudentType::Undergrad,
                StudentProgram::BSCS,
                Quarter::Fall,
                Year(2018),
            )
        };

        add(&mut system, "Michael").unwrap();
        add(&mut system, "Gob").unwrap();
        assert_eq!(
            add(&mut system, "Michael"),
            Err(RegistryError::DuplicatePerson {
                first: "Michael".to_string(),
                last: "Bluth".to_string(),
            })
        );
        assert_eq!(system.students().len(), 2);
    }

    #[test]
    fn test_duplicate_faculty_uses_name_pair() {
        let mut system = system();
        add_reeder(&mut system);

        let err = system
            .add_faculty(
                "Susan",
                "Reeder",
                FacultyType::Professor,
                Building::PIGT,
                101,
                "other@seattleu.edu",
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicatePerson { .. }));

        // Same last name, different first name is a different person
        system
            .add_faculty(
                "Tom",
                "Reeder",
                FacultyType::Lecturer,
                Building::ENGR,
                510,
                "treeder@seattleu.edu",
            )
            .unwrap();
        assert_eq!(system.faculty().len(), 2);
    }

    #[test]
    fn test_duplicate_subject_rejected() {
        let mut system = system();
        system.add_subject(SubjectCode::CPSC, "Computer Science").unwrap();
        assert_eq!(
            system.add_subject(SubjectCode::CPSC, "Computing"),
            Err(RegistryError::DuplicateSubject(SubjectCode::CPSC))
        );
        assert_eq!(system.subjects().len(), 1);
        assert_eq!(
            system.find_subject(SubjectCode::CPSC).unwrap().description,
            "Computer Science"
        );
    }

    #[test]
    fn test_duplicate_course_rejected() {
        let mut system = system();
        system
            .add_course(SubjectCode::CPSC, 1420, "Programming and Problem Solving I", 5)
            .unwrap();
        system
            .add_course(SubjectCode::MATH, 1420, "Another 1420", 5)
            .unwrap();

        assert_eq!(
            system.add_course(SubjectCode::CPSC, 1420, "Again", 3),
            Err(RegistryError::DuplicateCourse(CourseKey::new(
                SubjectCode::CPSC,
                1420
            )))
        );
        assert_eq!(system.courses().len(), 2);
    }

    #[test]
    fn test_prerequisite_summary() {
        let mut system = system();
        for number in [2430, 2600, 4100] {
            system
                .add_course(SubjectCode::CPSC, number, "Course", 5)
                .unwrap();
        }
        system
            .add_prerequisite(SubjectCode::CPSC, 4100, SubjectCode::CPSC, 2430)
            .unwrap();
        system
            .add_prerequisite(SubjectCode::CPSC, 4100, SubjectCode::CPSC, 2600)
            .unwrap();

        let course = system
            .find_course(CourseKey::new(SubjectCode::CPSC, 4100))
            .unwrap();
        assert_eq!(system.prerequisite_summary(course), "CPSC 2430 & CPSC 2600");

        let course = system
            .find_course(CourseKey::new(SubjectCode::CPSC, 2430))
            .unwrap();
        assert_eq!(system.prerequisite_summary(course), NO_PREREQUISITES);
    }

    #[test]
    fn test_prerequisite_missing_course() {
        let mut system = system();
        system
            .add_course(SubjectCode::CPSC, 1430, "Programming and Problem Solving II", 5)
            .unwrap();

        // Missing prerequisite
        assert_eq!(
            system.add_prerequisite(SubjectCode::CPSC, 1430, SubjectCode::CPSC, 1420),
            Err(RegistryError::CourseNotFound(CourseKey::new(
                SubjectCode::CPSC,
                1420
            )))
        );
        // Missing target
        assert_eq!(
            system.add_prerequisite(SubjectCode::CPSC, 9999, SubjectCode::CPSC, 1430),
            Err(RegistryError::CourseNotFound(CourseKey::new(
                SubjectCode::CPSC,
                9999
            )))
        );
        assert!(system.courses()[0].prerequisites().is_empty());
    }

    #[test]
    fn test_self_prerequisite_is_accepted() {
        let mut system = system();
        system.add_course(SubjectCode::CPSC, 5001, "Boot Camp I", 3).unwrap();
        system
            .add_prerequisite(SubjectCode::CPSC, 5001, SubjectCode::CPSC, 5001)
            .unwrap();

        let course = &system.courses()[0];
        assert_eq!(system.prerequisite_summary(course), "CPSC 5001");
    }

    #[test]
    fn test_section_checks_course_before_instructor() {
        let mut system = system();
        assert_eq!(
            system.add_section(
                SubjectCode::CPSC,
                2430,
                1,
                "Nobody",
                Quarter::Fall,
                Year(2018),
                15,
                Building::PIGT,
                207,
            ),
            Err(RegistryError::CourseNotFound(CourseKey::new(
                SubjectCode::CPSC,
                2430
            )))
        );
        assert!(system.sections().is_empty());
    }

    #[test]
    fn test_section_resolves_first_faculty_by_last_name() {
        let mut system = system();
        let reeder = add_reeder(&mut system);
        system
            .add_faculty(
                "Tom",
                "Reeder",
                FacultyType::Lecturer,
                Building::ENGR,
                510,
                "treeder@seattleu.edu",
            )
            .unwrap();
        let course = system
            .add_course(SubjectCode::CPSC, 2430, "Data Structures", 5)
            .unwrap();

        let id = system
            .add_section(
                SubjectCode::CPSC,
                2430,
                1,
                "Reeder",
                Quarter::Fall,
                Year(2018),
                15,
                Building::PIGT,
                207,
            )
            .unwrap();

        let section = system.section(id).unwrap();
        assert_eq!(section.instructor, reeder);
        assert_eq!(section.course, course);
        assert_eq!(section.location, Room::new(Building::PIGT, 207));
    }

    #[test]
    fn test_assign_advisor() {
        let mut system = system();
        let reeder = add_reeder(&mut system);
        system
            .add_student(
                "Ada",
                "Lovelace",
                StudentType::Grad,
                StudentProgram::CERT,
                Quarter::Fall,
                Year(2018),
            )
            .unwrap();

        assert_eq!(
            system.assign_advisor("Ada", "Lovelace", "Smith"),
            Err(RegistryError::PersonNotFound("Smith".to_string()))
        );
        assert_eq!(
            system.assign_advisor("Grace", "Hopper", "Reeder"),
            Err(RegistryError::PersonNotFound("Grace Hopper".to_string()))
        );
        assert_eq!(system.find_student("Ada", "Lovelace").unwrap().advisor(), None);

        assert_eq!(system.assign_advisor("Ada", "Lovelace", "Reeder"), Ok(reeder));
        let advisor = system
            .find_student("Ada", "Lovelace")
            .and_then(|s| s.advisor())
            .and_then(|id| system.faculty_member(id))
            .unwrap();
        assert_eq!(advisor.last_name(), "Reeder");
    }

    #[test]
    fn test_list_of_named() {
        let mut system = system();
        system.add_subject(SubjectCode::BIOL, "Biology").unwrap();

        let listing = system.list_of_named("subject").unwrap();
        assert_eq!(listing.category(), Category::Subjects);
        assert_eq!(listing.len(), 1);

        assert!(matches!(
            system.list_of_named("rooms"),
            Err(RegistryError::UnknownCategory(_))
        ));
    }
}
