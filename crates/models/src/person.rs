use crate::{
    catalog::Room,
    term::{Quarter, Year},
};
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Index of a [`Student`] in the registry's student table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentId(pub usize);

/// Index of a [`Faculty`] member in the registry's faculty table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FacultyId(pub usize);

/// Employment status of a faculty member
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum PersonStatus {
    #[default]
    #[strum(serialize = "ACTIVE")]
    Active,
    #[strum(serialize = "INACTIVE")]
    Inactive,
    #[strum(serialize = "SABBATICAL")]
    Sabbatical,
}

/// Rank of a faculty member
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum FacultyType {
    #[strum(serialize = "INSTRUCT")]
    Instructor,
    #[strum(serialize = "SEN_INSTRUCT")]
    SeniorInstructor,
    #[strum(serialize = "LECTURE")]
    Lecturer,
    #[strum(serialize = "ASSTPROF")]
    AssistantProfessor,
    #[strum(serialize = "ASSOCPROF")]
    AssociateProfessor,
    #[strum(serialize = "PROF")]
    Professor,
}

/// Enrollment status of a student
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum StudentType {
    #[strum(serialize = "UNDERGRAD")]
    Undergrad,
    #[strum(serialize = "GRAD")]
    Grad,
    #[strum(serialize = "NONMAT_UNDERGRAD")]
    NonMatriculatedUndergrad,
    #[strum(serialize = "NONMAT_GRAD")]
    NonMatriculatedGrad,
}

impl StudentType {
    pub fn is_undergrad(self) -> bool {
        matches!(self, Self::Undergrad | Self::NonMatriculatedUndergrad)
    }
}

/// Degree or certificate program a student is enrolled in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum StudentProgram {
    BSCS,
    BACS,
    MSCS,
    CERT,
    UNDECIDED,
}

impl StudentProgram {
    pub fn all() -> Vec<StudentProgram> {
        StudentProgram::iter().collect()
    }
}

/// Undergraduate class standing
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum StudentYear {
    #[strum(serialize = "FRESHMAN")]
    Freshman,
    #[strum(serialize = "SOPHOMORE")]
    Sophomore,
    #[strum(serialize = "JUNIOR")]
    Junior,
    #[strum(serialize = "SENIOR")]
    Senior,
}

impl StudentYear {
    /// Classifies a student by the number of years since enrollment.
    /// Zero or negative gaps count as first year; three or more as senior.
    pub fn from_years_enrolled(years: i32) -> Self {
        match years {
            i32::MIN..=0 => Self::Freshman,
            1 => Self::Sophomore,
            2 => Self::Junior,
            _ => Self::Senior,
        }
    }
}

/// A student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    first_name: String,
    last_name: String,
    suid: u32,
    status: StudentType,
    program: StudentProgram,
    year: StudentYear,
    quarter: Quarter,
    enroll_year: Year,
    advisor: Option<FacultyId>,
    email: Option<String>,
}

impl Student {
    /// Creates a student whose study year is derived from `enroll_year`
    /// relative to `current_year`
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        status: StudentType,
        program: StudentProgram,
        quarter: Quarter,
        enroll_year: Year,
        current_year: Year,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            suid: 0,
            status,
            program,
            year: StudentYear::from_years_enrolled(current_year.years_since(enroll_year)),
            quarter,
            enroll_year,
            advisor: None,
            email: None,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Whether this student is identified by the given name pair
    pub fn is_named(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }

    pub fn suid(&self) -> u32 {
        self.suid
    }

    pub fn status(&self) -> StudentType {
        self.status
    }

    pub fn program(&self) -> StudentProgram {
        self.program
    }

    /// Study year as derived at enrollment, regardless of student type
    pub fn study_year(&self) -> StudentYear {
        self.year
    }

    /// Study year for undergraduates, `None` for graduate students
    pub fn class_standing(&self) -> Option<StudentYear> {
        self.status.is_undergrad().then_some(self.year)
    }

    pub fn quarter(&self) -> Quarter {
        self.quarter
    }

    pub fn enroll_year(&self) -> Year {
        self.enroll_year
    }

    pub fn advisor(&self) -> Option<FacultyId> {
        self.advisor
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_suid(&mut self, suid: u32) {
        self.suid = suid;
    }

    pub fn set_status(&mut self, status: StudentType) {
        self.status = status;
    }

    /// Switches the student to another program
    pub fn set_program(&mut self, program: StudentProgram) {
        self.program = program;
    }

    /// Records a new start term and re-derives the study year
    pub fn set_start(&mut self, quarter: Quarter, enroll_year: Year, current_year: Year) {
        self.quarter = quarter;
        self.enroll_year = enroll_year;
        self.year = StudentYear::from_years_enrolled(current_year.years_since(enroll_year));
    }

    pub fn set_advisor(&mut self, advisor: Option<FacultyId>) {
        self.advisor = advisor;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }
}

/// A faculty record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faculty {
    first_name: String,
    last_name: String,
    suid: u32,
    status: PersonStatus,
    rank: FacultyType,
    office: Room,
    email: String,
}

impl Faculty {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        rank: FacultyType,
        office: Room,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            suid: 0,
            status: PersonStatus::default(),
            rank,
            office,
            email: email.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Whether this faculty member is identified by the given name pair
    pub fn is_named(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }

    pub fn suid(&self) -> u32 {
        self.suid
    }

    pub fn status(&self) -> PersonStatus {
        self.status
    }

    pub fn rank(&self) -> FacultyType {
        self.rank
    }

    pub fn office(&self) -> Room {
        self.office
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_suid(&mut self, suid: u32) {
        self.suid = suid;
    }

    pub fn set_status(&mut self, status: PersonStatus) {
        self.status = status;
    }

    pub fn set_rank(&mut self, rank: FacultyType) {
        self.rank = rank;
    }

    pub fn set_office(&mut self, office: Room) {
        self.office = office;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }
}
