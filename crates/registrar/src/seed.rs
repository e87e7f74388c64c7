use log::{info, warn};
use models::{
    catalog::{Building, SubjectCode},
    person::{FacultyType, StudentProgram, StudentType},
    term::{Quarter, Year},
};
use registry::{RegistrationSystem, RegistryError};

type FacultyRow = (&'static str, &'static str, FacultyType, Building, u16, &'static str);
type StudentRow = (&'static str, &'static str, StudentType, StudentProgram, Quarter, u16);
type CourseRow = (SubjectCode, u16, &'static str, u8);
type PrerequisiteRow = (SubjectCode, u16, SubjectCode, u16);
type SectionRow = (SubjectCode, u16, u16, &'static str, Quarter, u16, u16, Building, u16);

const FACULTY: &[FacultyRow] = &[
    ("Adair", "Dingle", FacultyType::Professor, Building::ENGR, 531, "dingle@seattleu.edu"),
    ("Steven", "Hanks", FacultyType::Lecturer, Building::ENGR, 511, "hankssteven@seattleu.edu"),
    ("Pejman", "Khadivi", FacultyType::AssistantProfessor, Building::ENGR, 521, "khadivip@seattleu.edu"),
    ("Michael", "Koenig", FacultyType::Lecturer, Building::ENGR, 520, "koenigm@seattleu.edu"),
    ("Eric", "Larson", FacultyType::Professor, Building::ENGR, 528, "elarson@seattleu.edu"),
    ("Richard", "LeBlanc", FacultyType::Professor, Building::ENGR, 527, "leblanc@seattleu.edu"),
    ("Lin", "Li", FacultyType::AssistantProfessor, Building::ENGR, 529, "lil@seattleu.edu"),
    ("David", "Lillethun", FacultyType::AssistantProfessor, Building::ENGR, 506, "lillethd@seattleu.edu"),
    ("Kevin", "Lundeen", FacultyType::Instructor, Building::ENGR, 519, "lundeenk@seattleu.edu"),
    ("Michael", "McKee", FacultyType::Lecturer, Building::ENGR, 519, "mckeem@seattleu.edu"),
    ("Aditya", "Mishra", FacultyType::AssistantProfessor, Building::ENGR, 507, "mishraa@seattleu.edu"),
    ("James", "Obare", FacultyType::Instructor, Building::ENGR, 502, "obarej@seattleu.edu"),
    ("Sheila", "Oh", FacultyType::SeniorInstructor, Building::ENGR, 504, "ohsh@seattleu.edu"),
    ("Susan", "Reeder", FacultyType::SeniorInstructor, Building::ENGR, 505, "sreeder@seattleu.edu"),
    ("Roshanak", "Roshandel", FacultyType::AssociateProfessor, Building::ENGR, 508, "roshanak@seattleu.edu"),
    ("Jason", "Wong", FacultyType::Instructor, Building::ENGR, 526, "wongja@seattleu.edu"),
    ("Yingwu", "Zhu", FacultyType::AssociateProfessor, Building::ENGR, 530, "zhuy@seattleu.edu"),
];

const STUDENTS: &[StudentRow] = &[
    ("Michael", "Bluth", StudentType::Undergrad, StudentProgram::BSCS, Quarter::Fall, 2018),
    ("Gob", "Bluth", StudentType::Undergrad, StudentProgram::BACS, Quarter::Spring, 2018),
    ("Buster", "Bluth", StudentType::Undergrad, StudentProgram::BSCS, Quarter::Winter, 2018),
    ("Lucille", "Bluth", StudentType::Undergrad, StudentProgram::BSCS, Quarter::Winter, 2017),
    ("Lindsay", "Funke", StudentType::Undergrad, StudentProgram::BACS, Quarter::Fall, 2018),
    ("Tobias", "Funke", StudentType::Undergrad, StudentProgram::BACS, Quarter::Fall, 2017),
    ("Maeby", "Funke", StudentType::Undergrad, StudentProgram::BSCS, Quarter::Spring, 2017),
    ("Kitty", "Sanchez", StudentType::NonMatriculatedUndergrad, StudentProgram::UNDECIDED, Quarter::Fall, 2018),
    ("Edsger", "Dijkstra", StudentType::Grad, StudentProgram::CERT, Quarter::Research, 2018),
    ("Ada", "Lovelace", StudentType::Grad, StudentProgram::CERT, Quarter::Fall, 2018),
    ("Grace", "Hopper", StudentType::Grad, StudentProgram::MSCS, Quarter::Winter, 2017),
    ("Marie", "Curie", StudentType::NonMatriculatedGrad, StudentProgram::UNDECIDED, Quarter::Fall, 2017),
    ("Alan", "Turing", StudentType::Grad, StudentProgram::CERT, Quarter::Research, 2017),
    ("Katherine", "Johnson", StudentType::Grad, StudentProgram::MSCS, Quarter::Fall, 2018),
];

const SUBJECTS: &[(SubjectCode, &str)] = &[
    (SubjectCode::BIOL, "Biology"),
    (SubjectCode::CHEM, "Chemistry"),
    (SubjectCode::CPSC, "Computer Science"),
    (SubjectCode::MATH, "Mathematics"),
];

const COURSES: &[CourseRow] = &[
    (SubjectCode::CPSC, 1420, "Programming and Problem Solving I", 5),
    (SubjectCode::CPSC, 1430, "Programming and Problem Solving II", 5),
    (SubjectCode::CPSC, 2430, "Data Structures", 5),
    (SubjectCode::CPSC, 2500, "Computer Organization", 5),
    (SubjectCode::CPSC, 2600, "Foundations of Computer Science", 5),
    (SubjectCode::CPSC, 3200, "Object-Oriented Development", 5),
    (SubjectCode::CPSC, 3300, "Fundamentals of Databases", 5),
    (SubjectCode::CPSC, 3400, "Languages and Computation", 5),
    (SubjectCode::CPSC, 3500, "Computing Systems", 5),
    (SubjectCode::CPSC, 4100, "Design and Analysis of Algorithms", 5),
    (SubjectCode::CPSC, 5001, "Programming Boot Camp I", 3),
    (SubjectCode::CPSC, 5002, "Programming Boot Camp II", 3),
    (SubjectCode::CPSC, 5003, "Programming Boot Camp III", 3),
    (SubjectCode::CPSC, 5011, "Object-Oriented Concepts", 3),
    (SubjectCode::CPSC, 5021, "Database Systems", 3),
    (SubjectCode::CPSC, 5031, "Data Structures and Algorithms", 3),
    (SubjectCode::CPSC, 5041, "Computing Systems Principles I", 3),
    (SubjectCode::CPSC, 5042, "Computing Systems Principles II", 3),
    (SubjectCode::CPSC, 5051, "Fundamentals of Software Engineering", 3),
    (SubjectCode::CPSC, 5200, "Software Architecture and Design", 5),
    (SubjectCode::CPSC, 5800, "Ethics and Professional Issues in Computing", 2),
    (SubjectCode::CPSC, 5600, "Parallel Computing", 5),
    (SubjectCode::CPSC, 5610, "Artificial Intelligence", 5),
    (SubjectCode::CPSC, 5510, "Computer Networks", 5),
    (SubjectCode::CPSC, 5520, "Distributed Systems", 5),
    (SubjectCode::CPSC, 5240, "Software as a Service", 5),
    (SubjectCode::CPSC, 5250, "Mobile Software Development", 5),
    (SubjectCode::CPSC, 5300, "Physical Database Design & Optimization", 5),
    (SubjectCode::CPSC, 5400, "Compiler Principles and Techniques", 5),
    (SubjectCode::CPSC, 5700, "Computer Graphics", 5),
];

const PREREQUISITES: &[PrerequisiteRow] = &[
    (SubjectCode::CPSC, 1430, SubjectCode::CPSC, 1420),
    (SubjectCode::CPSC, 2430, SubjectCode::CPSC, 1430),
    (SubjectCode::CPSC, 2500, SubjectCode::CPSC, 1430),
    (SubjectCode::CPSC, 2600, SubjectCode::CPSC, 1430),
    (SubjectCode::CPSC, 3200, SubjectCode::CPSC, 2430),
    (SubjectCode::CPSC, 3300, SubjectCode::CPSC, 2430),
    (SubjectCode::CPSC, 3400, SubjectCode::CPSC, 2430),
    (SubjectCode::CPSC, 3400, SubjectCode::CPSC, 2600),
    (SubjectCode::CPSC, 3500, SubjectCode::CPSC, 2430),
    (SubjectCode::CPSC, 3500, SubjectCode::CPSC, 2500),
    (SubjectCode::CPSC, 4100, SubjectCode::CPSC, 2430),
    (SubjectCode::CPSC, 4100, SubjectCode::CPSC, 2600),
    (SubjectCode::CPSC, 5002, SubjectCode::CPSC, 5001),
    (SubjectCode::CPSC, 5003, SubjectCode::CPSC, 5002),
    (SubjectCode::CPSC, 5011, SubjectCode::CPSC, 5003),
    (SubjectCode::CPSC, 5021, SubjectCode::CPSC, 5003),
    (SubjectCode::CPSC, 5042, SubjectCode::CPSC, 5041),
    (SubjectCode::CPSC, 5200, SubjectCode::CPSC, 5011),
    (SubjectCode::CPSC, 5200, SubjectCode::CPSC, 5051),
    (SubjectCode::CPSC, 5600, SubjectCode::CPSC, 5031),
    (SubjectCode::CPSC, 5600, SubjectCode::CPSC, 5042),
    (SubjectCode::CPSC, 5610, SubjectCode::CPSC, 5031),
    (SubjectCode::CPSC, 5510, SubjectCode::CPSC, 5042),
    (SubjectCode::CPSC, 5520, SubjectCode::CPSC, 5042),
    (SubjectCode::CPSC, 5240, SubjectCode::CPSC, 5042),
    (SubjectCode::CPSC, 5250, SubjectCode::CPSC, 5011),
    (SubjectCode::CPSC, 5300, SubjectCode::CPSC, 5021),
    (SubjectCode::CPSC, 5700, SubjectCode::CPSC, 5031),
];

const SECTIONS: &[SectionRow] = &[
    (SubjectCode::CPSC, 2430, 1, "Reeder", Quarter::Fall, 2018, 15, Building::PIGT, 207),
    (SubjectCode::CPSC, 2430, 1, "Dingle", Quarter::Fall, 2018, 30, Building::PIGT, 207),
    (SubjectCode::CPSC, 2600, 1, "Oh", Quarter::Fall, 2018, 30, Building::LEML, 122),
    (SubjectCode::CPSC, 4100, 1, "Zhu", Quarter::Fall, 2018, 34, Building::PIGT, 102),
    (SubjectCode::CPSC, 5011, 1, "Hanks", Quarter::Fall, 2018, 20, Building::ADMN, 203),
    (SubjectCode::CPSC, 5011, 2, "Oh", Quarter::Fall, 2018, 30, Building::LEML, 122),
    (SubjectCode::CPSC, 5021, 1, "McKee", Quarter::Fall, 2018, 36, Building::BANN, 401),
    (SubjectCode::CPSC, 5021, 2, "McKee", Quarter::Fall, 2018, 30, Building::LEML, 122),
    (SubjectCode::CPSC, 5510, 1, "Lillethun", Quarter::Fall, 2018, 30, Building::ENGR, 304),
    (SubjectCode::CPSC, 5600, 2, "Lundeen", Quarter::Fall, 2018, 20, Building::BANN, 402),
];

/// Outcome counts for one seeding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub added: usize,
    pub rejected: usize,
}

impl SeedSummary {
    /// Counts one add; rejections are logged and seeding continues
    fn record<T>(&mut self, step: &str, result: Result<T, RegistryError>) {
        match result {
            Ok(_) => self.added += 1,
            Err(e) => {
                warn!("Skipping {step}: {e}");
                self.rejected += 1;
            }
        }
    }
}

/// Populates the registry with the sample catalog. Dependencies are added
/// first: courses before prerequisites, courses and faculty before sections.
pub fn populate(system: &mut RegistrationSystem) -> SeedSummary {
    let mut summary = SeedSummary::default();

    for &(first, last, rank, building, room, email) in FACULTY {
        summary.record("faculty", system.add_faculty(first, last, rank, building, room, email));
    }

    for &(first, last, status, program, quarter, year) in STUDENTS {
        summary.record(
            "student",
            system.add_student(first, last, status, program, quarter, Year(year)),
        );
    }

    for &(code, description) in SUBJECTS {
        summary.record("subject", system.add_subject(code, description));
    }

    for &(subject, number, name, credits) in COURSES {
        summary.record("course", system.add_course(subject, number, name, credits));
    }

    for &(subject, number, prereq_subject, prereq_number) in PREREQUISITES {
        summary.record(
            "prerequisite",
            system.add_prerequisite(subject, number, prereq_subject, prereq_number),
        );
    }

    for &(subject, number, section, instructor, quarter, year, capacity, building, room) in
        SECTIONS
    {
        summary.record(
            "section",
            system.add_section(
                subject,
                number,
                section,
                instructor,
                quarter,
                Year(year),
                capacity,
                building,
                room,
            ),
        );
    }

    info!(
        "Seeded registry: {} added, {} rejected",
        summary.added, summary.rejected
    );
    summary
}
