use crate::dtos::listing::CatalogResponse;
use registry::{Category, Listing, RegistrationSystem};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes each requested listing as a titled, column-aligned table
pub fn write_tables(
    out: &mut impl Write,
    system: &RegistrationSystem,
    categories: &[Category],
) -> Result<(), ReportError> {
    for &category in categories {
        writeln!(out)?;
        write_table(out, system, category)?;
    }
    Ok(())
}

/// Writes the requested listings as one pretty-printed JSON document
pub fn write_json(
    out: &mut impl Write,
    system: &RegistrationSystem,
    categories: &[Category],
) -> Result<(), ReportError> {
    let response = CatalogResponse::build(system, categories);
    serde_json::to_writer_pretty(&mut *out, &response)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_table(
    out: &mut impl Write,
    system: &RegistrationSystem,
    category: Category,
) -> io::Result<()> {
    match system.list_of(category) {
        Listing::Faculty(faculty) => {
            writeln!(out, "Faculty List")?;
            writeln!(
                out,
                "{:<12} {:<12} {:<15} {:<15} {:<4} {:<10} {}",
                "Last Name", "First Name", "SUID", "Type", "BLDG", "Room #", "Email"
            )?;
            for f in faculty {
                let office = f.office();
                writeln!(
                    out,
                    "{:<12} {:<12} {:<15} {:<15} {:<4} {:<10} {}",
                    f.last_name(),
                    f.first_name(),
                    f.suid(),
                    f.rank().as_ref(),
                    office.building.as_ref(),
                    office.number,
                    f.email()
                )?;
            }
        }
        Listing::Students(students) => {
            writeln!(out, "Student List")?;
            writeln!(
                out,
                "{:<12} {:<12} {:<15} {:<18} {:<15} {:<10} {:<10} {:<8} {}",
                "Last Name",
                "First Name",
                "SUID",
                "Status",
                "Study Year",
                "Program",
                "Quarter",
                "Year",
                "Email"
            )?;
            for s in students {
                let standing = s
                    .class_standing()
                    .map(|year| year.to_string())
                    .unwrap_or_default();
                writeln!(
                    out,
                    "{:<12} {:<12} {:<15} {:<18} {:<15} {:<10} {:<10} {:<8} {}",
                    s.last_name(),
                    s.first_name(),
                    s.suid(),
                    s.status().as_ref(),
                    standing,
                    s.program().as_ref(),
                    s.quarter().as_str(),
                    s.enroll_year(),
                    s.email().unwrap_or_default()
                )?;
            }
        }
        Listing::Subjects(subjects) => {
            writeln!(out, "Subject List")?;
            writeln!(out, "{:<6} {}", "Code", "Description")?;
            for subject in subjects {
                writeln!(out, "{:<6} {}", subject.code.as_ref(), subject.description)?;
            }
        }
        Listing::Courses(courses) => {
            writeln!(out, "Prerequisite List")?;
            writeln!(
                out,
                "{:<4} {:<4} {:<60} {}",
                "Code", "#", "Name", "Prerequisite"
            )?;
            for course in courses {
                writeln!(
                    out,
                    "{:<4} {:<4} {:<60} {}",
                    course.subject().as_ref(),
                    course.number(),
                    course.name(),
                    system.prerequisite_summary(course)
                )?;
            }
        }
        Listing::Sections(sections) => {
            writeln!(out, "Section List")?;
            writeln!(
                out,
                "{:<10} {:<10} {:<10} {:<15} {:<15} {}",
                "Course", "Section", "Instructor", "Quarter/Year", "Capacity", "BLDG/Room"
            )?;
            for section in sections {
                let course = system
                    .course(section.course)
                    .map(|c| c.key().to_string())
                    .unwrap_or_default();
                let instructor = system
                    .faculty_member(section.instructor)
                    .map(|f| f.last_name())
                    .unwrap_or_default();
                writeln!(
                    out,
                    "{:<10} {:<10} {:<10} {:<15} {:<15} {}",
                    course,
                    section.number,
                    instructor,
                    format!("{} {}", section.quarter, section.year),
                    section.capacity,
                    section.location
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{
        catalog::{Building, SubjectCode},
        person::{FacultyType, StudentProgram, StudentType},
        term::{Quarter, Year},
    };

    fn system() -> RegistrationSystem {
        let mut system = RegistrationSystem::with_current_year(Year(2019));
        system
            .add_course(SubjectCode::CPSC, 1420, "Programming and Problem Solving I", 5)
            .unwrap();
        system
            .add_course(SubjectCode::CPSC, 1430, "Programming and Problem Solving II", 5)
            .unwrap();
        system
            .add_prerequisite(SubjectCode::CPSC, 1430, SubjectCode::CPSC, 1420)
            .unwrap();
        system
            .add_faculty(
                "Susan",
                "Reeder",
                FacultyType::SeniorInstructor,
                Building::ENGR,
                505,
                "sreeder@seattleu.edu",
            )
            .unwrap();
        system
            .add_section(
                SubjectCode::CPSC,
                1430,
                1,
                "Reeder",
                Quarter::Fall,
                Year(2018),
                15,
                Building::PIGT,
                207,
            )
            .unwrap();
        system
            .add_student(
                "Grace",
                "Hopper",
                StudentType::Grad,
                StudentProgram::MSCS,
                Quarter::Winter,
                Year(2017),
            )
            .unwrap();
        system
            .add_student(
                "Maeby",
                "Funke",
                StudentType::Undergrad,
                StudentProgram::BSCS,
                Quarter::Spring,
                Year(2017),
            )
            .unwrap();
        system
    }

    fn render(system: &RegistrationSystem, category: Category) -> String {
        let mut out = Vec::new();
        write_table(&mut out, system, category).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_course_table_shows_prerequisites() {
        let table = render(&system(), Category::Courses);
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Prerequisite List");
        assert!(lines[2].starts_with("CPSC 1420 Programming and Problem Solving I"));
        assert!(lines[2].ends_with(" ----"));
        assert!(lines[3].starts_with("CPSC 1430 Programming and Problem Solving II"));
        assert!(lines[3].ends_with(" CPSC 1420"));
    }

    #[test]
    fn test_section_table_names_instructor() {
        let table = render(&system(), Category::Sections);
        let row = table.lines().nth(2).unwrap();
        let columns = row.split_whitespace().collect::<Vec<_>>();

        assert_eq!(
            columns,
            ["CPSC", "1430", "1", "Reeder", "FQ", "2018", "15", "PIGT", "207"]
        );
    }

    #[test]
    fn test_student_table_hides_grad_study_year() {
        let table = render(&system(), Category::Students);
        let lines = table.lines().collect::<Vec<_>>();

        assert!(!lines[2].contains("SENIOR") && !lines[2].contains("JUNIOR"));
        assert!(lines[2].starts_with("Hopper"));
        assert!(lines[3].contains("JUNIOR"));
    }

    #[test]
    fn test_faculty_table_columns() {
        let table = render(&system(), Category::Faculty);
        let row = table.lines().nth(2).unwrap();
        assert_eq!(
            row.split_whitespace().collect::<Vec<_>>(),
            ["Reeder", "Susan", "0", "SEN_INSTRUCT", "ENGR", "505", "sreeder@seattleu.edu"]
        );
    }

    #[test]
    fn test_write_tables_in_requested_order() {
        let mut out = Vec::new();
        write_tables(
            &mut out,
            &system(),
            &[Category::Sections, Category::Subjects],
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();

        let sections = text.find("Section List").unwrap();
        let subjects = text.find("Subject List").unwrap();
        assert!(sections < subjects);
        assert!(!text.contains("Faculty List"));
    }

    #[test]
    fn test_all_tables_start_with_faculty() {
        let mut out = Vec::new();
        write_tables(&mut out, &system(), &Category::all()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let titles = text
            .lines()
            .filter(|line| line.ends_with(" List"))
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            [
                "Faculty List",
                "Student List",
                "Subject List",
                "Prerequisite List",
                "Section List"
            ]
        );
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_json(
            &mut out,
            &system(),
            &[Category::Faculty, Category::Courses, Category::Sections],
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["courses"][1]["prerequisites"][0], "CPSC 1420");
        assert_eq!(value["courses"][0]["prerequisites"].as_array().unwrap().len(), 0);
        assert_eq!(value["sections"][0]["instructor"], "Reeder");
        assert_eq!(value["sections"][0]["location"], "PIGT 207");
        assert_eq!(value["sections"][0]["building"], "Pigott Building");
        assert_eq!(value["sections"][0]["term"], "fall 2018");
        assert_eq!(value["faculty"][0]["office_building"], "Engineering Building");
        assert!(value.get("students").is_none());
    }
}
