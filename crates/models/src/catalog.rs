use serde::Serialize;
use std::fmt::{Display as FmtDisplay, Formatter, Result as FmtResult};
use strum::{AsRefStr, Display, EnumIter, EnumProperty, EnumString, IntoEnumIterator};

/// Department code a course is listed under
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum SubjectCode {
    BIOL,
    CHEM,
    CPSC,
    MATH,
}

impl SubjectCode {
    pub fn all() -> Vec<SubjectCode> {
        SubjectCode::iter().collect()
    }
}

/// A subject code together with its human readable description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub code: SubjectCode,
    pub description: String,
}

impl Subject {
    pub fn new(code: SubjectCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

/// Campus buildings that hold offices and classrooms
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    EnumProperty,
)]
pub enum Building {
    #[strum(props(name = "Administration Building"))]
    ADMN,
    #[strum(props(name = "Bannan Center"))]
    BANN,
    #[strum(props(name = "Engineering Building"))]
    ENGR,
    #[strum(props(name = "Lemieux Library"))]
    LEML,
    #[strum(props(name = "Pigott Building"))]
    PIGT,
}

impl Building {
    pub fn full_name(&self) -> &'static str {
        self.get_str("name").unwrap_or_default()
    }
}

/// A room inside a campus building, used for offices and section locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Room {
    pub building: Building,
    pub number: u16,
}

impl Room {
    pub fn new(building: Building, number: u16) -> Self {
        Self { building, number }
    }
}

impl FmtDisplay for Room {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.pad(&format!("{} {}", self.building, self.number))
    }
}
