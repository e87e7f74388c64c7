use chrono::{Datelike, Utc};
use serde::Serialize;
use std::{
    fmt::{Display as FmtDisplay, Formatter, Result as FmtResult},
    num::ParseIntError,
    ops::Deref,
    str::FromStr,
};
use strum::{AsRefStr, Display, EnumIter, EnumProperty, EnumString, IntoEnumIterator};

/// Academic term a section is offered in or a student starts in
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
pub enum Quarter {
    #[strum(serialize = "FQ", props(full = "fall"))]
    Fall,
    #[strum(serialize = "WQ", props(full = "winter"))]
    Winter,
    #[strum(serialize = "SQ", props(full = "spring"))]
    Spring,
    #[strum(serialize = "MQ", props(full = "summer"))]
    Summer,
    /// Research term, used by graduate certificate cohorts
    #[strum(serialize = "RQ", props(full = "research"))]
    Research,
}

impl Quarter {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn as_full_str(&self) -> &'static str {
        self.get_str("full").unwrap_or_default()
    }

    pub fn all() -> Vec<Quarter> {
        Quarter::iter().collect()
    }
}

/// A calendar year, e.g. the year a section is held or a student enrolled
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Year(pub u16);

impl Year {
    /// The current calendar year in UTC
    pub fn current() -> Self {
        Year(Utc::now().year() as u16)
    }

    /// Signed number of years from `earlier` to `self`
    pub fn years_since(self, earlier: Year) -> i32 {
        i32::from(self.0) - i32::from(earlier.0)
    }
}

impl Deref for Year {
    type Target = u16;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<u16> for Year {
    fn from(year: u16) -> Self {
        Year(year)
    }
}

impl FromStr for Year {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year = s.trim().parse()?;
        Ok(Year(year))
    }
}

impl FmtDisplay for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        FmtDisplay::fmt(&self.0, f)
    }
}
