pub mod catalog;
pub mod course;
pub mod person;
pub mod section;
pub mod term;
