//! A small in-memory course catalog.
//!
//! This crate loads course records (number, title, prerequisites) from a
//! comma-delimited text file, keeps them ordered by course number and answers
//! "list everything" and "show one course" queries. Parsing is forgiving: bad
//! lines are reported and skipped, and a load succeeds as long as at least one
//! record survives.
//!
//! The main entry point for applications is [`Session`], which owns the loaded
//! catalog and refuses queries until a load has succeeded. [`Menu`] wraps a
//! session in the interactive numbered menu used by the binary.

mod actions;
pub mod catalog;
pub mod config;
pub mod course;
pub mod error;
pub mod loader;
mod menu;
pub mod session;

pub use catalog::{Catalog, CourseDetail, CourseSummary, Lookup};
pub use course::Course;
pub use error::LoadError;
pub use loader::LoadReport;
pub use menu::{InvalidChoice, LineSource, Menu, MenuChoice};
pub use session::{Session, SessionError};
