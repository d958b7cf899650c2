use crate::catalog::{CourseDetail, Lookup};
use crate::loader::LoadReport;
use crate::menu::{Flow, LineSource};
use crate::session::{Session, SessionError};
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// One entry of the numbered menu.
///
/// Actions talk to the user only through the given input and output.
pub(crate) trait MenuAction {
    /// Runs the action and tells the menu whether to keep going.
    fn execute(
        self,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
        session: &mut Session,
    ) -> Result<Flow>;
}

/// Load a course file into the session, asking for the path unless one is given.
#[derive(Debug, Default)]
pub(crate) struct LoadData {
    pub path: Option<PathBuf>,
}

impl MenuAction for LoadData {
    fn execute(
        self,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
        session: &mut Session,
    ) -> Result<Flow> {
        let path = match self.path {
            Some(path) => path,
            None => {
                let Some(line) = input
                    .read_line("Enter file name to load (e.g., ABCU_Advising_Program_Input.csv): ")?
                else {
                    return Ok(Flow::Exit);
                };
                let name = line.trim();
                if name.is_empty() {
                    writeln!(out, "No file name entered.\n")?;
                    return Ok(Flow::Continue);
                }
                PathBuf::from(name)
            }
        };

        let report = session.load(&path);
        write_load_report(out, &report)?;
        Ok(Flow::Continue)
    }
}

/// Warnings are printed on success too.
fn write_load_report(out: &mut dyn Write, report: &LoadReport) -> Result<()> {
    for message in report.messages() {
        writeln!(out, "{}", message)?;
    }
    if report.is_success() {
        writeln!(
            out,
            "Data loaded successfully ({} courses).\n",
            report.course_count()
        )?;
    } else {
        writeln!(out)?;
    }
    Ok(())
}

/// Print every course, sorted by course number.
pub(crate) struct PrintCourseList;

impl MenuAction for PrintCourseList {
    fn execute(
        self,
        _input: &mut dyn LineSource,
        out: &mut dyn Write,
        session: &mut Session,
    ) -> Result<Flow> {
        let courses = match session.list_all() {
            Ok(courses) => courses,
            Err(e) => return not_loaded(out, e),
        };

        writeln!(out, "\nHere is a sample schedule:\n")?;
        for summary in courses {
            writeln!(out, "{}", summary)?;
        }
        writeln!(out)?;
        Ok(Flow::Continue)
    }
}

/// Ask for a course number and print that course with its prerequisites.
pub(crate) struct PrintCourse;

impl MenuAction for PrintCourse {
    fn execute(
        self,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
        session: &mut Session,
    ) -> Result<Flow> {
        if let Err(e) = session.catalog() {
            return not_loaded(out, e);
        }

        let Some(line) = input.read_line("Enter course number: ")? else {
            return Ok(Flow::Exit);
        };
        let number = line.trim();
        if number.is_empty() {
            writeln!(out, "Course number cannot be empty.\n")?;
            return Ok(Flow::Continue);
        }

        match session.lookup(number)? {
            Lookup::Found(course) => writeln!(out, "{}", CourseDetail(course))?,
            Lookup::NotFound(number) => {
                writeln!(out, "Course {} not found in the catalog.", number)?
            }
        }
        Ok(Flow::Continue)
    }
}

pub(crate) struct Exit;

impl MenuAction for Exit {
    fn execute(
        self,
        _input: &mut dyn LineSource,
        out: &mut dyn Write,
        _session: &mut Session,
    ) -> Result<Flow> {
        writeln!(out, "Exiting program. Goodbye!")?;
        Ok(Flow::Exit)
    }
}

fn not_loaded(out: &mut dyn Write, e: SessionError) -> Result<Flow> {
    debug!(reason = %e, "query refused");
    writeln!(out, "No data loaded. Please load a data structure first.\n")?;
    Ok(Flow::Continue)
}
