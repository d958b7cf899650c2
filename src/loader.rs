//! Parsing of comma-delimited course files.
//!
//! Every non-blank line is a record: `NUMBER, Title[, PREREQ...]`. Problems
//! with individual lines are collected in the [`LoadReport`] and the line is
//! skipped; only an unreadable source or a file without a single valid record
//! makes the whole load fail.

use crate::catalog::Catalog;
use crate::course::{Course, normalize_number};
use crate::error::LoadError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of one load attempt: the catalog on success plus every diagnostic, in line order.
#[derive(Debug)]
pub struct LoadReport {
    source: PathBuf,
    catalog: Option<Catalog>,
    course_count: usize,
    errors: Vec<LoadError>,
}

impl LoadReport {
    fn failure(source: &Path, errors: Vec<LoadError>) -> Self {
        Self {
            source: source.to_path_buf(),
            catalog: None,
            course_count: 0,
            errors,
        }
    }

    fn success(source: &Path, catalog: Catalog, errors: Vec<LoadError>) -> Self {
        Self {
            source: source.to_path_buf(),
            course_count: catalog.len(),
            catalog: Some(catalog),
            errors,
        }
    }

    /// Whether the load produced a usable catalog.
    pub fn is_success(&self) -> bool {
        self.course_count > 0
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Number of courses loaded; stays valid after [`LoadReport::take_catalog`].
    pub fn course_count(&self) -> usize {
        self.course_count
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Move the catalog out, leaving the diagnostics behind.
    pub fn take_catalog(&mut self) -> Option<Catalog> {
        self.catalog.take()
    }

    /// All diagnostics in the order they were produced.
    ///
    /// On success these are warnings about skipped lines; on failure the last
    /// entry explains why the load as a whole was rejected.
    pub fn errors(&self) -> &[LoadError] {
        &self.errors
    }

    /// The diagnostics rendered as user-facing messages.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Load a catalog from a file on disk.
///
/// The file is only held open for the duration of this call.
pub fn load_path(path: impl AsRef<Path>) -> LoadReport {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot open course file");
            return LoadReport::failure(
                path,
                vec![LoadError::SourceUnreadable {
                    path: path.to_path_buf(),
                }],
            );
        }
    };
    load_reader(BufReader::new(file), path)
}

/// Load a catalog from any line-oriented reader.
///
/// `source` is only used to name the input in messages.
pub fn load_reader<R: BufRead>(mut reader: R, source: &Path) -> LoadReport {
    let mut catalog = Catalog::new();
    let mut errors = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(path = %source.display(), line = line_no + 1, error = %e, "course file read failed");
                return LoadReport::failure(
                    source,
                    vec![LoadError::SourceRead {
                        path: source.to_path_buf(),
                        reason: e.to_string(),
                    }],
                );
            }
        }
        line_no += 1;

        // Encoding problems stay local to the line; bad bytes become U+FFFD.
        let line = String::from_utf8_lossy(&buf);

        let course = match parse_line(line_no, &line) {
            Ok(Some(course)) => course,
            Ok(None) => continue,
            Err(e) => {
                debug!(line = line_no, reason = %e, "skipping course line");
                errors.push(e);
                continue;
            }
        };

        if let Err(rejected) = catalog.insert(course) {
            let e = LoadError::DuplicateNumber {
                line: line_no,
                number: rejected.number,
            };
            debug!(line = line_no, reason = %e, "skipping course line");
            errors.push(e);
        }
    }

    if catalog.is_empty() {
        warn!(path = %source.display(), skipped = errors.len(), "no valid course data");
        errors.push(LoadError::NoValidData {
            path: source.to_path_buf(),
        });
        return LoadReport::failure(source, errors);
    }

    info!(
        path = %source.display(),
        courses = catalog.len(),
        warnings = errors.len(),
        "course catalog loaded"
    );
    LoadReport::success(source, catalog, errors)
}

/// Split a line on commas, trimming whitespace (including a stray `\r`) from each field.
fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Turn one line into a course.
///
/// Returns `Ok(None)` for blank lines. Duplicate numbers are not detected
/// here; that needs the catalog built so far.
fn parse_line(line_no: usize, line: &str) -> Result<Option<Course>, LoadError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields = split_fields(line);
    if fields.len() < 2 {
        return Err(LoadError::NotEnoughFields { line: line_no });
    }

    let number = normalize_number(fields[0]);
    let title = fields[1];
    if number.is_empty() {
        return Err(LoadError::MissingNumber { line: line_no });
    }
    if title.is_empty() {
        return Err(LoadError::MissingTitle { line: line_no });
    }

    let prerequisites = fields[2..]
        .iter()
        .map(|field| normalize_number(field))
        .filter(|prereq| !prereq.is_empty());

    Ok(Some(Course::new(number, title).with_prerequisites(prerequisites)))
}
