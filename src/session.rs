use crate::catalog::{Catalog, CourseSummary, Lookup};
use crate::loader::{self, LoadReport};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no course catalog is loaded")]
    NotLoaded,
}

/// Whether a catalog is available for queries.
#[derive(Debug, Default)]
pub enum SessionState {
    #[default]
    Empty,
    Loaded(Catalog),
}

/// Owns the currently loaded catalog for one interactive run.
///
/// A session starts out [`SessionState::Empty`]. Every call to
/// [`Session::load`] first drops whatever was loaded before, then swaps in
/// the freshly parsed catalog only if the load succeeded. Queries are refused
/// with [`SessionError::NotLoaded`] while the session is empty.
///
/// Example
/// ```
/// use course_catalog::{Session, SessionError};
/// let session = Session::new();
/// assert_eq!(session.catalog().unwrap_err(), SessionError::NotLoaded);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, SessionState::Loaded(_))
    }

    /// Load `path`, replacing any previously loaded catalog.
    ///
    /// The returned report keeps the diagnostics and the course count; the
    /// catalog itself moves into the session.
    pub fn load(&mut self, path: impl AsRef<Path>) -> LoadReport {
        self.state = SessionState::Empty;

        let mut report = loader::load_path(path);
        if let Some(catalog) = report.take_catalog() {
            self.state = SessionState::Loaded(catalog);
        }
        debug!(loaded = self.is_loaded(), "session load finished");
        report
    }

    pub fn catalog(&self) -> Result<&Catalog, SessionError> {
        match &self.state {
            SessionState::Loaded(catalog) => Ok(catalog),
            SessionState::Empty => Err(SessionError::NotLoaded),
        }
    }

    pub fn list_all(&self) -> Result<impl Iterator<Item = CourseSummary<'_>>, SessionError> {
        Ok(self.catalog()?.list_all())
    }

    pub fn lookup(&self, number: &str) -> Result<Lookup<'_>, SessionError> {
        Ok(self.catalog()?.lookup(number))
    }
}
