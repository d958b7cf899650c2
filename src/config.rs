use std::collections::HashMap;
use std::env as stdenv;
use std::path::PathBuf;

/// Environment variable naming a course file to load at startup.
pub const FILE_VAR: &str = "COURSE_CATALOG_FILE";
/// Standard `tracing` filter variable; wins over `--verbose`.
pub const LOG_VAR: &str = "RUST_LOG";

/// Settings for one run of the catalog tool.
///
/// Built from the command line flags plus a snapshot of the process
/// environment. Flags win over environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Course file to load before the menu starts, if any.
    pub preload: Option<PathBuf>,
    /// Filter directive handed to the log subscriber.
    pub log_filter: String,
}

impl Config {
    /// Resolve settings against the current process environment.
    pub fn new(file: Option<PathBuf>, verbose: bool) -> Self {
        Self::with_vars(file, verbose, &stdenv::vars().collect())
    }

    /// Resolve settings against an explicit set of variables.
    pub fn with_vars(file: Option<PathBuf>, verbose: bool, vars: &HashMap<String, String>) -> Self {
        let preload = file.or_else(|| non_empty(vars, FILE_VAR).map(PathBuf::from));
        let log_filter = match non_empty(vars, LOG_VAR) {
            Some(filter) => filter.to_string(),
            None if verbose => "debug".to_string(),
            None => "warn".to_string(),
        };
        Self {
            preload,
            log_filter,
        }
    }
}

fn non_empty<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}
