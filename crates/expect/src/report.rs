//! Rendering of assertion failures.

use std::fmt;
use std::panic::Location;
use std::path::Path;

use crate::Options;

const RED: &str = "\x1b[0;31m";
const RESET: &str = "\x1b[0m";

/// A failed assertion, tied to the source location of the asserting call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub file: String,
    pub line: u32,
    pub message: String,
}

impl Failure {
    pub fn new(location: &Location<'_>, message: impl Into<String>, options: &Options) -> Self {
        let file = if options.full_path {
            location.file().to_string()
        } else {
            base_name(location.file()).to_string()
        };
        Failure {
            file,
            line: location.line(),
            message: message.into(),
        }
    }

    /// The panic message for this failure: `file:line FAIL message`,
    /// colored when `options.color` is set.
    pub fn render(&self, options: &Options) -> String {
        if options.color {
            format!("{}{}{}", RED, self, RESET)
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} FAIL {}", self.file, self.line, self.message)
    }
}

fn base_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}
