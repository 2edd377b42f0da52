//! Verb dispatch
//!
//! The first positional argument selects the verb. A missing or unknown verb
//! is a usage error: it is reported through the log sink and the process
//! still exits normally.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Build,
    Serve,
    Help,
}

impl Verb {
    pub fn parse(arg: &str) -> Option<Self> {
        match arg {
            "build" => Some(Verb::Build),
            "serve" => Some(Verb::Serve),
            "help" => Some(Verb::Help),
            _ => None,
        }
    }
}

/// Result of looking at the positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerbRequest {
    Run(Verb),
    Missing,
    Invalid(String),
}

impl VerbRequest {
    /// Only the first argument matters; extra arguments are ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args.first() {
            None => VerbRequest::Missing,
            Some(arg) => match Verb::parse(arg.as_ref()) {
                Some(verb) => VerbRequest::Run(verb),
                None => VerbRequest::Invalid(arg.as_ref().to_string()),
            },
        }
    }
}

/// Usage error text, for requests that do not name a verb
pub struct UsageError<'a>(pub &'a VerbRequest);

impl fmt::Display for UsageError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            VerbRequest::Missing => write!(f, "Param 'build' or 'serve' expected"),
            VerbRequest::Invalid(arg) => {
                write!(f, "Invalid param '{arg}', expected 'build' or 'serve'")
            }
            VerbRequest::Run(_) => Ok(()),
        }
    }
}

/// Command lines shown by `webpage help`
pub const HELP_COMMANDS: [&str; 2] = ["webpage build", "webpage serve"];

/// Description line shown under the commands
pub const HELP_DESCRIPTION: &str = "    build voxel-test webpage";
