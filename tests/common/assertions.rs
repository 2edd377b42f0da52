//! Custom assertion macros for CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

#![allow(dead_code)]

use std::path::Path;

/// Sorted file names directly inside `dir`
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}

/// Assert that a file exists in the deploy directory.
///
/// # Example
/// ```ignore
/// assert_deployed!(env, "index.html");
/// ```
#[macro_export]
macro_rules! assert_deployed {
    ($env:expr, $name:expr) => {
        let full_path = $env.webpage_dir().join($name);
        assert!(
            full_path.is_file(),
            "Expected '{}' in the deploy directory, but it doesn't exist.\n\
             Files found:\n  {}",
            $name,
            $crate::common::list_files(&$env.webpage_dir()).join("\n  ")
        );
    };
}

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Generated web page");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}
