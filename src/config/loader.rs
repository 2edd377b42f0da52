//! Configuration loading

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{WebpageError, WebpageResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WebpageResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| WebpageError::io(path, e))?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text; `path` is only used for diagnostics.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> WebpageResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WebpageError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    validate(&config, path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Reject names that would resolve outside the directory they are joined onto.
///
/// These values become single path components under the workspace or the
/// assets dir, and the deploy dir is removed recursively on every build.
fn validate(config: &Config, path: &Path) -> WebpageResult<()> {
    let invalid = |key: &str, value: &str| WebpageError::InvalidConfig {
        file: path.to_path_buf(),
        message: format!("{key} must be a single file or directory name, got '{value}'"),
    };

    let names = [
        ("project.name", &config.project.name),
        ("build.config", &config.build.config),
        ("build.toolchain_project", &config.build.toolchain_project),
        ("deploy.dir_name", &config.deploy.dir_name),
        ("deploy.template", &config.deploy.template),
    ];
    for (key, value) in names {
        if !is_single_component(value) {
            return Err(invalid(key, value));
        }
    }
    for file in &config.deploy.static_files {
        if !is_single_component(file) {
            return Err(invalid("deploy.static_files", file));
        }
    }
    for ext in &config.deploy.artifact_extensions {
        if ext.is_empty() || !is_single_component(&format!("{}.{ext}", config.project.name)) {
            return Err(invalid("deploy.artifact_extensions", ext));
        }
    }
    Ok(())
}

/// Exactly one normal component: not empty, absolute, `.`, `..` or nested.
fn is_single_component(value: &str) -> bool {
    if value.contains(|c: char| c == '/' || c == '\\') {
        return false;
    }
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Load `path` if present, defaults otherwise; env overrides applied last.
///
/// A config file that exists but does not parse is an error.
pub fn load_or_default(path: &Path) -> WebpageResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = if path.is_file() {
        load_with_warnings(path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (WEBPAGE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // WEBPAGE_BUILD_EMSCRIPTEN
    if let Some(val) = get_env("WEBPAGE_BUILD_EMSCRIPTEN") {
        config.build.emscripten = val.to_lowercase() != "false" && val != "0";
    }

    if let Some(dir) = get_env("WEBPAGE_FIPS_DIR").filter(|v| !v.is_empty()) {
        config.project.fips_dir = Some(PathBuf::from(dir));
    }

    if let Some(dir) = get_env("WEBPAGE_SDK_DIR").filter(|v| !v.is_empty()) {
        config.toolchain.sdk_dir = Some(PathBuf::from(dir));
    }

    if let Some(python) = get_env("WEBPAGE_PYTHON").filter(|v| !v.is_empty()) {
        config.serve.python = python;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "project",
        "name",
        "fips_dir",
        "build",
        "emscripten",
        "config",
        "toolchain_project",
        "deploy",
        "dir_name",
        "assets_dir",
        "static_files",
        "template",
        "artifact_extensions",
        "serve",
        "url",
        "python",
        "server_script",
        "toolchain",
        "sdk_dir",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
