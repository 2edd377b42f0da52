//! Verb handlers for the `webpage` binary

mod build;
mod help;
mod serve;

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use voxel_webpage::application::{UsageError, Verb, VerbRequest, WebpageContext};
use voxel_webpage::config::{ColorMode, Config, ConfigWarning, CONFIG_FILE_NAME};
use voxel_webpage::domain::ports::LogSink;
use voxel_webpage::presentation::{factory, Cli};

use crate::ui::context::UiContext;
use crate::ui::log::ConsoleLog;

pub fn run(cli: &Cli) -> Result<()> {
    match VerbRequest::from_args(cli.args.as_slice()) {
        VerbRequest::Run(Verb::Build) => build::cmd_build(cli),
        VerbRequest::Run(Verb::Serve) => serve::cmd_serve(cli),
        VerbRequest::Run(Verb::Help) => {
            help::cmd_help(&console(cli, ColorMode::Auto));
            Ok(())
        }
        request => {
            // usage errors are reported, not failed
            console(cli, ColorMode::Auto).error(&UsageError(&request).to_string());
            Ok(())
        }
    }
}

pub fn console(cli: &Cli, config_color: ColorMode) -> ConsoleLog {
    ConsoleLog::new(UiContext::new(cli.verbose, cli.color, config_color))
}

/// Load config, apply env and CLI overrides, and resolve the fips paths
pub(crate) fn load_context(cli: &Cli) -> Result<(WebpageContext, ConsoleLog)> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let (project_dir, config, warnings) = resolve_config(cli, &cwd)?;

    let log = console(cli, config.output.color);
    for warning in &warnings {
        log.warn(&format_warning(warning));
    }

    let ctx = factory::create_context(config, &project_dir);
    log.debug(&format!("project: {}", ctx.project_dir.display()));
    log.debug(&format!("fips: {}", ctx.fips_dir.display()));
    log.debug(&format!("workspace: {}", ctx.workspace_dir().display()));
    Ok((ctx, log))
}

/// UI for rendering a failed verb; `[output] color` applies when the config still loads
pub fn error_ui(cli: &Cli) -> UiContext {
    let config_color = std::env::current_dir()
        .ok()
        .map(|cwd| config_color(cli, &cwd))
        .unwrap_or_default();
    UiContext::new(cli.verbose, cli.color, config_color)
}

fn config_color(cli: &Cli, cwd: &Path) -> ColorMode {
    resolve_config(cli, cwd)
        .map(|(_, config, _)| config.output.color)
        .unwrap_or_default()
}

fn resolve_config(cli: &Cli, cwd: &Path) -> Result<(PathBuf, Config, Vec<ConfigWarning>)> {
    let project_dir = cli
        .project
        .as_deref()
        .map(|p| absolutize(cwd, p))
        .unwrap_or_else(|| cwd.to_path_buf());

    let (mut config, warnings) = match &cli.config {
        Some(path) => {
            let path = absolutize(cwd, path);
            let (config, warnings) = Config::load_with_warnings(&path)?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_or_default(&project_dir.join(CONFIG_FILE_NAME))?,
    };

    if let Some(fips_dir) = &cli.fips_dir {
        config.project.fips_dir = Some(absolutize(cwd, fips_dir));
    }
    Ok((project_dir, config, warnings))
}

/// Join onto `cwd` and fold `.` and `..` lexically, so `parent()` means the parent
fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn format_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut message = format!("Unknown config key '{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    message
}
