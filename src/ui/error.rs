use voxel_webpage::WebpageError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    format_error_with(err, ui.color, ui.unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }

    if let Some(fix) = err.downcast_ref::<WebpageError>().and_then(fix_hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(fix).render(supports_color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    eprint!("{}", format_error(err, ui));
}

fn fix_hint(err: &WebpageError) -> Option<String> {
    let path = err.path().map(|p| p.display().to_string());
    match (err, path) {
        (WebpageError::MissingAsset { .. }, Some(path)) => Some(format!(
            "Check that {path} exists, or adjust `deploy.static_files` in webpage.toml"
        )),
        (WebpageError::Io { .. }, Some(path)) => {
            Some(format!("Check that {path} is accessible and writable"))
        }
        (WebpageError::InvalidConfig { .. }, Some(path)) => {
            Some(format!("Fix {path} and try again."))
        }
        (WebpageError::BuildStepFailed { step, config, .. }, _) => Some(format!(
            "Run `./fips {step} {config}` in the project directory for the full output"
        )),
        (WebpageError::CommandFailed { .. }, _) => {
            Some("Is the fips launcher present and executable?".to_string())
        }
        _ => None,
    }
}
