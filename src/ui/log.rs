//! Console log sink
//!
//! Status lines go to stdout, warnings and errors to stderr. Debug lines are
//! only shown with `-v`.

use voxel_webpage::domain::ports::{LogColor, LogLevel, LogSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct ConsoleLog {
    ui: UiContext,
}

impl ConsoleLog {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    /// Rendered line, or `None` when the level is filtered out
    fn format_line(&self, level: LogLevel, color: Option<LogColor>, message: &str) -> Option<String> {
        let (color_on, unicode) = (self.ui.color, self.ui.unicode);
        match level {
            LogLevel::Debug if self.ui.verbose == 0 => None,
            LogLevel::Error => Some(format!("{} {}", Icon::Error.colored(color_on, unicode), message)),
            LogLevel::Warn => Some(format!(
                "{} {}",
                Icon::Warning.colored(color_on, unicode),
                message
            )),
            LogLevel::Debug | LogLevel::Info => {
                Some(ColoredText::new(message, color).render(color_on))
            }
        }
    }
}

impl LogSink for ConsoleLog {
    fn log(&self, level: LogLevel, color: Option<LogColor>, message: &str) {
        let Some(line) = self.format_line(level, color, message) else {
            return;
        };
        match level {
            LogLevel::Warn | LogLevel::Error => eprintln!("{line}"),
            LogLevel::Debug | LogLevel::Info => println!("{line}"),
        }
    }
}
