use voxel_webpage::application::{HELP_COMMANDS, HELP_DESCRIPTION};
use voxel_webpage::domain::ports::{LogColor, LogSink};

pub fn cmd_help(log: &dyn LogSink) {
    for command in HELP_COMMANDS {
        log.colored(LogColor::Warning, command);
    }
    log.info(HELP_DESCRIPTION);
}
