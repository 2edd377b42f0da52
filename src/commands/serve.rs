use anyhow::Result;
use voxel_webpage::application::ServeResult;
use voxel_webpage::domain::ports::LogSink;
use voxel_webpage::presentation::{factory, Cli};

use super::load_context;

pub fn cmd_serve(cli: &Cli) -> Result<()> {
    let (ctx, log) = load_context(cli)?;
    let request = ctx.serve_request();
    log.debug(&format!("server: {}", request.server_command));

    match factory::create_serve_use_case().execute(&request, &log)? {
        ServeResult::Unsupported(platform) => {
            log.debug(&format!("nothing served on '{platform}'"));
        }
        ServeResult::Stopped { outcome, .. } => {
            log.debug(&format!("serve finished: {outcome:?}"));
        }
    }
    Ok(())
}
