use anyhow::Result;
use voxel_webpage::domain::ports::LogSink;
use voxel_webpage::presentation::{factory, Cli};

use super::load_context;

pub fn cmd_build(cli: &Cli) -> Result<()> {
    let (ctx, log) = load_context(cli)?;
    let options = ctx.build_options();
    if !options.emscripten {
        log.debug("emscripten build disabled, deploying assets only");
    }

    let result = factory::create_build_use_case(&ctx).execute(&ctx.layout, &options, &log)?;

    log.debug(&format!(
        "deployed {} file(s), compiled: {}",
        result.deploy.file_names().len(),
        result.compiled
    ));
    Ok(())
}
