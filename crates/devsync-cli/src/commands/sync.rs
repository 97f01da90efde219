//! Push, pull and status command implementations

use std::io::Write;

use devsync_core::{SyncEngine, SystemRunner, TransferRunner};

use crate::context::Context;
use crate::error::Result;

/// Run the push command, returning the transfer tool's exit status
pub fn run_push(ctx: &Context, name: &str, out: &mut dyn Write) -> Result<i32> {
    let runner = SystemRunner;
    let engine = SyncEngine::new(&ctx.store, TransferRunner::new(&runner, &ctx.rsync));
    Ok(engine.push(name, out)?)
}

/// Run the pull command, returning the transfer tool's exit status
pub fn run_pull(ctx: &Context, name: &str, out: &mut dyn Write) -> Result<i32> {
    let runner = SystemRunner;
    let engine = SyncEngine::new(&ctx.store, TransferRunner::new(&runner, &ctx.rsync));
    Ok(engine.pull(name, out)?)
}

/// Run the status command: dry-run push then dry-run pull
pub fn run_status(ctx: &Context, name: &str, out: &mut dyn Write) -> Result<i32> {
    let runner = SystemRunner;
    let engine = SyncEngine::new(&ctx.store, TransferRunner::new(&runner, &ctx.rsync));
    Ok(engine.status(name, out)?)
}
