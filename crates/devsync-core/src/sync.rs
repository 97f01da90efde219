//! Sync orchestration
//!
//! Resolves a profile by name and drives push, pull and the two-way dry-run
//! status check through the [`TransferRunner`].

use std::io::Write;

use colored::Colorize;
use devsync_fs::{Profile, ProfileStore};

use crate::Result;
use crate::runner::TransferRunner;
use crate::transfer::{Direction, SyncInvocation};

pub struct SyncEngine<'a> {
    store: &'a ProfileStore,
    transfer: TransferRunner<'a>,
}

impl<'a> SyncEngine<'a> {
    pub fn new(store: &'a ProfileStore, transfer: TransferRunner<'a>) -> Self {
        Self { store, transfer }
    }

    /// Mirror the local tree onto the remote one.
    pub fn push(&self, name: &str, out: &mut dyn Write) -> Result<i32> {
        let profile = self.store.get(name)?;
        self.transfer_once(&profile, Direction::Push, out)
    }

    /// Mirror the remote tree onto the local one.
    pub fn pull(&self, name: &str, out: &mut dyn Write) -> Result<i32> {
        let profile = self.store.get(name)?;
        self.transfer_once(&profile, Direction::Pull, out)
    }

    /// Dry-run both directions and report what each would change.
    ///
    /// The pull check runs even when the push check fails, including when the
    /// transfer tool could not be started. The result is the first error, then
    /// the first nonzero exit code, or 0 when both succeeded.
    pub fn status(&self, name: &str, out: &mut dyn Write) -> Result<i32> {
        let profile = self.store.get(name)?;

        writeln!(
            out,
            "{}",
            "=== Changes to push (local -> remote) ===".cyan().bold()
        )?;
        let push = SyncInvocation::build(&profile, Direction::Push, true);
        let push_result = self.transfer.run(&push, out);
        if let Err(e) = &push_result {
            tracing::warn!(error = %e, "Push check failed, still checking pull");
        }

        writeln!(out)?;
        writeln!(
            out,
            "{}",
            "=== Changes to pull (remote -> local) ===".cyan().bold()
        )?;
        let pull = SyncInvocation::build(&profile, Direction::Pull, true);
        let pull_result = self.transfer.run(&pull, out);

        let push_code = push_result?;
        let pull_code = pull_result?;
        Ok(if push_code != 0 { push_code } else { pull_code })
    }

    fn transfer_once(
        &self,
        profile: &Profile,
        direction: Direction,
        out: &mut dyn Write,
    ) -> Result<i32> {
        let invocation = SyncInvocation::build(profile, direction, false);
        writeln!(
            out,
            "{} {} -> {}",
            direction.verb().cyan().bold(),
            invocation.source,
            invocation.destination
        )?;
        self.transfer.run(&invocation, out)
    }
}
