//! Init command implementation
//!
//! Creates (or with `--force` replaces) a named profile.

use std::io::Write;

use colored::Colorize;
use devsync_fs::{Profile, ProfileStore};

use crate::error::Result;

/// Arguments of `devsync init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitRequest<'a> {
    pub name: &'a str,
    pub host: &'a str,
    pub remote: &'a str,
    pub local: &'a str,
    pub extra_excludes: &'a [String],
    pub force: bool,
    pub local_config: bool,
}

/// Run the init command
pub fn run_init(store: &ProfileStore, request: &InitRequest<'_>, out: &mut dyn Write) -> Result<()> {
    let profile = Profile::with_default_excludes(
        request.host,
        request.remote,
        request.local,
        request.extra_excludes,
    );

    let path = store.insert(request.name, profile, request.force, request.local_config)?;

    writeln!(
        out,
        "{} Profile '{}' created in {}",
        "OK".green().bold(),
        request.name.cyan(),
        path.display()
    )?;
    Ok(())
}
