//! Remove command implementation

use std::io::Write;

use devsync_fs::ProfileStore;

use crate::error::{CliError, Result};

/// Run the remove command
pub fn run_remove(store: &ProfileStore, name: &str, out: &mut dyn Write) -> Result<()> {
    match store.remove(name) {
        Ok(_) => {}
        Err(e) if e.is_not_found() => {
            return Err(CliError::user(format!("Profile '{name}' not found.")));
        }
        Err(e) => return Err(e.into()),
    }
    writeln!(out, "Profile '{}' removed.", name)?;
    Ok(())
}
