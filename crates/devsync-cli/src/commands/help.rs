//! Long-form help with worked examples

use std::io::Write;

use crate::error::Result;

const HELP_TEXT: &str = "\
devsync - Bidirectional dev environment sync over SSH

Commands:

  init      Create a new sync profile
  push      Sync files from local machine to remote
  pull      Sync files from remote machine to local
  status    Preview what would change (dry-run both directions)
  scan      Find trusted SSH hosts or discover SSH on local network
  list      Show all configured profiles
  remove    Delete a profile
  help      Show this help with examples

Examples:

  Set up a new profile:
    devsync init myproject --host me@192.168.1.187 --remote /Users/me/Code/myproject --local ~/Code/myproject

  Set up a profile with extra excludes:
    devsync init myproject --host me@192.168.1.187 --remote /Users/me/Code/myproject --local ~/Code/myproject --exclude \"*.xcuserstate\" --exclude \"Pods\"

  Overwrite an existing profile:
    devsync init myproject --host me@192.168.1.187 --remote /path --local /path --force

  Push local changes to the remote machine:
    devsync push myproject

  Pull remote changes to the local machine:
    devsync pull myproject

  See what's different without syncing:
    devsync status myproject

  Find SSH hosts you can sync with:
    devsync scan

  List all your profiles:
    devsync list

  Remove a profile you no longer need:
    devsync remove myproject

Typical workflow:
  1. devsync scan              (find your other machine)
  2. devsync init <name> ...   (set up a profile)
  3. devsync push <name>       (send files over)
  4. ... work on the other machine ...
  5. devsync pull <name>       (bring changes back)

Config:
  Global: ~/.config/devsync/profiles.json  (override with --config-dir or DEVSYNC_CONFIG_DIR)
  Local:  ./devsync.json (takes priority, easy to edit by hand)

  Use --local-config with init to create a devsync.json in the current directory.
  If devsync.json exists in the current directory, all commands use it automatically.
";

/// Run the help command
pub fn run_help(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{HELP_TEXT}")?;
    Ok(())
}
