//! List command implementation

use std::io::Write;

use colored::Colorize;
use devsync_fs::ProfileStore;

use crate::error::Result;

/// Run the list command
pub fn run_list(store: &ProfileStore, out: &mut dyn Write) -> Result<()> {
    let profiles = store.load()?;

    if profiles.is_empty() {
        writeln!(
            out,
            "No profiles configured. Run {} to create one.",
            "devsync init".cyan()
        )?;
        return Ok(());
    }

    for (name, profile) in &profiles {
        writeln!(out, "  {}", name.green().bold())?;
        writeln!(out, "    {}   {}", "host:".dimmed(), profile.host)?;
        writeln!(out, "    {} {}", "remote:".dimmed(), profile.remote_path)?;
        writeln!(out, "    {}  {}", "local:".dimmed(), profile.local_path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devsync_fs::Profile;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_list_sorted_by_name() {
        colored::control::set_override(false);
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::new(temp.path().join("config"), temp.path().join("project"));
        store
            .insert("web", Profile::new("me@web", "/srv/web", "/home/me/web", vec![]), false, false)
            .unwrap();
        store
            .insert("api", Profile::new("me@api", "/srv/api", "/home/me/api", vec![]), false, false)
            .unwrap();

        let mut out: Vec<u8> = Vec::new();
        run_list(&store, &mut out).unwrap();

        let expected = "  api
    host:   me@api
    remote: /srv/api
    local:  /home/me/api
  web
    host:   me@web
    remote: /srv/web
    local:  /home/me/web
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_list_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::new(temp.path().join("config"), temp.path().join("project"));

        let mut out: Vec<u8> = Vec::new();
        run_list(&store, &mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("No profiles configured"));
    }
}
