//! Transfer command building
//!
//! Turns a profile and a direction into the exact arguments handed to the
//! transfer tool. Pure data transformation; nothing here touches the system.

use devsync_fs::Profile;

/// Archive mode, compression and deletion of extraneous destination files.
/// Always on: deletions only propagate through `--delete`.
pub const TRANSFER_FLAGS: &[&str] = &["-avz", "--delete"];

/// Report would-be changes without writing anything
pub const DRY_RUN_FLAG: &str = "-n";

pub const EXCLUDE_FLAG: &str = "--exclude";

/// Which way files flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// local -> remote
    Push,
    /// remote -> local
    Pull,
}

impl Direction {
    /// Progress verb shown before a transfer starts
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Push => "Pushing",
            Self::Pull => "Pulling",
        }
    }
}

/// Append `/` unless the path already ends with one.
///
/// The transfer tool reads `dir/` as "the contents of dir" and `dir` as "dir
/// itself", so every endpoint is passed in the trailing-slash form.
pub fn ensure_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// `user@host:/path/` endpoint for the remote side of a profile
pub fn remote_endpoint(host: &str, path: &str) -> String {
    format!("{}:{}", host, ensure_trailing_slash(path))
}

/// A fully specified transfer, consumed immediately by the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncInvocation {
    pub source: String,
    pub destination: String,
    /// Applied by the tool in order, first match wins
    pub excludes: Vec<String>,
    pub dry_run: bool,
}

impl SyncInvocation {
    pub fn build(profile: &Profile, direction: Direction, dry_run: bool) -> Self {
        let local = ensure_trailing_slash(&profile.local_path);
        let remote = remote_endpoint(&profile.host, &profile.remote_path);

        let (source, destination) = match direction {
            Direction::Push => (local, remote),
            Direction::Pull => (remote, local),
        };

        Self {
            source,
            destination,
            excludes: profile.excludes.clone(),
            dry_run,
        }
    }

    /// Arguments in tool order: flags, dry-run, excludes, source, destination.
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = TRANSFER_FLAGS.iter().map(|f| f.to_string()).collect();

        if self.dry_run {
            args.push(DRY_RUN_FLAG.to_string());
        }

        for pattern in &self.excludes {
            args.push(EXCLUDE_FLAG.to_string());
            args.push(pattern.clone());
        }

        args.push(self.source.clone());
        args.push(self.destination.clone());
        args
    }

    /// The command line as echoed to the user before running it
    pub fn command_line(&self, program: &str) -> String {
        std::iter::once(program.to_string())
            .chain(self.args())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn profile(excludes: &[&str]) -> Profile {
        Profile::new(
            "me@box",
            "/srv/app",
            "/home/me/app/",
            excludes.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[rstest]
    #[case("/srv/app", "/srv/app/")]
    #[case("/srv/app/", "/srv/app/")]
    #[case("~/code", "~/code/")]
    #[case("", "/")]
    fn test_ensure_trailing_slash(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(ensure_trailing_slash(input), expected);
    }

    #[test]
    fn test_push_goes_local_to_remote() {
        let invocation = SyncInvocation::build(&profile(&[]), Direction::Push, false);
        assert_eq!(invocation.source, "/home/me/app/");
        assert_eq!(invocation.destination, "me@box:/srv/app/");
    }

    #[test]
    fn test_pull_goes_remote_to_local() {
        let invocation = SyncInvocation::build(&profile(&[]), Direction::Pull, false);
        assert_eq!(invocation.source, "me@box:/srv/app/");
        assert_eq!(invocation.destination, "/home/me/app/");
    }

    #[test]
    fn test_args_layout() {
        let invocation = SyncInvocation::build(&profile(&[".git", "*.pyc"]), Direction::Push, true);
        assert_eq!(
            invocation.args(),
            vec![
                "-avz",
                "--delete",
                "-n",
                "--exclude",
                ".git",
                "--exclude",
                "*.pyc",
                "/home/me/app/",
                "me@box:/srv/app/",
            ]
        );
    }

    #[test]
    fn test_delete_is_kept_for_pull_without_dry_run() {
        let args = SyncInvocation::build(&profile(&[]), Direction::Pull, false).args();
        assert!(args.contains(&"--delete".to_string()));
        assert!(!args.contains(&"-n".to_string()));
    }

    #[test]
    fn test_command_line() {
        let invocation = SyncInvocation::build(&profile(&["node_modules"]), Direction::Pull, false);
        assert_eq!(
            invocation.command_line("rsync"),
            "rsync -avz --delete --exclude node_modules me@box:/srv/app/ /home/me/app/"
        );
    }

    proptest! {
        #[test]
        fn prop_trailing_slash_is_idempotent(path in "[a-z/~._-]{0,24}") {
            let once = ensure_trailing_slash(&path);
            prop_assert!(once.ends_with('/'));
            prop_assert_eq!(ensure_trailing_slash(&once), once.clone());
        }

        #[test]
        fn prop_excludes_keep_count_and_order(
            excludes in proptest::collection::vec("[a-z*.]{1,8}", 0..8),
            push in any::<bool>(),
        ) {
            let refs: Vec<&str> = excludes.iter().map(String::as_str).collect();
            let direction = if push { Direction::Push } else { Direction::Pull };
            let args = SyncInvocation::build(&profile(&refs), direction, false).args();

            let patterns: Vec<String> = args
                .windows(2)
                .filter(|pair| pair[0] == EXCLUDE_FLAG)
                .map(|pair| pair[1].clone())
                .collect();
            prop_assert_eq!(patterns, excludes);
        }
    }
}
