//! Command implementations for devsync-cli

pub mod help;
pub mod init;
pub mod list;
pub mod remove;
pub mod scan;
pub mod sync;

pub use help::run_help;
pub use init::run_init;
pub use list::run_list;
pub use remove::run_remove;
pub use scan::{ScanOptions, run_scan};
pub use sync::{run_pull, run_push, run_status};
