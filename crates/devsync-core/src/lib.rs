//! Sync engine and host discovery for devsync
//!
//! The sync side turns a stored profile into an invocation of an external
//! transfer tool and renders its output as a categorized change report. The
//! discovery side finds hosts worth syncing with, either from the trust store
//! or by sweeping the local address table.
//!
//! Every external program runs behind [`ProcessRunner`], so the logic here can
//! be driven by scripted fakes.

pub mod discovery;
pub mod error;
pub mod process;
pub mod report;
pub mod runner;
pub mod sync;
pub mod transfer;

pub use discovery::{DiscoveredHost, Discovery, DiscoveryReport, DiscoverySource};
pub use error::{Error, Result};
pub use process::{ProcessOutput, ProcessRunner, SystemRunner};
pub use report::{ClassifiedLine, LineCategory, classify};
pub use runner::{DEFAULT_TRANSFER_PROGRAM, TransferRunner};
pub use sync::SyncEngine;
pub use transfer::{Direction, SyncInvocation, ensure_trailing_slash};
