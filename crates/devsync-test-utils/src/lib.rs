//! Test doubles and fixtures for devsync tests.
//!
//! Nothing here touches the network or spawns a process: the fakes stand in
//! for the transfer tool, the address-table tool, the prober and the name
//! resolver, and record how they were called.

pub mod fakes;
pub mod fixtures;

pub use fakes::{FakeProber, FakeResolver, ScriptedRunner};
pub use fixtures::{disable_colors, sample_profile, store_with_profile, write_known_hosts};
