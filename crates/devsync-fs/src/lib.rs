//! Profile storage for devsync
//!
//! Holds the `Profile` record and the JSON-backed store that maps profile
//! names to profiles, plus the atomic write primitive the store relies on.

pub mod error;
pub mod io;
pub mod profile;
pub mod store;

pub use error::{Error, Result};
pub use profile::{DEFAULT_EXCLUDES, Profile, ProfileMap};
pub use store::{GLOBAL_PROFILES_FILE, LOCAL_PROFILES_FILE, ProfileStore, StoreLocation};
