//! Process-level setup for binaries built on this crate: environment configuration, storage directories, and
//! logging.

#[cfg(feature = "app_env")]
pub mod env;
#[cfg(feature = "app_storage")]
pub mod storage;
#[cfg(feature = "app_tracing")]
pub mod tracing;
