//! Typed success/failure and presence/absence composition on top of [`Result`] and [`Option`].
//!
//! - [`container`]: the [`Container`] vocabulary shared by both families, with panics that carry typed payloads.
//! - [`guard`]: guarded functions that unwrap containers and short-circuit to the first failure.
//! - [`result`] and [`option`]: per-family helpers (`is`, `safe`, `all`, `any`, `guarded`, `run`).
//! - [`pattern`] and [`matcher`]: ordered structural dispatch over values and containers.
//! - [`app`]: process setup for binaries (environment, storage, logging), behind `app_*` features.

pub mod container;
pub mod error;
pub mod guard;
pub mod aggregate;
pub mod result;
pub mod option;
pub mod pattern;
pub mod matcher;

pub mod app;

pub use container::{Container, Kind, ResultExt};
pub use error::{NonExhaustiveMatch, Panic, UnwrapPanic};
pub use guard::{Abort, Escape, Guard, Guarded};
pub use matcher::{Arm, match_value, try_match};
pub use pattern::{Pattern, PatternKind};
