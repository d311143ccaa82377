//! Per-frame simulation core for a top-down arena shooter.
//!
//! The avatar walks around a bounded world, pursuers chase it, it fires
//! pooled projectiles, and a deadzone camera follows it. Everything here is
//! synchronous and driven by an injected input snapshot and elapsed time;
//! the terminal front end lives in the binary.

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod render;

pub use error::ArenaError;
