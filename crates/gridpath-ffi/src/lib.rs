//! Handle-based host bindings for *gridpath*.
//!
//! Hosts that can only pass `f64` values (scripting runtimes, game
//! engines loading a shared library) drive grids and paths through the
//! functions in [`api`]. Rust callers can use [`Engine`] directly.
//!
//! Objects are named by opaque handles. `0` is never a valid handle, and a
//! handle to a destroyed object keeps failing even after its storage is
//! reused.

pub mod api;
mod engine;
mod registry;

pub use engine::Engine;
pub use registry::{Handle, HandleTable, NULL_HANDLE};
