//! Browser front-end: DOM controls, canvas play area and gloo timers.
//!
//! One game can be mounted per thread. Browser callbacks (input, clicks,
//! timers, animation frames) reach it through a thread-local slot, the same
//! way the wasm entry points do.

mod app;
mod scheduler;
mod view;

#[cfg(feature = "serde_json")]
pub use app::snapshot;
pub use app::{mount, unmount};
