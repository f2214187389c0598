//! Simulation harness around the prefetch engine.
//!
//! Everything the engine treats as an external collaborator lives here:
//! the fetch memory behind the request port, the decode model consuming
//! the issue slots, program image loading, and the per-step window trace.

/// Program image loading (flat binaries and ELF).
pub mod loader;
/// Fetch memory interface and flat backing store.
pub mod memory;
/// The step driver wiring engine, memory, and decode together.
pub mod simulator;
/// Window dump rendering for trace output.
pub mod trace;

pub use memory::{FetchMemory, LineMemory};
pub use simulator::{ConsumePolicy, Issued, Simulator};
