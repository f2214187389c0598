//! Instruction prefetch window simulator library.
//!
//! This crate implements a cycle-accurate model of a two-wide instruction
//! prefetch unit with the following:
//! 1. **Engine:** A four-slot fetch window with request planning, response
//!    integration, retirement, and a redirect-driven restart path.
//! 2. **Simulation:** A fetch-memory model, single-outstanding-request
//!    harness, program loader, and decode-side consumption policies.
//! 3. **Configuration:** Defaults and JSON-deserializable config structures.
//! 4. **Statistics:** Per-run fetch and issue metrics with text and JSON
//!    reporting.

/// Common types and constants (addresses, window geometry, errors).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// The prefetch window engine (slot store, planner, fill, retirement).
pub mod engine;
/// Simulation harness (fetch memory, loader, step driver, trace rendering).
pub mod sim;
/// Fetch and issue statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The prefetch window engine; steps once per call with sampled inputs.
pub use crate::engine::PrefetchUnit;
/// Top-level simulator; owns the engine and a fetch memory and models the
/// one-step request/response latency.
pub use crate::sim::Simulator;
