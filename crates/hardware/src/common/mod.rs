//! Common utilities and types used throughout the prefetch simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components. It includes:
//! 1. **Address Types:** Strong types for instruction word addresses and
//!    16-byte fetch line addresses.
//! 2. **Constants:** Window geometry, line geometry, and issue width.
//! 3. **Error Handling:** Error types for the simulation boundary (image
//!    loading, configuration). The engine core itself has no runtime
//!    error states.

/// Address type definitions (word addresses and aligned line addresses).
pub mod addr;

/// Window and line geometry constants.
pub mod constants;

/// Error types for the simulation boundary.
pub mod error;

pub use addr::{InstAddr, LineAddr};
pub use constants::{ISSUE_WIDTH, LINE_BYTES, LINE_WORDS, SLOT_COUNT};
pub use error::SimError;
