//! Configuration system for the prefetch simulator.
//!
//! This module defines all configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline constants (reset vector, instruction memory
//!    geometry, unbacked-line fill word).
//! 2. **Structures:** Hierarchical config for the general run and the
//!    instruction memory model.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or via
//! `Config::default()`.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Reset vector: the address the window restarts from on reset.
    pub const RESET_VECTOR: u32 = 0x0000_0000;

    /// Base address of the modeled instruction memory.
    pub const IMEM_BASE: u32 = 0x0000_0000;

    /// Size of the modeled instruction memory (64 KiB).
    pub const IMEM_SIZE: usize = 64 * 1024;

    /// Word returned for fetches outside the backing memory.
    ///
    /// Defaults to the RV32I canonical NOP (`addi x0, x0, 0`), so runaway
    /// speculation streams harmless instructions instead of garbage.
    pub const FILL_WORD: u32 = 0x0000_0013;

    /// Default number of steps a CLI run simulates.
    pub const MAX_STEPS: u64 = 100_000;
}

/// General run parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Address the window restarts from when the reset input is asserted.
    pub reset_vector: u32,
    /// Emit the per-step window dump through `tracing` at TRACE level.
    pub trace_window: bool,
    /// Number of steps to simulate before reporting.
    pub max_steps: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            reset_vector: defaults::RESET_VECTOR,
            trace_window: false,
            max_steps: defaults::MAX_STEPS,
        }
    }
}

/// Instruction memory model parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Base address of the backing instruction memory.
    pub base: u32,
    /// Size of the backing instruction memory in bytes.
    pub size: usize,
    /// Word returned for addresses outside the backing memory.
    pub fill_word: u32,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base: defaults::IMEM_BASE,
            size: defaults::IMEM_SIZE,
            fill_word: defaults::FILL_WORD,
        }
    }
}

/// Root configuration for a simulation run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General run parameters.
    pub general: GeneralConfig,
    /// Instruction memory model parameters.
    pub memory: MemoryConfig,
}

impl Config {
    /// Deserializes a configuration from a JSON document.
    ///
    /// Missing fields take their defaults, so a partial document such as
    /// `{"general": {"reset_vector": 4096}}` is valid.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }
}
