//! Error types for the simulation boundary.
//!
//! The engine core has no runtime-recoverable error states: anomalies such
//! as an unsupported consumption combination are contract violations by
//! the decode collaborator, and stale fetch responses are silently dropped
//! by design. Errors exist only at the surrounding simulation layer
//! (program images, configuration, memory placement) and are represented
//! here.

use thiserror::Error;

/// Errors produced while setting up or driving a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A file (program image or configuration) could not be read.
    #[error("could not read '{path}': {source}")]
    Read {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An ELF program image could not be parsed.
    #[error("could not parse ELF image: {0}")]
    ImageParse(#[from] object::read::Error),

    /// An ELF program image contains no executable sections.
    #[error("image has no executable sections")]
    NoText,

    /// A placement would fall outside the backing instruction memory.
    #[error("image range {0:#010x}..{1:#010x} outside backing memory")]
    ImageRange(u32, u32),

    /// A JSON configuration or report could not be (de)serialized.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
