//! Mock fetch memories: one that records every request, one that never
//! answers.

use std::sync::{Arc, Mutex};

use pfsim_core::common::addr::LineAddr;
use pfsim_core::engine::signals::LineResponse;
use pfsim_core::sim::{FetchMemory, LineMemory};

/// Wraps a [`LineMemory`] and records every requested line address.
pub struct RecordingMemory {
    inner: LineMemory,
    requests: Arc<Mutex<Vec<LineAddr>>>,
}

impl RecordingMemory {
    pub fn new(inner: LineMemory) -> Self {
        Self {
            inner,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the request log, usable after the memory is moved
    /// into a simulator.
    pub fn requests_handle(&self) -> Arc<Mutex<Vec<LineAddr>>> {
        Arc::clone(&self.requests)
    }
}

impl FetchMemory for RecordingMemory {
    fn fetch_line(&mut self, line: LineAddr) -> Option<LineResponse> {
        self.requests.lock().unwrap().push(line);
        self.inner.fetch_line(line)
    }
}

/// A fetch side whose responses never arrive. Every slot waiting on it
/// stalls until the next restart.
pub struct SilentMemory;

impl FetchMemory for SilentMemory {
    fn fetch_line(&mut self, _line: LineAddr) -> Option<LineResponse> {
        None
    }
}
