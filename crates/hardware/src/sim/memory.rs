//! Fetch memory model.
//!
//! The engine's memory-side collaborator: answers each accepted line
//! address with one 16-byte line, strictly in order, one request
//! outstanding at a time. The latency model lives in the simulator; this
//! module only defines the interface and a flat backing store.

use crate::common::addr::{InstAddr, LineAddr};
use crate::common::constants::{LINE_WORDS, WORD_BYTES};
use crate::common::error::SimError;
use crate::config::MemoryConfig;
use crate::engine::signals::LineResponse;

/// Interface the simulator fetches lines through.
///
/// Returning `None` models a response that never arrives; every slot
/// waiting on that line then stalls until the next restart.
pub trait FetchMemory {
    /// Reads the line at the given address, if the memory responds.
    fn fetch_line(&mut self, line: LineAddr) -> Option<LineResponse>;
}

/// Flat little-endian instruction memory with a fill word for unbacked
/// addresses.
#[derive(Debug, Clone)]
pub struct LineMemory {
    base: u32,
    bytes: Vec<u8>,
    fill_word: u32,
}

impl LineMemory {
    /// Creates a zeroed memory of `size` bytes based at `base`.
    pub fn new(base: u32, size: usize, fill_word: u32) -> Self {
        Self {
            base,
            bytes: vec![0; size],
            fill_word,
        }
    }

    /// Creates a memory from the configuration section.
    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::new(config.base, config.size, config.fill_word)
    }

    /// Copies `image` into the backing store starting at `addr`.
    pub fn load_image_at(&mut self, image: &[u8], addr: InstAddr) -> Result<(), SimError> {
        let start = self.offset_of(addr.val()).ok_or(SimError::ImageRange(
            addr.val(),
            addr.val().wrapping_add(image.len() as u32),
        ))?;
        let end = start + image.len();
        if end > self.bytes.len() {
            return Err(SimError::ImageRange(
                addr.val(),
                addr.val().wrapping_add(image.len() as u32),
            ));
        }
        self.bytes[start..end].copy_from_slice(image);
        Ok(())
    }

    /// Writes one instruction word at `addr`.
    pub fn write_word(&mut self, addr: InstAddr, word: u32) -> Result<(), SimError> {
        self.load_image_at(&word.to_le_bytes(), addr)
    }

    /// Reads one instruction word; unbacked addresses return the fill
    /// word.
    pub fn read_word(&self, addr: InstAddr) -> u32 {
        match self.offset_of(addr.val()) {
            Some(start) if start + WORD_BYTES as usize <= self.bytes.len() => {
                let mut word = [0u8; WORD_BYTES as usize];
                word.copy_from_slice(&self.bytes[start..start + WORD_BYTES as usize]);
                u32::from_le_bytes(word)
            }
            _ => self.fill_word,
        }
    }

    fn offset_of(&self, addr: u32) -> Option<usize> {
        addr.checked_sub(self.base).map(|off| off as usize)
    }
}

impl FetchMemory for LineMemory {
    /// Always responds; partially-backed lines mix backed words with the
    /// fill word per lane.
    fn fetch_line(&mut self, line: LineAddr) -> Option<LineResponse> {
        let mut data = [self.fill_word; LINE_WORDS];
        for (lane, word) in data.iter_mut().enumerate() {
            *word = self.read_word(line.word(lane));
        }
        Some(LineResponse { line, data })
    }
}
