//! Program image loader.
//!
//! This module places program images into the modeled instruction memory.
//! It performs:
//! 1. **Image reading:** Raw bytes from disk with path-carrying errors.
//! 2. **ELF placement:** Executable sections placed at their link
//!    addresses via the `object` crate; the entry point becomes the
//!    stream start.
//! 3. **Flat placement:** Raw binaries placed at a caller-chosen base.

use std::fs;

use object::{Object, ObjectSection, SectionKind};

use crate::common::addr::InstAddr;
use crate::common::error::SimError;

use super::memory::LineMemory;

/// ELF magic bytes.
const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

/// Reads a program image from disk.
pub fn read_image(path: &str) -> Result<Vec<u8>, SimError> {
    fs::read(path).map_err(|source| SimError::Read {
        path: path.to_string(),
        source,
    })
}

/// Returns whether the image looks like an ELF file.
pub fn is_elf(image: &[u8]) -> bool {
    image.len() >= ELF_MAGIC.len() && image[..ELF_MAGIC.len()] == ELF_MAGIC
}

/// Places a flat binary at `base` and returns `base` as the stream start.
pub fn place_flat(
    memory: &mut LineMemory,
    image: &[u8],
    base: InstAddr,
) -> Result<InstAddr, SimError> {
    memory.load_image_at(image, base)?;
    Ok(base)
}

/// Places the executable sections of an ELF image at their addresses and
/// returns the entry point as the stream start.
pub fn place_elf(memory: &mut LineMemory, image: &[u8]) -> Result<InstAddr, SimError> {
    let file = object::File::parse(image)?;
    let mut placed = false;
    for section in file.sections() {
        if section.kind() != SectionKind::Text {
            continue;
        }
        let data = section.data()?;
        if data.is_empty() {
            continue;
        }
        memory.load_image_at(data, InstAddr::new(section.address() as u32))?;
        placed = true;
    }
    if !placed {
        return Err(SimError::NoText);
    }
    Ok(InstAddr::new(file.entry() as u32))
}

/// Places an image, dispatching on the ELF magic, and returns the stream
/// start (entry point for ELF, `base` for flat binaries).
pub fn place_image(
    memory: &mut LineMemory,
    image: &[u8],
    base: InstAddr,
) -> Result<InstAddr, SimError> {
    if is_elf(image) {
        place_elf(memory, image)
    } else {
        place_flat(memory, image, base)
    }
}
