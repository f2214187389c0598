//! Program Loader Tests.
//!
//! Verifies flat binary placement, ELF detection, and error reporting
//! for unreadable or malformed images.

use pfsim_core::common::addr::InstAddr;
use pfsim_core::common::error::SimError;
use pfsim_core::sim::loader;
use pfsim_core::sim::LineMemory;

// ══════════════════════════════════════════════════════════
// 1. Flat binaries
// ══════════════════════════════════════════════════════════

/// A flat binary read from disk lands at the requested base, which
/// becomes the stream start.
#[test]
fn flat_binary_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prog.bin");
    let words: [u32; 3] = [0x0000_0013, 0x1111_2222, 0x3333_4444];
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    std::fs::write(&path, &bytes).unwrap();

    let image = loader::read_image(path.to_str().unwrap()).unwrap();
    let mut mem = LineMemory::new(0, 0x1000, 0);
    let start = loader::place_image(&mut mem, &image, InstAddr::new(0x100)).unwrap();

    assert_eq!(start.val(), 0x100);
    for (i, word) in words.iter().enumerate() {
        assert_eq!(mem.read_word(InstAddr::new(0x100 + 4 * i as u32)), *word);
    }
}

// ══════════════════════════════════════════════════════════
// 2. ELF detection and parse errors
// ══════════════════════════════════════════════════════════

#[test]
fn elf_magic_is_detected() {
    assert!(loader::is_elf(&[0x7f, b'E', b'L', b'F', 0, 0]));
    assert!(!loader::is_elf(&[0x13, 0x00, 0x00, 0x00]));
    assert!(!loader::is_elf(&[0x7f]));
}

/// A truncated ELF is reported as a parse error, not placed as a flat
/// binary.
#[test]
fn malformed_elf_is_a_parse_error() {
    let mut mem = LineMemory::new(0, 0x1000, 0);
    let bogus = [0x7f, b'E', b'L', b'F', 1, 1, 1, 0];
    let err = loader::place_image(&mut mem, &bogus, InstAddr::new(0)).unwrap_err();
    assert!(matches!(err, SimError::ImageParse(_)));
}

// ══════════════════════════════════════════════════════════
// 3. Read errors
// ══════════════════════════════════════════════════════════

/// Missing files surface the path in the error.
#[test]
fn missing_image_reports_path() {
    let err = loader::read_image("/nonexistent/prog.bin").unwrap_err();
    match err {
        SimError::Read { path, .. } => assert_eq!(path, "/nonexistent/prog.bin"),
        other => panic!("expected Read error, got {other}"),
    }
}
