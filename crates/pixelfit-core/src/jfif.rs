//! JFIF density patching.
//!
//! Writes the pixel density (DPI) of a JPEG by replacing or inserting the
//! JFIF APP0 segment right after the SOI marker. Nothing after that segment is
//! touched: quantisation tables, Huffman tables, frame header and scan data
//! are copied through byte for byte.
//!
//! Layout of the segment written here:
//!
//! ```text
//! FF E0        APP0 marker
//! 00 10        segment length (16, marker excluded)
//! 4A 46 49 46 00  "JFIF\0"
//! 01 01        version 1.1
//! 01           units: dots per inch
//! XX XX        X density, big-endian
//! YY YY        Y density, big-endian
//! 00 00        no thumbnail
//! ```

use serde::{Deserialize, Serialize};

/// JPEG Start-Of-Image marker.
pub const SOI: [u8; 2] = [0xFF, 0xD8];

/// APP0 marker.
pub const APP0: [u8; 2] = [0xFF, 0xE0];

const JFIF_ID: [u8; 5] = *b"JFIF\0";
const JFIF_VERSION: [u8; 2] = [0x01, 0x01];
const SEGMENT_LENGTH: u16 = 16;

/// Density unit byte values.
pub const UNITS_NONE: u8 = 0;
pub const UNITS_DPI: u8 = 1;
pub const UNITS_DPCM: u8 = 2;

/// DPI presets offered by the UI.
pub const DPI_PRESETS: [(u32, &str); 5] = [
    (72, "Web"),
    (96, "Screen"),
    (150, "Medium"),
    (300, "Print"),
    (600, "HQ Print"),
];

/// Density fields read from a JFIF APP0 segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Density {
    pub units: u8,
    pub x: u16,
    pub y: u16,
}

/// Whether the buffer starts with the SOI marker.
pub fn is_jpeg(bytes: &[u8]) -> bool {
    bytes.starts_with(&SOI)
}

/// Build the 18-byte APP0 segment (marker included) for `dpi`.
///
/// Only the low 16 bits of `dpi` fit in the density fields.
pub fn app0_segment(dpi: u32) -> [u8; 18] {
    let hi = ((dpi >> 8) & 0xFF) as u8;
    let lo = (dpi & 0xFF) as u8;
    let len = SEGMENT_LENGTH.to_be_bytes();

    let mut seg = [0u8; 18];
    seg[0..2].copy_from_slice(&APP0);
    seg[2..4].copy_from_slice(&len);
    seg[4..9].copy_from_slice(&JFIF_ID);
    seg[9..11].copy_from_slice(&JFIF_VERSION);
    seg[11] = UNITS_DPI;
    seg[12] = hi;
    seg[13] = lo;
    seg[14] = hi;
    seg[15] = lo;
    // seg[16..18]: thumbnail 0x0
    seg
}

/// Set the density of a JPEG to `dpi` dots per inch in both axes.
///
/// Input that does not start with SOI is returned unchanged. A leading APP0
/// segment is dropped (thumbnail included) and replaced; otherwise the new
/// segment is inserted right after SOI.
pub fn patch_density(jpeg: &[u8], dpi: u32) -> Vec<u8> {
    if !is_jpeg(jpeg) {
        return jpeg.to_vec();
    }

    let skip = match jpeg.get(2..6) {
        Some([0xFF, 0xE0, len_hi, len_lo]) => {
            // The declared length counts itself but not the marker
            let declared = u16::from_be_bytes([*len_hi, *len_lo]) as usize;
            (4 + declared).min(jpeg.len())
        }
        _ => 2,
    };
    let rest = &jpeg[skip..];

    let segment = app0_segment(dpi);
    let mut out = Vec::with_capacity(SOI.len() + segment.len() + rest.len());
    out.extend_from_slice(&SOI);
    out.extend_from_slice(&segment);
    out.extend_from_slice(rest);
    out
}

/// Read the density from a JFIF APP0 segment directly after SOI.
///
/// Returns `None` when the buffer is not a JPEG, has no leading APP0, or the
/// APP0 is not a JFIF segment.
pub fn read_density(jpeg: &[u8]) -> Option<Density> {
    if !is_jpeg(jpeg) || jpeg.get(2..4)? != APP0 {
        return None;
    }
    let declared = u16::from_be_bytes([*jpeg.get(4)?, *jpeg.get(5)?]) as usize;
    if declared < SEGMENT_LENGTH as usize {
        return None;
    }
    let body = jpeg.get(6..4 + declared)?;
    if body[..5] != JFIF_ID {
        return None;
    }
    Some(Density {
        units: body[7],
        x: u16::from_be_bytes([body[8], body[9]]),
        y: u16::from_be_bytes([body[10], body[11]]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// SOI + APP0 (72 dpi, units 1) + the start of a DQT segment.
    fn jpeg_with_app0() -> Vec<u8> {
        let mut bytes = vec![
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x02, 0x01,
            0x00, 0x48, 0x00, 0x48, 0x00, 0x00,
        ];
        bytes.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x43, 0x00, 0x08, 0x06]);
        bytes.extend_from_slice(&[0xFF, 0xD9]);
        bytes
    }

    #[test]
    fn test_patch_replaces_existing_app0_at_300_dpi() {
        let input = jpeg_with_app0();
        let out = patch_density(&input, 300);

        let expected_head: [u8; 20] = [
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x01,
            0x01, 0x2C, 0x01, 0x2C, 0x00, 0x00,
        ];
        assert_eq!(&out[..20], &expected_head);
        assert_eq!(&out[20..], &input[20..]);
        assert_eq!(out.len(), input.len());
    }

    #[test]
    fn test_patch_inserts_when_no_app0() {
        // SOI directly followed by DQT
        let input = vec![0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x04, 0x01, 0x02, 0xFF, 0xD9];
        let out = patch_density(&input, 96);

        assert_eq!(out.len(), input.len() + 18);
        assert_eq!(&out[..2], &SOI);
        assert_eq!(&out[2..20], &app0_segment(96));
        assert_eq!(&out[20..], &input[2..]);
    }

    #[test]
    fn test_patch_drops_app0_thumbnail() {
        // APP0 declaring a 1x1 RGB thumbnail: 16 + 3 bytes
        let mut input = vec![
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x13, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00,
            0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0xAA, 0xBB, 0xCC,
        ];
        input.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x02]);
        let out = patch_density(&input, 150);

        assert_eq!(&out[2..20], &app0_segment(150));
        assert_eq!(&out[20..], &[0xFF, 0xDB, 0x00, 0x02]);
    }

    #[test]
    fn test_patch_is_idempotent() {
        let once = patch_density(&jpeg_with_app0(), 600);
        let twice = patch_density(&once, 600);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_jpeg_passes_through() {
        let png_sig = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(patch_density(&png_sig, 300), png_sig.to_vec());
        assert_eq!(patch_density(&[], 300), Vec::<u8>::new());
        assert_eq!(patch_density(&[0xFF], 300), vec![0xFF]);
    }

    #[test]
    fn test_bare_soi() {
        let out = patch_density(&SOI, 72);
        assert_eq!(out.len(), 20);
        assert_eq!(read_density(&out), Some(Density { units: UNITS_DPI, x: 72, y: 72 }));
    }

    #[test]
    fn test_overlong_app0_length_is_clamped() {
        let input = vec![0xFF, 0xD8, 0xFF, 0xE0, 0xFF, 0xFF, 0x00];
        let out = patch_density(&input, 72);
        assert_eq!(out, [&SOI[..], &app0_segment(72)[..]].concat());
    }

    #[test]
    fn test_dpi_truncates_to_16_bits() {
        let seg = app0_segment(65_536 + 300);
        assert_eq!(&seg[12..16], &[0x01, 0x2C, 0x01, 0x2C]);
        let seg = app0_segment(65_535);
        assert_eq!(&seg[12..16], &[0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_read_density() {
        assert_eq!(
            read_density(&jpeg_with_app0()),
            Some(Density { units: UNITS_DPI, x: 72, y: 72 })
        );
        let patched = patch_density(&jpeg_with_app0(), 1200);
        assert_eq!(
            read_density(&patched),
            Some(Density { units: UNITS_DPI, x: 1200, y: 1200 })
        );
    }

    #[test]
    fn test_read_density_rejects_non_jfif() {
        assert_eq!(read_density(&[0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x10]), None);
        // APP0 carrying a JFXX extension instead of JFIF
        let mut jfxx = jpeg_with_app0();
        jfxx[9] = b'X';
        assert_eq!(read_density(&jfxx), None);
        assert_eq!(read_density(&[0x00; 30]), None);
        // Truncated segment
        assert_eq!(read_density(&jpeg_with_app0()[..12]), None);
    }

    #[test]
    fn test_presets_are_representable() {
        for (dpi, _) in DPI_PRESETS {
            assert!(dpi <= u16::MAX as u32);
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
