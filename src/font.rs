//! 3x8 glyphs for everything the clock face prints.
//!
//! Each glyph is eight rows; the low three bits of a row are its pixels,
//! leftmost column in bit 2. Glyphs sit in rows 1 through 5.

/// Glyph width in columns.
pub const WIDTH: usize = 3;
/// Glyph height in rows.
pub const HEIGHT: usize = 8;

pub type Glyph = [u8; HEIGHT];

const fn glyph(rows: [u8; 5]) -> Glyph {
    [0, rows[0], rows[1], rows[2], rows[3], rows[4], 0, 0]
}

const DIGITS: [Glyph; 10] = [
    glyph([0b111, 0b101, 0b101, 0b101, 0b111]),
    glyph([0b010, 0b110, 0b010, 0b010, 0b111]),
    glyph([0b111, 0b001, 0b111, 0b100, 0b111]),
    glyph([0b111, 0b001, 0b111, 0b001, 0b111]),
    glyph([0b101, 0b101, 0b111, 0b001, 0b001]),
    glyph([0b111, 0b100, 0b111, 0b001, 0b111]),
    glyph([0b111, 0b100, 0b111, 0b101, 0b111]),
    glyph([0b111, 0b001, 0b001, 0b001, 0b001]),
    glyph([0b111, 0b101, 0b111, 0b101, 0b111]),
    glyph([0b111, 0b101, 0b111, 0b001, 0b111]),
];

const COLON: Glyph = glyph([0b000, 0b010, 0b000, 0b010, 0b000]);
const BLANK: Glyph = [0; HEIGHT];
const A: Glyph = glyph([0b010, 0b101, 0b111, 0b101, 0b101]);
const P: Glyph = glyph([0b110, 0b101, 0b110, 0b100, 0b100]);
const M: Glyph = glyph([0b101, 0b111, 0b111, 0b101, 0b101]);

/// Looks up the glyph for an ASCII byte, or `None` if the font has no such character.
pub fn lookup(ch: u8) -> Option<&'static Glyph> {
    match ch {
        b'0'..=b'9' => Some(&DIGITS[usize::from(ch - b'0')]),
        b':' => Some(&COLON),
        b' ' => Some(&BLANK),
        b'A' => Some(&A),
        b'P' => Some(&P),
        b'M' => Some(&M),
        _ => None,
    }
}

/// Whether the pixel at `row`, `col` is lit.
pub fn is_lit(glyph: &Glyph, row: usize, col: usize) -> bool {
    (glyph[row] >> (WIDTH - 1 - col)) & 1 != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_face_character_has_a_glyph() {
        for ch in b"0123456789: APM" {
            assert!(lookup(*ch).is_some(), "missing glyph for {:?}", *ch as char);
        }
        assert!(lookup(b'x').is_none());
    }

    #[test]
    fn test_glyphs_fit_width_and_rows() {
        for ch in b"0123456789: APM" {
            let glyph = lookup(*ch).unwrap();
            assert!(glyph.iter().all(|row| *row < 1 << WIDTH));
            assert_eq!(glyph[0], 0);
            assert_eq!(glyph[6], 0);
            assert_eq!(glyph[7], 0);
        }
    }

    #[test]
    fn test_is_lit_reads_left_to_right() {
        let one = lookup(b'1').unwrap();
        // Top row of '1' is 010
        assert!(!is_lit(one, 1, 0));
        assert!(is_lit(one, 1, 1));
        assert!(!is_lit(one, 1, 2));
    }
}
