use crate::clock::ClockDisplay;
use crate::font::{self, HEIGHT, WIDTH};

/// Number of chained MAX7219 devices on an FC16 module.
pub const DEVICES: usize = 4;

/// Column width of the whole chain.
const COLUMNS: usize = DEVICES * 8;

/// Prepares the 8x8 buffers for the 4 chained MAX7219 devices using FC16 layout.
///
/// Characters are three columns wide with one blank column between them, so
/// the eight characters of `HH:MM AM` fill 31 of the 32 columns. Device 0 is
/// the leftmost matrix and bit 7 of each row byte is its leftmost column.
pub fn prepare_buffer(clock: &ClockDisplay) -> [[u8; 8]; DEVICES] {
    let mut fb_rows = [0u32; HEIGHT];
    let mut cursor = 0;

    for ch in clock.time().bytes() {
        if let Some(glyph) = font::lookup(ch) {
            for (r, row) in fb_rows.iter_mut().enumerate() {
                for c in 0..WIDTH {
                    if font::is_lit(glyph, r, c) && cursor + c < COLUMNS {
                        *row |= 1 << (COLUMNS - 1 - (cursor + c));
                    }
                }
            }
        }
        cursor += WIDTH + 1;
    }

    let mut device_buffers = [[0u8; 8]; DEVICES];
    for (dev_idx, buffer) in device_buffers.iter_mut().enumerate() {
        let shift = (DEVICES - 1 - dev_idx) * 8;
        for (r, byte) in buffer.iter_mut().enumerate() {
            *byte = ((fb_rows[r] >> shift) & 0xFF) as u8;
        }
    }

    device_buffers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_glyphs_land_on_device_zero() {
        // "12:00 AM": '1' at columns 0..3, '2' at columns 4..7
        let buffers = prepare_buffer(&ClockDisplay::new());
        // Row 1: '1' is 010, '2' is 111
        assert_eq!(buffers[0][1], 0b0100_1110);
        // Row 4: '1' is 010, '2' is 100
        assert_eq!(buffers[0][4], 0b0100_1000);
    }

    #[test]
    fn test_outer_rows_are_blank() {
        let buffers = prepare_buffer(&ClockDisplay::with_time(18, 48).unwrap());
        for buffer in &buffers {
            assert_eq!(buffer[0], 0);
            assert_eq!(buffer[6], 0);
            assert_eq!(buffer[7], 0);
        }
    }

    #[test]
    fn test_spacer_columns_are_blank() {
        let buffers = prepare_buffer(&ClockDisplay::with_time(20, 58).unwrap());
        // Every fourth column (3, 7, 11, ...) is the gap after a glyph,
        // which is the lowest bit of each device's byte.
        for buffer in &buffers {
            for byte in buffer {
                assert_eq!(byte & 0b0001_0001, 0);
            }
        }
    }

    #[test]
    fn test_space_before_period_is_blank() {
        // Character 5 is the space, at columns 20..23 on device 2
        let buffers = prepare_buffer(&ClockDisplay::with_time(8, 8).unwrap());
        for byte in &buffers[2] {
            assert_eq!(byte & 0b0000_1110, 0);
        }
    }

    #[test]
    fn test_period_changes_last_device() {
        let am = prepare_buffer(&ClockDisplay::with_time(1, 0).unwrap());
        let pm = prepare_buffer(&ClockDisplay::with_time(13, 0).unwrap());
        assert_eq!(am[..3], pm[..3]);
        assert_ne!(am[3], pm[3]);
    }
}
