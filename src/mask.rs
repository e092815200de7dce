//! 1-bpp mask rasterization for the display layers.
//!
//! The pupil layer is a filled circle in a 1-bit-per-pixel bitmap; the
//! host glue builds it once at init and hands it to the display stack.
//! Bits are row-major, LSB-first within each byte.

/// Byte length of a `width` x `height` 1-bpp mask buffer
pub const fn mask_len(width: usize, height: usize) -> usize {
    (width * height).div_ceil(8)
}

/// Rasterize a filled circle into a 1-bpp mask buffer.
///
/// `bits` must hold at least `mask_len(width, height)` bytes and should
/// start zeroed; pixels outside the circle are left untouched.
pub fn fill_circle(bits: &mut [u8], width: usize, height: usize, cx: i32, cy: i32, radius: i32) {
    let r_sq = radius * radius;
    for y in 0..height {
        for x in 0..width {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let (dx, dy) = (x as i32 - cx, y as i32 - cy);
            if dx * dx + dy * dy <= r_sq {
                let index = y * width + x;
                bits[index / 8] |= 1 << (index % 8);
            }
        }
    }
}

/// Read one pixel back out of a 1-bpp mask buffer
pub fn mask_bit(bits: &[u8], width: usize, x: usize, y: usize) -> bool {
    let index = y * width + x;
    bits[index / 8] & (1 << (index % 8)) != 0
}
