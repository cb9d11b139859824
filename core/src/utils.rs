const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Uppercase hex character for a nibble. Only the low four bits are read.
#[inline]
pub fn nibble_to_hex(nibble: u8) -> char {
    HEX_UPPER[(nibble & 0x0F) as usize] as char
}
