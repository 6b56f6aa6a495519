/// Check if a byte is an ASCII letter (branchless)
#[inline]
pub const fn is_alpha(c: u8) -> bool {
    (c | 0x20).wrapping_sub(b'a') < 26
}

/// Check if a byte is an ASCII decimal digit (branchless)
#[inline]
pub const fn is_digit(c: u8) -> bool {
    c.wrapping_sub(b'0') < 10
}

/// ASCII-lowercase a single byte, identity for everything else
#[inline]
pub const fn to_lower(c: u8) -> u8 {
    if c.wrapping_sub(b'A') < 26 { c + (b'a' - b'A') } else { c }
}

/// Scheme character classification
/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
const SCHEME_CHAR_TABLE: [bool; 256] = {
    let mut table = [false; 256];

    let mut i = 0usize;
    while i < 256 {
        let c = i as u8;
        table[i] = is_alpha(c) || is_digit(c);
        i += 1;
    }
    table[b'+' as usize] = true;
    table[b'-' as usize] = true;
    table[b'.' as usize] = true;

    table
};

/// Check if a byte may appear after the first byte of a scheme
#[inline]
pub fn is_scheme_char(c: u8) -> bool {
    SCHEME_CHAR_TABLE[c as usize]
}
