use crate::character_sets::is_digit;

/// Parse a port slot to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &[u8]) -> Option<u16> {
    if port.is_empty() || !port.iter().all(|&b| is_digit(b)) {
        return None;
    }
    port.iter().try_fold(0u16, |acc, &b| {
        acc.checked_mul(10)?.checked_add(u16::from(b - b'0'))
    })
}
