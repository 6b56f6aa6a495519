use crate::character_sets::to_lower;
use crate::types::SchemeType;

/// ASCII case-insensitive comparison against an already-lowercase name
fn eq_lower(token: &[u8], lower: &[u8]) -> bool {
    token.len() == lower.len() && token.iter().zip(lower).all(|(&a, &b)| to_lower(a) == b)
}

/// Get the scheme type from a scheme token.
/// Filters by length first, then lowered first byte, then full comparison,
/// so the cost depends on the token length and not on the number of schemes.
pub fn get_scheme_type(scheme: &[u8]) -> SchemeType {
    let first = scheme.first().map(|&c| to_lower(c));

    match (scheme.len(), first) {
        (2, Some(b'w')) if eq_lower(scheme, b"ws") => SchemeType::Ws,
        (3, Some(b'f')) if eq_lower(scheme, b"ftp") => SchemeType::Ftp,
        (3, Some(b'w')) if eq_lower(scheme, b"wss") => SchemeType::Wss,
        (4, Some(b'f')) if eq_lower(scheme, b"file") => SchemeType::File,
        (4, Some(b'h')) if eq_lower(scheme, b"http") => SchemeType::Http,
        (5, Some(b'h')) if eq_lower(scheme, b"https") => SchemeType::Https,
        (6, Some(b'm')) if eq_lower(scheme, b"mailto") => SchemeType::Mailto,
        _ => SchemeType::Unknown,
    }
}
