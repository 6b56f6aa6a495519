use crate::error::Result;
use crate::output::Output;
use crate::parts::Parts;
use crate::piece::Piece;

/// Write `piece` of `input`, lowercased, and return where it landed in `out`.
/// An absent piece yields an absent piece.
fn lowercase_into(input: &[u8], piece: Piece, out: &mut Output<'_>) -> Result<Piece> {
    if let Some(bytes) = piece.get(input) {
        out.push_lowercase(bytes)?;
    }
    out.extract()
}

/// Lowercase the scheme into `out` (RFC 3986 section 6.2.2.1).
///
/// The returned piece references the output buffer, not `input`. The
/// scheme piece in `parts` keeps pointing at the original text.
///
/// # Errors
///
/// `CapacityExhausted` if the scheme does not fit in `out`.
///
/// # Examples
///
/// ```
/// use uri_pieces::{Output, StaticBuffer, normalize_scheme, parse_absolute_form};
///
/// let input = b"HTTP://Example.COM/";
/// let parts = parse_absolute_form(input).unwrap();
///
/// let mut storage = StaticBuffer::<16>::new();
/// let mut out = Output::new(&mut storage);
/// let scheme = normalize_scheme(input, &parts, &mut out).unwrap();
/// assert_eq!(scheme.get(out.as_bytes()), Some(&b"http"[..]));
/// assert_eq!(parts.scheme.get(input), Some(&b"HTTP"[..]));
/// ```
pub fn normalize_scheme(input: &[u8], parts: &Parts, out: &mut Output<'_>) -> Result<Piece> {
    lowercase_into(input, parts.scheme, out)
}

/// Lowercase the host into `out`.
///
/// Percent-encoded octets are copied as-is.
///
/// # Errors
///
/// `CapacityExhausted` if the host does not fit in `out`.
pub fn normalize_host(input: &[u8], parts: &Parts, out: &mut Output<'_>) -> Result<Piece> {
    lowercase_into(input, parts.host, out)
}
