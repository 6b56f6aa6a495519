mod form;
mod grammar;

pub use form::Form;

use crate::error::Result;
use crate::log::{debug, trace};
use crate::parts::Parts;
use grammar::Parser;

/// Split a request-target of the given form into its components.
///
/// The returned pieces reference `input`; nothing is copied.
///
/// # Errors
///
/// Returns the first error encountered. No partial result is returned.
///
/// # Examples
///
/// ```
/// use uri_pieces::{Form, SchemeType, parse_request_target};
///
/// let input = b"http://example.com/a?b#c";
/// let parts = parse_request_target(input, Form::Absolute).unwrap();
/// assert_eq!(parts.scheme_type, SchemeType::Http);
/// assert_eq!(parts.host.get(input), Some(&b"example.com"[..]));
/// assert_eq!(parts.query.get(input), Some(&b"b"[..]));
/// ```
pub fn parse_request_target(input: &[u8], form: Form) -> Result<Parts> {
    let result = Parser::new(input).and_then(|mut parser| {
        match form {
            Form::Origin => parser.parse_origin_form(),
            Form::Absolute => parser.parse_absolute_form(),
            Form::Authority => parser.parse_authority_form(),
            Form::Asterisk => parser.parse_asterisk_form(),
        }?;
        Ok(parser.finish())
    });

    match &result {
        Ok(_) => {
            trace!("parsed {form} of {} bytes", input.len());
        }
        Err(_err) => {
            debug!("failed to parse {form}: {_err}");
        }
    }

    result
}

/// `origin-form = path-abempty [ "?" query ]`
///
/// The path is taken as scanned; a caller that requires a leading '/' checks
/// it on the returned `Parts`.
///
/// # Errors
///
/// `BadSyntax` if the target carries a fragment.
pub fn parse_origin_form(input: &[u8]) -> Result<Parts> {
    parse_request_target(input, Form::Origin)
}

/// `absolute-form = scheme ":" hier-part [ "?" query ] [ "#" fragment ]`
///
/// # Errors
///
/// `BadScheme` for a missing or malformed scheme, `BadAuthority` for an
/// unterminated IPv6 literal.
pub fn parse_absolute_form(input: &[u8]) -> Result<Parts> {
    parse_request_target(input, Form::Absolute)
}

/// `authority-form = authority`
///
/// # Errors
///
/// `BadSyntax` if the authority is empty or followed by a path, query or
/// fragment; `BadAuthority` for an unterminated IPv6 literal.
pub fn parse_authority_form(input: &[u8]) -> Result<Parts> {
    parse_request_target(input, Form::Authority)
}

/// `asterisk-form = "*"`
///
/// # Errors
///
/// `BadSyntax` for anything but the single byte `*`.
pub fn parse_asterisk_form(input: &[u8]) -> Result<Parts> {
    parse_request_target(input, Form::Asterisk)
}
