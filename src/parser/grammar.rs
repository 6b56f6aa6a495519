//! Recursive-descent parser for the RFC 3986 productions used by
//! RFC 7230 request-targets.
//!
//! Every routine reads from one forward-only cursor and writes into one
//! `Parts`; nothing is copied out of the input.

use crate::character_sets::{is_alpha, is_scheme_char};
use crate::cursor::Cursor;
use crate::error::{ParseError, Result};
use crate::parts::Parts;
use crate::piece::Piece;
use crate::scheme::get_scheme_type;

pub(crate) struct Parser<'a> {
    input: Cursor<'a>,
    parts: Parts,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8]) -> Result<Self> {
        Ok(Self {
            input: Cursor::new(input)?,
            parts: Parts::new(),
        })
    }

    pub fn finish(self) -> Parts {
        self.parts
    }

    /// `origin-form = path-abempty [ "?" query ]`
    ///
    /// The path may be empty and is not required to start with '/'; callers
    /// wanting RFC 7230 `absolute-path` strictness check `parts.path`. A
    /// fragment is not part of a request-target.
    pub fn parse_origin_form(&mut self) -> Result<()> {
        self.parse_path_abempty()?;
        self.parse_query()?;
        self.expect_end()
    }

    /// `absolute-URI = scheme ":" hier-part [ "?" query ]`
    ///
    /// A trailing `"#" fragment` is accepted as well so the same entry point
    /// splits full URI references that carry a scheme.
    pub fn parse_absolute_form(&mut self) -> Result<()> {
        self.parse_scheme()?;
        self.parse_hier_part()?;
        self.parse_query()?;
        self.parse_fragment()?;
        self.expect_end()
    }

    /// `authority-form = authority`
    ///
    /// CONNECT targets must not carry userinfo, but it is split out anyway
    /// and left to the caller to reject.
    pub fn parse_authority_form(&mut self) -> Result<()> {
        self.parse_authority()?;
        if !self.parts.has_authority() {
            return Err(ParseError::BadSyntax);
        }
        self.expect_end()
    }

    /// `asterisk-form = "*"`
    pub fn parse_asterisk_form(&mut self) -> Result<()> {
        self.input.expect_byte(b'*')?;
        self.expect_end()
    }

    /// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`
    fn parse_scheme(&mut self) -> Result<()> {
        let rest = self.input.rest();
        if !rest.first().is_some_and(|&c| is_alpha(c)) {
            return Err(ParseError::BadScheme);
        }

        // Ran off the end before ':'
        let len = rest
            .iter()
            .position(|&c| !is_scheme_char(c))
            .ok_or(ParseError::BadScheme)?;
        if rest.get(len) != Some(&b':') {
            return Err(ParseError::BadScheme);
        }

        self.parts.scheme = self.input.extract(self.input.pos() + len)?;
        self.parts.scheme_type = get_scheme_type(&rest[..len]);
        self.input.skip(1); // ':'
        Ok(())
    }

    /// ```text
    /// hier-part = "//" authority path-abempty
    ///           / path-absolute
    ///           / path-rootless
    ///           / path-empty
    /// ```
    fn parse_hier_part(&mut self) -> Result<()> {
        if self.input.starts_with(b"//") {
            self.input.skip(2);
            self.parse_authority()?;
        }
        // Without an authority the remaining path forms all run to '?', '#'
        // or the end, same as path-abempty.
        self.parse_path_abempty()
    }

    /// The authority is terminated by the next '/', '?', '#' or the end of
    /// the input (RFC 3986 section 3.2). The terminator is left unconsumed.
    fn parse_authority(&mut self) -> Result<()> {
        let end = self.input.find3(b'/', b'?', b'#');
        let authority = self.input.extract(end)?;
        self.parts.authority = authority;
        self.split_authority(authority)
    }

    /// `authority = [ userinfo "@" ] host [ ":" port ]`
    ///
    /// Works on a narrowed cursor, the outer cursor does not move.
    fn split_authority(&mut self, authority: Piece) -> Result<()> {
        let mut span = self.input.within(authority);

        // The last '@' ends the userinfo
        if let Some(at) = span.rfind(b'@') {
            let userinfo = span.extract(at)?;
            span.skip(1); // '@'
            self.split_userinfo(userinfo)?;
        }

        if span.peek() == Some(b'[') {
            // IP-literal = "[" ( IPv6address / IPvFuture ) "]"
            let close = span.find(b']');
            if close == span.end() {
                return Err(ParseError::BadAuthority);
            }
            self.parts.host = span.extract(close + 1)?;
            if !span.is_empty() {
                span.expect_byte(b':')
                    .map_err(|_| ParseError::BadAuthority)?;
                self.parts.port = span.extract_rest()?;
            }
            return Ok(());
        }

        match span.rfind(b':') {
            Some(colon) => {
                self.parts.host = span.extract(colon)?;
                span.skip(1); // ':'
                self.parts.port = span.extract_rest()?;
            }
            None => self.parts.host = span.extract_rest()?,
        }
        Ok(())
    }

    /// `userinfo = username [ ":" password ]`, split on the first ':'
    fn split_userinfo(&mut self, userinfo: Piece) -> Result<()> {
        self.parts.userinfo = userinfo;

        let mut span = self.input.within(userinfo);
        let colon = span.find(b':');
        self.parts.username = span.extract(colon)?;
        if span.eat(b':') {
            self.parts.password = span.extract_rest()?;
        }
        Ok(())
    }

    /// ```text
    /// path-abempty = *( "/" segment )
    /// segment      = *pchar
    /// ```
    ///
    /// Only the delimiters are checked; a path that does not start with '/'
    /// is taken as-is.
    fn parse_path_abempty(&mut self) -> Result<()> {
        let end = self.input.find2(b'?', b'#');
        self.parts.path = self.input.extract(end)?;
        Ok(())
    }

    /// `query = *( pchar / "/" / "?" )`
    fn parse_query(&mut self) -> Result<()> {
        if self.input.eat(b'?') {
            let end = self.input.find(b'#');
            self.parts.query = self.input.extract(end)?;
        }
        Ok(())
    }

    /// `fragment = *( pchar / "/" / "?" )`
    fn parse_fragment(&mut self) -> Result<()> {
        if self.input.eat(b'#') {
            self.parts.fragment = self.input.extract_rest()?;
        }
        Ok(())
    }

    fn expect_end(&self) -> Result<()> {
        if self.input.is_empty() {
            Ok(())
        } else {
            Err(ParseError::BadSyntax)
        }
    }
}
