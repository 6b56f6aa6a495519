#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;
mod log;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod cursor;
mod error;
mod normalize;
mod output;
mod parser;
mod parts;
mod piece;
mod scheme;
mod storage;
mod types;
mod uri;

// Public API
pub use error::ParseError;
pub use normalize::{normalize_host, normalize_scheme};
pub use output::Output;
pub use parser::{
    Form, parse_absolute_form, parse_asterisk_form, parse_authority_form, parse_origin_form,
    parse_request_target,
};
pub use parts::Parts;
pub use piece::Piece;
pub use scheme::get_scheme_type;
pub use storage::{StaticBuffer, Storage, StorageMut};
pub use types::SchemeType;
pub use uri::{Uri, UriView};

pub type Result<T> = core::result::Result<T, ParseError>;
