use crate::compat::{Box, String, Vec};

/// Something that provides the bytes a [`Parts`](crate::Parts) table was
/// parsed from
///
/// Implemented for borrowed views (`&str`, `&[u8]`) and owned buffers
/// (`String`, `Vec<u8>`, boxed slices) alike, so a [`Uri`](crate::Uri) can
/// be backed by either without the parser knowing which.
pub trait Storage {
    fn as_bytes(&self) -> &[u8];
}

/// Writable fixed capacity for normalized output
pub trait StorageMut {
    fn capacity_mut(&mut self) -> &mut [u8];
}

impl Storage for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> Storage for [u8; N] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl Storage for str {
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }
}

impl Storage for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl Storage for String {
    fn as_bytes(&self) -> &[u8] {
        String::as_bytes(self)
    }
}

impl Storage for Box<[u8]> {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl Storage for Box<str> {
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }
}

impl<T: Storage + ?Sized> Storage for &T {
    fn as_bytes(&self) -> &[u8] {
        T::as_bytes(self)
    }
}

impl StorageMut for [u8] {
    fn capacity_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl<const N: usize> StorageMut for [u8; N] {
    fn capacity_mut(&mut self) -> &mut [u8] {
        self
    }
}

/// Inline buffer of `N` bytes for normalized output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticBuffer<const N: usize> {
    buf: [u8; N],
}

impl<const N: usize> StaticBuffer<N> {
    pub const fn new() -> Self {
        Self { buf: [0; N] }
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for StaticBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Storage for StaticBuffer<N> {
    fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl<const N: usize> StorageMut for StaticBuffer<N> {
    fn capacity_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}
