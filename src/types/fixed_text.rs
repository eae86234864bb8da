//! Fixed-width text fields
//!
//! TYPE and DESC store NUL-padded text in the DOS/Windows code page of the
//! game. The raw bytes are kept verbatim; decoding is done on demand.

use std::fmt;

/// NUL-padded text of exactly `N` bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedText<const N: usize>([u8; N]);

impl<const N: usize> FixedText<N> {
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Copy up to `N` bytes of `bytes`, padding with NUL.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; N];
        let len = bytes.len().min(N);
        buf[..len].copy_from_slice(&bytes[..len]);
        Self(buf)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Bytes up to the first NUL.
    pub fn trimmed(&self) -> &[u8] {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        &self.0[..end]
    }

    /// Decode as Windows-1252, stopping at the first NUL.
    pub fn decode(&self) -> String {
        let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(self.trimmed());
        decoded.into_owned()
    }
}

impl<const N: usize> Default for FixedText<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> fmt::Debug for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedText<{}>({:?})", N, self.decode())
    }
}

impl<const N: usize> fmt::Display for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decode())
    }
}
