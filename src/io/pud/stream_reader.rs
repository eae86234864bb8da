//! Little-endian field reader over one section payload

use byteorder::{ByteOrder, LittleEndian};

use super::section_tag::SectionTag;
use crate::error::{PudError, Result};

/// Reads fixed-width fields from a section payload.
///
/// Every read is bounds-checked; running past the end of the payload yields
/// [`PudError::SectionTooShort`] naming the section and the bytes it needed.
pub struct PayloadReader<'a> {
    tag: SectionTag,
    data: &'a [u8],
    pos: usize,
}

impl<'a> PayloadReader<'a> {
    pub fn new(tag: SectionTag, data: &'a [u8]) -> Self {
        Self { tag, data, pos: 0 }
    }

    /// Section the payload belongs to
    pub fn tag(&self) -> SectionTag {
        self.tag
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total payload length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Fail early if the payload cannot hold `needed` bytes in total.
    pub fn require(&self, needed: usize) -> Result<()> {
        if self.data.len() < needed {
            return Err(self.too_short(needed));
        }
        Ok(())
    }

    fn too_short(&self, needed: usize) -> PudError {
        PudError::SectionTooShort {
            tag: self.tag.to_string(),
            needed,
            available: self.data.len(),
        }
    }

    /// Borrow the next `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .ok_or_else(|| self.too_short(usize::MAX))?;
        if end > self.data.len() {
            return Err(self.too_short(end));
        }
        let data = self.data;
        self.pos = end;
        Ok(&data[end - n..end])
    }

    /// Copy the next `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read a little-endian u16.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    /// Read a little-endian u32.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    /// Read `count` bytes.
    pub fn read_u8_vec(&mut self, count: usize) -> Result<Vec<u8>> {
        Ok(self.read_bytes(count)?.to_vec())
    }

    /// Read `count` little-endian u16 values.
    pub fn read_u16_vec(&mut self, count: usize) -> Result<Vec<u16>> {
        let bytes = self.read_bytes(count * 2)?;
        let mut out = vec![0u16; count];
        LittleEndian::read_u16_into(bytes, &mut out);
        Ok(out)
    }

    /// Read `count` little-endian u32 values.
    pub fn read_u32_vec(&mut self, count: usize) -> Result<Vec<u32>> {
        let bytes = self.read_bytes(count * 4)?;
        let mut out = vec![0u32; count];
        LittleEndian::read_u32_into(bytes, &mut out);
        Ok(out)
    }

    /// Read one little-endian u16 per player slot.
    pub fn read_u16_slots<const N: usize>(&mut self) -> Result<[u16; N]> {
        let bytes = self.read_bytes(N * 2)?;
        let mut out = [0u16; N];
        LittleEndian::read_u16_into(bytes, &mut out);
        Ok(out)
    }
}
