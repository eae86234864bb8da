//! PUD stream reader

use byteorder::{ByteOrder, LittleEndian};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use super::constants::{MAX_MAP_HEIGHT, MAX_MAP_WIDTH, SECTION_LENGTH_LEN, SECTION_TAG_LEN};
use super::section::Section;
use super::section_reader::SectionDecoder;
use super::section_tag::{describe_raw_tag, SectionTag};
use crate::document::PudDocument;
use crate::error::{PudError, Result};
use crate::tables::GameDatabase;

/// Configuration for the PUD reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PudReaderConfiguration {
    /// Largest accepted DIM width. Default: 128.
    pub max_map_width: u16,
    /// Largest accepted DIM height. Default: 128.
    pub max_map_height: u16,
    /// When `true`, a UNIT payload that is not a whole number of records is
    /// an error instead of having its tail ignored.
    ///
    /// Default: `false`.
    pub strict_unit_records: bool,
}

impl Default for PudReaderConfiguration {
    fn default() -> Self {
        Self {
            max_map_width: MAX_MAP_WIDTH,
            max_map_height: MAX_MAP_HEIGHT,
            strict_unit_records: false,
        }
    }
}

/// PUD file reader
pub struct PudReader<R: Read> {
    source: R,
    config: PudReaderConfiguration,
}

impl PudReader<BufReader<File>> {
    /// Open a PUD file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: Read> PudReader<R> {
    /// Create a reader over any byte source positioned at the first section
    pub fn from_reader(source: R) -> Self {
        Self {
            source,
            config: PudReaderConfiguration::default(),
        }
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: PudReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Start decoding. Consumes the reader: a stream can only be walked once.
    pub fn decode(self, database: &GameDatabase) -> SectionStream<'_, R> {
        SectionStream {
            source: self.source,
            decoder: SectionDecoder::new(database, self.config),
            state: DecoderState::Idle,
            offset: 0,
            sections: 0,
        }
    }

    /// Decode every section and fold them into a [`PudDocument`].
    pub fn read(self, database: &GameDatabase) -> Result<PudDocument> {
        PudDocument::from_sections(self.decode(database), database)
    }
}

/// Where a [`SectionStream`] is in its read cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    Idle,
    ReadingHeader,
    ReadingPayload,
    Dispatching,
    Yielded,
    /// A section failed; terminal
    Error,
    /// Clean end of stream; terminal
    Eof,
}

impl DecoderState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Error | Self::Eof)
    }
}

struct SectionHeader {
    raw_tag: [u8; SECTION_TAG_LEN],
    length: u32,
    offset: u64,
}

/// Lazy, forward-only sequence of decoded sections.
///
/// Yields `Ok(section)` for each section in file order. The first error is
/// yielded once and ends the sequence; so does a clean end of stream.
pub struct SectionStream<'db, R: Read> {
    source: R,
    decoder: SectionDecoder<'db>,
    state: DecoderState,
    offset: u64,
    sections: usize,
}

impl<'db, R: Read> SectionStream<'db, R> {
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Bytes consumed from the source so far
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Read into `buf` until it is full or the source is exhausted.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.source.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.offset += filled as u64;
        Ok(filled)
    }

    fn read_header(&mut self) -> Result<Option<SectionHeader>> {
        let offset = self.offset;

        let mut raw_tag = [0u8; SECTION_TAG_LEN];
        match self.fill(&mut raw_tag)? {
            0 => return Ok(None),
            n if n < SECTION_TAG_LEN => {
                return Err(PudError::UnexpectedEndOfFile {
                    offset: self.offset,
                })
            }
            _ => {}
        }

        let mut raw_length = [0u8; SECTION_LENGTH_LEN];
        if self.fill(&mut raw_length)? < SECTION_LENGTH_LEN {
            return Err(PudError::UnexpectedEndOfFile {
                offset: self.offset,
            });
        }
        let length = LittleEndian::read_i32(&raw_length);
        let length = u32::try_from(length).map_err(|_| PudError::InvalidSectionLength {
            tag: describe_raw_tag(&raw_tag),
            length,
        })?;

        tracing::trace!(tag = %describe_raw_tag(&raw_tag), length, offset, "Read section header");
        Ok(Some(SectionHeader {
            raw_tag,
            length,
            offset,
        }))
    }

    fn read_payload(&mut self, length: u32) -> Result<Vec<u8>> {
        let mut payload = Vec::new();
        let read = (&mut self.source)
            .take(u64::from(length))
            .read_to_end(&mut payload)?;
        self.offset += read as u64;
        if read < length as usize {
            return Err(PudError::UnexpectedEndOfFile {
                offset: self.offset,
            });
        }
        Ok(payload)
    }

    fn step(&mut self) -> Result<Option<Section>> {
        self.state = DecoderState::ReadingHeader;
        let Some(header) = self.read_header()? else {
            return Ok(None);
        };

        self.state = DecoderState::ReadingPayload;
        let payload = self.read_payload(header.length)?;

        self.state = DecoderState::Dispatching;
        let tag = SectionTag::from_bytes(&header.raw_tag)
            .ok_or_else(|| PudError::UnknownSection(describe_raw_tag(&header.raw_tag)))?;
        let data = self.decoder.decode(tag, &payload)?;

        tracing::debug!(tag = %tag, length = header.length, offset = header.offset, "Decoded section");
        Ok(Some(Section {
            tag,
            offset: header.offset,
            length: header.length,
            data,
        }))
    }
}

impl<'db, R: Read> Iterator for SectionStream<'db, R> {
    type Item = Result<Section>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_terminal() {
            return None;
        }
        self.state = DecoderState::Idle;

        match self.step() {
            Ok(Some(section)) => {
                self.sections += 1;
                self.state = DecoderState::Yielded;
                Some(Ok(section))
            }
            Ok(None) => {
                self.state = DecoderState::Eof;
                tracing::info!(sections = self.sections, bytes = self.offset, "End of section stream");
                None
            }
            Err(e) => {
                self.state = DecoderState::Error;
                tracing::debug!(error = %e, offset = self.offset, "Section stream failed");
                Some(Err(e))
            }
        }
    }
}

impl<'db, R: Read> std::iter::FusedIterator for SectionStream<'db, R> {}
