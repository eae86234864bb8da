//! PUD map reading
//!
//! A PUD file is a flat sequence of sections, each a 4-byte tag, a
//! little-endian `i32` payload length and the payload itself.
//! [`PudReader::decode`] walks the sections lazily; [`PudReader::read`] folds
//! them into a [`PudDocument`](crate::PudDocument).

mod batch;
pub mod constants;
mod reader;
pub mod section;
mod section_reader;
pub mod section_tag;
mod stream_reader;

pub use batch::read_batch;
pub use reader::{DecoderState, PudReader, PudReaderConfiguration, SectionStream};
pub use section::{Section, SectionData, TypeHeader};
pub use section_reader::SectionDecoder;
pub use section_tag::SectionTag;
