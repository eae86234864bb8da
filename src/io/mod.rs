//! File format readers

pub mod pud;

pub use pud::{read_batch, PudReader, PudReaderConfiguration};
