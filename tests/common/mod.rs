//! Shared test utilities for war2pud integration tests.
//!
//! Path resolution for the bundled data directory, a shared database, and
//! helpers that decode synthesized streams built with [`builders::PudBuilder`].

#![allow(dead_code)]

pub mod builders;

use std::io::Cursor;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use war2pud::{GameDatabase, PudDocument, PudReader, PudReaderConfiguration, Result, Section};

/// The `data/` directory shipped with the crate.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Tables loaded from [`data_dir`].
pub fn database() -> GameDatabase {
    GameDatabase::load(data_dir()).expect("bundled data directory should load")
}

/// Temporary directory removed when dropped.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Deref for ScratchDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for ScratchDir {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Scratch directory under the system temp dir, unique per test name.
pub fn scratch_dir(name: &str) -> ScratchDir {
    let path = std::env::temp_dir().join(format!("war2pud-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&path).expect("create scratch dir");
    ScratchDir { path }
}

/// Decode every element of a stream, errors included.
pub fn decode_all(bytes: &[u8], db: &GameDatabase) -> Vec<Result<Section>> {
    PudReader::from_reader(Cursor::new(bytes.to_vec()))
        .decode(db)
        .collect()
}

/// Decode with a custom configuration.
pub fn decode_all_with(
    bytes: &[u8],
    db: &GameDatabase,
    config: PudReaderConfiguration,
) -> Vec<Result<Section>> {
    PudReader::from_reader(Cursor::new(bytes.to_vec()))
        .with_configuration(config)
        .decode(db)
        .collect()
}

/// Decode and fold a stream.
pub fn read(bytes: &[u8], db: &GameDatabase) -> Result<PudDocument> {
    PudReader::from_reader(Cursor::new(bytes.to_vec())).read(db)
}
