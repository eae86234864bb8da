//! Parallel decoding of several files

use rayon::prelude::*;
use std::path::Path;

use super::reader::{PudReader, PudReaderConfiguration};
use crate::document::PudDocument;
use crate::error::Result;
use crate::tables::GameDatabase;

/// Read every file in `paths`, one decoder per file.
///
/// Files are decoded on the rayon thread pool. Only `database` is shared.
/// Results come back in the order of `paths`; one failing file does not
/// affect the others.
pub fn read_batch<P>(
    paths: &[P],
    database: &GameDatabase,
    config: &PudReaderConfiguration,
) -> Vec<Result<PudDocument>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let result = PudReader::from_file(path)
                .and_then(|reader| reader.with_configuration(config.clone()).read(database));
            if let Err(e) = &result {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read map");
            }
            result
        })
        .collect()
}
