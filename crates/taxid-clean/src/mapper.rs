//! Column mapping strategies.
//!
//! A mapper applies a per-value function to every cell of a column and
//! returns the results in input order. The first error aborts the whole
//! mapping and no partial result is returned.

use rayon::prelude::*;

use crate::error::Result;
use crate::progress::Progress;

/// Rows processed between progress updates of the sequential mapper.
const PROGRESS_STEP: usize = 1024;

/// Default number of rows per parallel shard.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Applies a function across a column.
pub trait ColumnMapper: Sync {
    fn map_column<T, F>(&self, values: &[String], progress: &Progress, f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&str) -> Result<T> + Sync;
}

/// Maps a column on the calling thread.
///
/// Stops at the first failing row, so the reported failure is always the
/// earliest one in the column.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialMapper;

impl ColumnMapper for SequentialMapper {
    fn map_column<T, F>(&self, values: &[String], progress: &Progress, f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&str) -> Result<T> + Sync,
    {
        let mut mapped = Vec::with_capacity(values.len());
        for chunk in values.chunks(PROGRESS_STEP) {
            for value in chunk {
                mapped.push(f(value)?);
            }
            progress.inc(chunk.len());
        }
        Ok(mapped)
    }
}

/// Maps a column in fixed-size shards on the rayon thread pool.
///
/// Shards are reassembled in input order. On failure the remaining shards
/// are abandoned; which failing row is reported is the first one detected,
/// not necessarily the first one in the column.
#[derive(Debug, Clone, Copy)]
pub struct ParallelMapper {
    chunk_size: usize,
}

impl Default for ParallelMapper {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ParallelMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows per shard (at least one).
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl ColumnMapper for ParallelMapper {
    fn map_column<T, F>(&self, values: &[String], progress: &Progress, f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&str) -> Result<T> + Sync,
    {
        let shards = values
            .par_chunks(self.chunk_size)
            .map(|chunk| {
                let mapped = chunk
                    .iter()
                    .map(|value| f(value))
                    .collect::<Result<Vec<T>>>()?;
                progress.inc(chunk.len());
                Ok(mapped)
            })
            .collect::<Result<Vec<Vec<T>>>>()?;
        Ok(shards.into_iter().flatten().collect())
    }
}
