//! Bounded document reading

use crate::error::{MapError, Result};
use serde_json::Value;
use std::io::{BufReader, Read};

/// Parse a JSON document from `reader`, reading at most `limit` bytes
///
/// Input longer than `limit` is rejected even when its first `limit` bytes
/// already form a complete value.
pub fn read_document<R: Read>(reader: R, limit: usize) -> Result<Value> {
    let mut limited = LimitedReader::new(BufReader::new(reader), limit);
    let parsed = serde_json::from_reader(&mut limited);
    if limited.limit_exceeded() {
        return Err(MapError::InputTooLarge { limit_bytes: limit });
    }
    parsed.map_err(MapError::Json)
}

/// Reader wrapper that enforces a byte limit
struct LimitedReader<R> {
    inner: R,
    bytes_read: usize,
    limit: usize,
    exceeded: bool,
}

impl<R> LimitedReader<R> {
    fn new(inner: R, limit: usize) -> Self {
        Self {
            inner,
            bytes_read: 0,
            limit,
            exceeded: false,
        }
    }

    fn limit_exceeded(&self) -> bool {
        self.exceeded
    }
}

impl<R: Read> Read for LimitedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.exceeded {
            return Ok(0);
        }

        // One byte past the limit is enough to tell oversized input apart
        let remaining = self.limit.saturating_add(1).saturating_sub(self.bytes_read);
        let max_read = buf.len().min(remaining);
        let n = self.inner.read(&mut buf[..max_read])?;
        self.bytes_read += n;

        if self.bytes_read > self.limit {
            self.exceeded = true;
            return Ok(0);
        }

        Ok(n)
    }
}
