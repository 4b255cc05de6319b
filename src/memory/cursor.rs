//! # Cursors - Sequential Position over a ByteBuffer
//!
//! A cursor binds a position to one [`ByteBuffer`] and advances it by the
//! number of bytes actually transferred, which under the buffer's silent
//! truncation rule can be fewer than requested.
//!
//! [`Cursor`] borrows the buffer shared and only reads; [`CursorMut`]
//! borrows it uniquely and both reads and writes. Both are cheap,
//! per-operation values: the row store creates one at the start of each
//! operation, seeks once, and streams fields through it.
//!
//! The `*_exact` helpers are the codec entry points: codecs require full
//! field widths and turn short transfers into `InvalidOffset` failures
//! instead of silently producing torn values.

use eyre::{bail, Result};

use crate::error::Error;
use crate::memory::buffer::ByteBuffer;

/// Read-only position over a shared buffer borrow.
#[derive(Debug)]
pub struct Cursor<'a> {
    target: &'a ByteBuffer,
    position: usize,
}

/// Read/write position over a unique buffer borrow.
#[derive(Debug)]
pub struct CursorMut<'a> {
    target: &'a mut ByteBuffer,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(target: &'a ByteBuffer) -> Self {
        Self {
            target,
            position: 0,
        }
    }

    /// Reads into `dest` at the current position and advances by the bytes
    /// actually read.
    pub fn read(&mut self, dest: &mut [u8]) -> Result<usize> {
        let read = self.target.read(self.position, dest)?;
        self.position += read;
        Ok(read)
    }

    /// Reads exactly `dest.len()` bytes or fails. Empty reads succeed
    /// without touching the buffer.
    pub fn read_exact(&mut self, dest: &mut [u8]) -> Result<()> {
        if dest.is_empty() {
            return Ok(());
        }
        let start = self.position;
        let read = self.read(dest)?;
        if read < dest.len() {
            bail!(Error::InvalidOffset {
                offset: start + read,
                bound: self.target.size(),
                region: "used region",
            });
        }
        Ok(())
    }

    /// Advances the position without transferring bytes.
    pub fn skip(&mut self, count: usize) {
        self.position += count;
    }

    pub fn offset(&self) -> usize {
        self.position
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.position = offset;
    }

    /// Rebinds the cursor to another buffer and resets the position to 0.
    pub fn set_target(&mut self, target: &'a ByteBuffer) {
        self.target = target;
        self.position = 0;
    }
}

impl<'a> CursorMut<'a> {
    pub fn new(target: &'a mut ByteBuffer) -> Self {
        Self {
            target,
            position: 0,
        }
    }

    /// Reads into `dest` at the current position and advances by the bytes
    /// actually read.
    pub fn read(&mut self, dest: &mut [u8]) -> Result<usize> {
        let read = self.target.read(self.position, dest)?;
        self.position += read;
        Ok(read)
    }

    /// Reads exactly `dest.len()` bytes or fails. Empty reads succeed
    /// without touching the buffer.
    pub fn read_exact(&mut self, dest: &mut [u8]) -> Result<()> {
        if dest.is_empty() {
            return Ok(());
        }
        let start = self.position;
        let read = self.read(dest)?;
        if read < dest.len() {
            bail!(Error::InvalidOffset {
                offset: start + read,
                bound: self.target.size(),
                region: "used region",
            });
        }
        Ok(())
    }

    /// Writes `src` at the current position and advances by the bytes
    /// actually written, which the buffer may have truncated.
    pub fn write(&mut self, src: &[u8]) -> Result<usize> {
        let written = self.target.write(self.position, src)?;
        self.position += written;
        Ok(written)
    }

    /// Writes all of `src` or fails; truncation is an error here. Empty
    /// writes succeed without touching the buffer.
    pub fn write_all(&mut self, src: &[u8]) -> Result<()> {
        if src.is_empty() {
            return Ok(());
        }
        let start = self.position;
        let written = self.write(src)?;
        if written < src.len() {
            bail!(Error::InvalidOffset {
                offset: start + written,
                bound: self.target.capacity(),
                region: "buffer",
            });
        }
        Ok(())
    }

    /// Writes a single byte and advances by one.
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.target.write_byte(self.position, byte)?;
        self.position += 1;
        Ok(())
    }

    /// Writes `count` zero bytes through a stack chunk.
    pub fn write_zeros(&mut self, count: usize) -> Result<()> {
        const CHUNK: [u8; 64] = [0u8; 64];
        let mut remaining = count;
        while remaining > 0 {
            let step = remaining.min(CHUNK.len());
            self.write_all(&CHUNK[..step])?;
            remaining -= step;
        }
        Ok(())
    }

    /// Advances the position without transferring bytes.
    pub fn skip(&mut self, count: usize) {
        self.position += count;
    }

    pub fn offset(&self) -> usize {
        self.position
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.position = offset;
    }

    /// Rebinds the cursor to another buffer and resets the position to 0.
    pub fn set_target(&mut self, target: &'a mut ByteBuffer) {
        self.target = target;
        self.position = 0;
    }
}
