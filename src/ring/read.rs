use super::{RingBuffer, RingError};

impl RingBuffer<'_> {
    /// Copies the whole content into `out` and rewinds both cursors to 0.
    ///
    /// Fails with `Insufficient` when `out` cannot hold the content; the
    /// buffer is left untouched in that case.
    pub fn read_all(&mut self, out: &mut [u8]) -> Result<usize, RingError> {
        let stored = self.available_for_read();
        if stored > out.len() {
            tracing::debug!(stored, out_len = out.len(), "read_all target too small");
            return Err(RingError::Insufficient {
                required: stored,
                available: out.len(),
            });
        }

        let (first, second) = self.as_slices();
        out[..first.len()].copy_from_slice(first);
        out[first.len()..stored].copy_from_slice(second);

        self.reset_cursors();
        Ok(stored)
    }

    /// Pops the next byte, returning 0 on an empty buffer.
    ///
    /// A zero return is indistinguishable from a stored zero byte. Check
    /// [`is_empty`](Self::is_empty) first or use
    /// [`try_read_byte`](Self::try_read_byte).
    pub fn read_byte(&mut self) -> u8 {
        match self.try_read_byte() {
            Some(byte) => byte,
            None => {
                tracing::warn!("reading from empty ring buffer");
                0
            }
        }
    }

    pub fn try_read_byte(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }

        let byte = self.storage[self.tail];
        self.tail = self.advance(self.tail, 1);
        Some(byte)
    }

    /// Copies exactly `out.len()` bytes from the front of the content and
    /// advances the read cursor past them.
    pub fn read_bytes(&mut self, out: &mut [u8]) -> Result<usize, RingError> {
        let requested = out.len();
        let available = self.available_for_read();
        if requested > available {
            tracing::debug!(requested, available, "read_bytes size mismatch");
            return Err(RingError::Mismatch {
                requested,
                available,
            });
        }

        let start = self.tail;
        let contiguous = (self.storage.len() - start).min(requested);
        out[..contiguous].copy_from_slice(&self.storage[start..start + contiguous]);
        out[contiguous..].copy_from_slice(&self.storage[..requested - contiguous]);

        self.tail = self.advance(start, requested);
        Ok(requested)
    }
}
