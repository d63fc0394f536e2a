use super::{RingBuffer, RingError};

impl RingBuffer<'_> {
    /// Content as one slice, or `None` while it wraps.
    ///
    /// Call [`contiguate`](Self::contiguate) first, or fall back to
    /// [`read_bytes`](Self::read_bytes), when this returns `None`.
    pub fn read_slice(&self) -> Option<&[u8]> {
        if self.is_wrapped() {
            return None;
        }
        if self.head < self.tail {
            // head == 0: content runs up to the end of the storage.
            Some(&self.storage[self.tail..])
        } else {
            Some(&self.storage[self.tail..self.head])
        }
    }

    /// Free run starting at the write cursor.
    ///
    /// Only the contiguous part of the free space is returned; bytes written
    /// here become content after [`commit_write`](Self::commit_write).
    pub fn write_slice(&mut self) -> &mut [u8] {
        if self.is_empty() {
            self.reset_cursors();
        }

        let len = self.storage.len();
        let end = if self.head < self.tail {
            self.tail - 1
        } else if self.tail == 0 {
            len - 1
        } else {
            len
        };
        &mut self.storage[self.head..end]
    }

    /// Advances the write cursor over `n` bytes already placed through
    /// [`write_slice`](Self::write_slice).
    pub fn commit_write(&mut self, n: usize) -> Result<usize, RingError> {
        let available = self.available_for_write();
        if n > available {
            return Err(RingError::Insufficient {
                required: n,
                available,
            });
        }

        self.head = self.advance(self.head, n);
        Ok(n)
    }

    /// Drops `n` bytes from the front of the content without copying them.
    pub fn commit_read(&mut self, n: usize) -> Result<usize, RingError> {
        let available = self.available_for_read();
        if n > available {
            return Err(RingError::Mismatch {
                requested: n,
                available,
            });
        }

        self.tail = self.advance(self.tail, n);
        Ok(n)
    }
}
