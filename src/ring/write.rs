use super::{RingBuffer, RingError};

impl RingBuffer<'_> {
    #[inline]
    fn ensure_space(&self, required: usize) -> Result<(), RingError> {
        let available = self.available_for_write();
        if required > available {
            tracing::debug!(required, available, "ring write rejected");
            return Err(RingError::Insufficient {
                required,
                available,
            });
        }
        Ok(())
    }

    /// Writes `data` after the existing content.
    ///
    /// All or nothing: on `Insufficient` neither the storage nor the cursors
    /// change. An empty buffer is rewound to offset 0 before writing.
    pub fn append(&mut self, data: &[u8]) -> Result<usize, RingError> {
        if data.is_empty() {
            return Ok(0);
        }
        self.ensure_space(data.len())?;

        if self.is_empty() {
            self.reset_cursors();
        }

        let start = self.head;
        let contiguous = self.storage.len() - start;

        if data.len() <= contiguous {
            self.storage[start..start + data.len()].copy_from_slice(data);
        } else {
            let (first, rest) = data.split_at(contiguous);
            self.storage[start..].copy_from_slice(first);
            self.storage[..rest.len()].copy_from_slice(rest);
        }

        self.head = self.advance(start, data.len());
        Ok(data.len())
    }

    pub fn append_byte(&mut self, byte: u8) -> Result<usize, RingError> {
        self.ensure_space(1)?;

        if self.is_empty() {
            self.reset_cursors();
        }

        self.storage[self.head] = byte;
        self.head = self.advance(self.head, 1);
        Ok(1)
    }

    /// Writes `data` in front of the existing content, moving the read cursor
    /// backwards.
    ///
    /// On an empty buffer the data is anchored against the end of the storage
    /// with the write cursor at 0, leaving the rest free for later appends.
    pub fn prepend(&mut self, data: &[u8]) -> Result<usize, RingError> {
        if data.is_empty() {
            return Ok(0);
        }
        self.ensure_space(data.len())?;

        let len = self.storage.len();

        if self.is_empty() {
            self.head = 0;
            self.tail = len - data.len();
            self.storage[self.tail..].copy_from_slice(data);
            return Ok(data.len());
        }

        if data.len() <= self.tail {
            self.tail -= data.len();
            self.storage[self.tail..self.tail + data.len()].copy_from_slice(data);
        } else {
            // The tail end of `data` fills [0, tail), the front end wraps to
            // the end of the storage.
            let (front, back) = data.split_at(data.len() - self.tail);
            self.storage[..back.len()].copy_from_slice(back);

            let new_tail = len - front.len();
            self.storage[new_tail..].copy_from_slice(front);
            self.tail = new_tail;
        }

        Ok(data.len())
    }

    pub fn prepend_byte(&mut self, byte: u8) -> Result<usize, RingError> {
        self.ensure_space(1)?;

        let len = self.storage.len();

        if self.is_empty() {
            self.head = 0;
            self.tail = len - 1;
        } else if self.tail == 0 {
            self.tail = len - 1;
        } else {
            self.tail -= 1;
        }

        self.storage[self.tail] = byte;
        Ok(1)
    }

    /// Prepends `value` in big-endian byte order.
    pub fn prepend_u16(&mut self, value: u16) -> Result<usize, RingError> {
        self.prepend(&value.to_be_bytes())
    }

    /// Prepends `value` in big-endian byte order.
    pub fn prepend_u32(&mut self, value: u32) -> Result<usize, RingError> {
        self.prepend(&value.to_be_bytes())
    }
}
