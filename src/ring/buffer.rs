use super::RingError;

/// Byte ring over caller-owned storage.
///
/// One slot of `storage` is always left unused so that `head == tail` means
/// empty and never full. Usable capacity is therefore `storage.len() - 1`.
///
/// Content is the run `[tail, head)` walking forward circularly.
#[derive(Debug)]
pub struct RingBuffer<'a> {
    pub(super) storage: &'a mut [u8],
    pub(super) head: usize,
    pub(super) tail: usize,
}

impl<'a> RingBuffer<'a> {
    pub fn new(storage: &'a mut [u8]) -> Result<Self, RingError> {
        if storage.len() < 2 {
            return Err(RingError::NullStorage { len: storage.len() });
        }

        Ok(Self {
            storage,
            head: 0,
            tail: 0,
        })
    }

    /// Length of the backing storage, including the reserved slot.
    #[inline(always)]
    pub fn storage_len(&self) -> usize {
        self.storage.len()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.len() - 1
    }

    #[inline(always)]
    pub fn write_cursor(&self) -> usize {
        self.head
    }

    #[inline(always)]
    pub fn read_cursor(&self) -> usize {
        self.tail
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.advance(self.head, 1) == self.tail
    }

    #[inline]
    pub fn available_for_read(&self) -> usize {
        if self.head >= self.tail {
            self.head - self.tail
        } else {
            (self.storage.len() - self.tail) + self.head
        }
    }

    #[inline]
    pub fn available_for_write(&self) -> usize {
        if self.head >= self.tail {
            self.storage.len() - self.head + self.tail - 1
        } else {
            self.tail - self.head - 1
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.available_for_read()
    }

    /// Discards all content and moves both cursors back to offset 0.
    pub fn clear(&mut self) {
        self.reset_cursors();
    }

    /// Content in read order as up to two slices; the second is empty unless
    /// the content wraps.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        if self.head >= self.tail {
            (&self.storage[self.tail..self.head], &[])
        } else {
            (&self.storage[self.tail..], &self.storage[..self.head])
        }
    }

    /// The whole backing region, including bytes outside the content.
    pub fn storage(&self) -> &[u8] {
        &self.storage[..]
    }

    #[inline(always)]
    pub(super) fn advance(&self, cursor: usize, n: usize) -> usize {
        (cursor + n) % self.storage.len()
    }

    #[inline(always)]
    pub(super) fn reset_cursors(&mut self) {
        tracing::trace!(head = self.head, tail = self.tail, "resetting ring cursors");
        self.head = 0;
        self.tail = 0;
    }
}
