use super::{Contiguity, RingBuffer};

/// Rotates `buf` left by `mid` positions in place.
///
/// Single forward pass of swaps with O(1) extra space. Every element is moved
/// exactly once into its final position. `mid == 0` and `mid >= buf.len()`
/// leave `buf` unchanged.
pub fn rotate_left(buf: &mut [u8], mid: usize) {
    let len = buf.len();
    if mid == 0 || mid >= len {
        return;
    }

    let mut first = 0;
    let mut middle = mid;
    let mut next = mid;

    while first != next {
        buf.swap(first, next);
        first += 1;

        if next == len - 1 {
            next = middle;
        } else {
            next += 1;
        }

        // The block that started at `middle` has been swapped forward; its
        // remainder now begins at `next`.
        if first == middle {
            middle = next;
        }
    }
}

impl RingBuffer<'_> {
    /// True while the content spans the end of the storage and continues at 0.
    #[inline]
    pub(super) fn is_wrapped(&self) -> bool {
        self.head < self.tail && self.head != 0
    }

    pub fn contiguity(&self) -> Contiguity {
        if self.is_wrapped() {
            Contiguity::Wrapped
        } else {
            Contiguity::Contiguous
        }
    }

    #[inline]
    pub fn is_contiguous(&self) -> bool {
        !self.is_wrapped()
    }

    /// Removes a wrap in place so the content becomes `[0, len)`.
    ///
    /// No-op when the content is already contiguous. An empty buffer has its
    /// cursors rewound to 0.
    pub fn contiguate(&mut self) {
        if self.is_empty() {
            self.reset_cursors();
            return;
        }
        if !self.is_wrapped() {
            return;
        }

        let stored = self.available_for_read();
        let old_tail = self.tail;

        rotate_left(&mut self.storage[..], old_tail);

        self.tail = 0;
        self.head = stored;
        tracing::debug!(stored, old_tail, "contiguated ring buffer");
    }
}
