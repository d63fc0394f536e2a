pub mod buffer;
pub mod read;
pub mod ring_error;
pub mod rotate;
pub mod write;
pub mod zero_copy;

pub use buffer::RingBuffer;
pub use ring_error::*;
pub use rotate::rotate_left;
