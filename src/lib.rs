pub mod config;
pub mod ring;

pub use ring::{Contiguity, RingBuffer, RingError};
