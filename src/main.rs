use memmap2::MmapMut;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use streamring::config::RunConfig;
use streamring::{RingBuffer, RingError};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const HEADER_LEN: usize = 2;
const MAX_PAYLOAD: usize = 64;

#[derive(Debug, Default, Clone, Copy)]
struct RelayStats {
    frames: u64,
    bytes: u64,
    wraps_healed: u64,
    corrupt: u64,
}

impl RelayStats {
    fn integrity(&self) -> f64 {
        let total = self.frames + self.corrupt;
        if total == 0 {
            1.0
        } else {
            self.frames as f64 / total as f64
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // STREAMRING_SECONDS=0 runs until Ctrl+C.
    let config = RunConfig::from_env(4096, 0)?;
    info!(capacity = config.capacity, "streamring relay starting, Ctrl+C to stop");

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    let mut region = MmapMut::map_anon(config.capacity)?;
    let mut ring = RingBuffer::new(&mut region[..])?;

    let mut stats = RelayStats::default();
    let mut seq = 0u32;
    let started = Instant::now();
    let mut last_report = started;

    while running.load(Ordering::SeqCst) {
        let payload_len = 1 + (seq as usize % MAX_PAYLOAD);
        if payload_len + HEADER_LEN > ring.capacity() {
            warn!(payload_len, capacity = ring.capacity(), "frame does not fit, stopping");
            break;
        }

        receive(&mut ring, seq, payload_len)?;
        ring.prepend_u16(payload_len as u16)?;

        if !ring.is_contiguous() {
            ring.contiguate();
            stats.wraps_healed += 1;
        }

        match forward(&mut ring, seq) {
            Ok(n) => {
                stats.frames += 1;
                stats.bytes += n as u64;
            }
            Err(e) => {
                warn!(seq, error = %e, "dropping corrupt frame");
                stats.corrupt += 1;
                ring.clear();
            }
        }

        seq = seq.wrapping_add(1);

        if last_report.elapsed() >= Duration::from_secs(5) {
            info!(
                frames = stats.frames,
                bytes = stats.bytes,
                wraps_healed = stats.wraps_healed,
                integrity = stats.integrity(),
                "relay status"
            );
            last_report = Instant::now();
        }

        if !config.duration.is_zero() && started.elapsed() >= config.duration {
            break;
        }
    }

    info!(
        frames = stats.frames,
        bytes = stats.bytes,
        wraps_healed = stats.wraps_healed,
        corrupt = stats.corrupt,
        "relay stopped"
    );
    Ok(())
}

fn pattern(seq: u32, i: usize) -> u8 {
    (seq as usize).wrapping_add(i) as u8
}

/// Simulates data arriving from the network, alternating between the copying
/// and the zero-copy write paths.
fn receive(ring: &mut RingBuffer<'_>, seq: u32, len: usize) -> Result<(), RingError> {
    if seq % 2 == 0 {
        let mut chunk = [0u8; MAX_PAYLOAD];
        for (i, b) in chunk[..len].iter_mut().enumerate() {
            *b = pattern(seq, i);
        }
        ring.append(&chunk[..len])?;
    } else {
        let slot = ring.write_slice();
        let n = slot.len().min(len);
        for (i, b) in slot[..n].iter_mut().enumerate() {
            *b = pattern(seq, i);
        }
        ring.commit_write(n)?;

        for i in n..len {
            ring.append_byte(pattern(seq, i))?;
        }
    }
    Ok(())
}

/// Parses one length-prefixed frame through the read view and consumes it.
fn forward(ring: &mut RingBuffer<'_>, seq: u32) -> Result<usize, Box<dyn std::error::Error>> {
    let view = ring.read_slice().ok_or("frame still wrapped")?;
    if view.len() < HEADER_LEN {
        return Err("short frame".into());
    }

    let len = u16::from_be_bytes([view[0], view[1]]) as usize;
    let payload = view.get(HEADER_LEN..HEADER_LEN + len).ok_or("truncated payload")?;
    if payload
        .iter()
        .enumerate()
        .any(|(i, b)| *b != pattern(seq, i))
    {
        return Err("payload mismatch".into());
    }

    let total = HEADER_LEN + len;
    ring.commit_read(total)?;
    Ok(total)
}
