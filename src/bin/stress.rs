use memmap2::MmapMut;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use streamring::RingBuffer;
use streamring::config::RunConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const CHUNK: usize = 1500;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig::from_env(1024 * 1024, 5)?;
    if config.capacity <= CHUNK {
        return Err(format!("capacity {} must exceed chunk size {}", config.capacity, CHUNK).into());
    }

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| format!("Failed to set Ctrl+C handler: {}", e))?;

    let mut region = MmapMut::map_anon(config.capacity)?;
    let mut ring = RingBuffer::new(&mut region[..])?;

    let chunk: Vec<u8> = (0..CHUNK).map(|i| i as u8).collect();
    // Reads use a size coprime with the chunk so the cursors drift across
    // the storage end.
    let mut sink = vec![0u8; CHUNK - 7];

    let mut written = 0u64;
    let mut read = 0u64;
    let mut rotations = 0u64;

    info!(
        capacity = config.capacity,
        seconds = config.duration.as_secs(),
        "ring stress test starting"
    );
    let started = Instant::now();

    while running.load(Ordering::Relaxed) && started.elapsed() < config.duration {
        for round in 0..1024 {
            while ring.available_for_write() >= CHUNK {
                ring.append(&chunk)?;
                written += CHUNK as u64;
            }

            if round % 64 == 0 && !ring.is_contiguous() {
                ring.contiguate();
                rotations += 1;
            }

            while ring.available_for_read() >= sink.len() {
                ring.read_bytes(&mut sink)?;
                read += sink.len() as u64;
            }
        }
    }

    let elapsed = started.elapsed().as_secs_f64();
    read += ring.available_for_read() as u64;
    ring.clear();

    info!(
        written_bytes = written,
        read_bytes = read,
        rotations,
        throughput_mib_s = written as f64 / elapsed / 1024.0 / 1024.0,
        "ring stress test finished"
    );

    Ok(())
}
