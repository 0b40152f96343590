//! Memory phase: hold `size_mb` one-mebibyte buffers at once.
//!
//! Allocation failure is not reported as an error. The global allocator aborts
//! the process, which is the intended outcome when the host runs out of memory.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Characters per chunk. Fillers are single-byte, so this is also the byte size.
pub const CHUNK_SIZE: usize = 1024 * 1024;

pub fn allocate_chunks(size_mb: usize, filler: char) -> Vec<String> {
    let mut data = Vec::with_capacity(size_mb);
    for _ in 0..size_mb {
        data.push(filler.to_string().repeat(CHUNK_SIZE));
    }
    data
}

/// Allocates the chunks, runs `while_resident` before they are released, and
/// returns the count with the time spent allocating.
pub fn memory_intensive_task<F: FnOnce()>(
    size_mb: usize,
    filler: char,
    while_resident: F,
) -> (usize, Duration) {
    let start = Instant::now();
    let data = black_box(allocate_chunks(size_mb, filler));
    let elapsed = start.elapsed();

    while_resident();

    let allocated = data.len();
    tracing::debug!(
        chunks = allocated,
        bytes = data.iter().map(String::len).sum::<usize>(),
        "memory chunks resident"
    );
    (allocated, elapsed)
}
