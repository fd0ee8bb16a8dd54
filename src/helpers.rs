use crate::entropy_coding::ACWrite;
use crate::error::Result;
use std::sync::atomic::{AtomicU8, Ordering};

static VERBOSITY: AtomicU8 = AtomicU8::new(0);

pub fn set_verbosity(level: u8) {
    VERBOSITY.store(level, Ordering::Relaxed);
}

#[inline]
pub fn verbosity() -> u8 {
    VERBOSITY.load(Ordering::Relaxed)
}

/// Logs to stderr when the verbosity is at least `level`.
/// The message is only formatted when it will be printed.
#[inline]
pub fn vlog(level: u8, msg: impl FnOnce() -> String) {
    if verbosity() >= level {
        eprintln!("[static-ac] {}", msg());
    }
}

/// Counts the bits an encoder would emit, without storing them
pub struct ACStats {
    bit_count: u64,
    rev_bits: u64,
}

impl ACStats {
    pub fn new() -> Self {
        Self { bit_count: 0, rev_bits: 0 }
    }

    pub fn bit_count(&self) -> u64 {
        self.bit_count + self.rev_bits
    }
}

impl Default for ACStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ACWrite for ACStats {
    fn inc_parity(&mut self) {
        self.rev_bits += 1;
    }

    fn write_bit(&mut self, _bit: u8) -> Result<()> {
        self.bit_count += 1 + self.rev_bits;
        self.rev_bits = 0;
        Ok(())
    }
}
