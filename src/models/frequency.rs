use crate::error::{Error, Result};

/// Byte counts in first-occurrence order.
///
/// This is what gets stored in the container, the decoder rebuilds the exact
/// same [`StaticOrder0`](super::StaticOrder0) from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(u8, u32)>,
}

impl FrequencyTable {
    /// Counts `buf` in a single pass.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        if buf.is_empty() {
            return Err(Error::EmptyInput);
        }
        if buf.len() > super::MAX_TOTAL as usize {
            return Err(Error::InputTooLong(buf.len()));
        }

        let mut counts = [0u32; 256];
        let mut order = Vec::with_capacity(256);
        for &byte in buf {
            let count = &mut counts[usize::from(byte)];
            if *count == 0 {
                order.push(byte);
            }
            *count += 1;
        }

        let entries = order
            .into_iter()
            .map(|byte| (byte, counts[usize::from(byte)]))
            .collect();
        Ok(Self { entries })
    }

    /// Builds a table from stored `(symbol, count)` pairs, keeping their order.
    pub fn from_entries(entries: Vec<(u8, u32)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::ModelMismatch("empty frequency table"));
        }
        if entries.len() > 256 {
            return Err(Error::ModelMismatch("more than 256 symbols"));
        }

        let mut seen = [false; 256];
        for &(byte, count) in &entries {
            if count == 0 {
                return Err(Error::ModelMismatch("zero frequency"));
            }
            if std::mem::replace(&mut seen[usize::from(byte)], true) {
                return Err(Error::ModelMismatch("duplicate symbol"));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(u8, u32)] {
        &self.entries
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the source length
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| u64::from(count)).sum()
    }

    pub fn get(&self, byte: u8) -> Option<u32> {
        self.entries
            .iter()
            .find(|&&(b, _)| b == byte)
            .map(|&(_, count)| count)
    }
}
