use super::{ACRead, ACWrite};
use crate::error::{Error, Result};

/// Ordered bits, packed MSB first.
///
/// Only the first `len` bits are meaningful, the tail of the last byte is 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    buf: Vec<u8>,
    len: usize,
}

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the first `len` bits of `buf`
    pub fn from_bytes(mut buf: Vec<u8>, len: usize) -> Result<Self> {
        let needed = len.div_ceil(8);
        if buf.len() < needed {
            return Err(Error::Truncated { needed, available: buf.len() });
        }
        buf.truncate(needed);
        if len % 8 != 0 {
            if let Some(last) = buf.last_mut() {
                *last &= 0xff << (8 - len % 8);
            }
        }
        Ok(Self { buf, len })
    }

    pub fn push(&mut self, bit: u8) {
        debug_assert!(bit <= 1, "Tried to push invalid bit");
        let shift = 7 - self.len % 8;
        if shift == 7 {
            self.buf.push(0);
        }
        if let Some(last) = self.buf.last_mut() {
            *last |= (bit & 1) << shift;
        }
        self.len += 1;
    }

    pub fn get(&self, idx: usize) -> Option<u8> {
        if idx >= self.len {
            return None;
        }
        Some((self.buf[idx / 8] >> (7 - idx % 8)) & 1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed bytes, zero padded to a byte boundary
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Zero bits appended to reach a byte boundary, 0..=7
    pub fn padding(&self) -> u8 {
        // always < 8
        ((8 - self.len % 8) % 8) as u8
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.len).filter_map(|i| self.get(i))
    }
}

impl FromIterator<u8> for BitSequence {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut bits = Self::new();
        iter.into_iter().for_each(|bit| bits.push(bit));
        bits
    }
}

/// Arithmetic coder sink collecting bits into a [`BitSequence`]
#[derive(Debug, Default)]
pub struct BitWriter {
    bits: BitSequence,
    rev_bits: u64,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> BitSequence {
        debug_assert!(self.rev_bits == 0, "Unflushed parity bits");
        self.bits
    }
}

impl ACWrite for BitWriter {
    fn inc_parity(&mut self) {
        self.rev_bits += 1;
    }

    fn write_bit(&mut self, bit: u8) -> Result<()> {
        debug_assert!(bit <= 1, "Tried to write invalid bit");
        self.bits.push(bit);
        while self.rev_bits > 0 {
            self.rev_bits -= 1;
            self.bits.push(bit ^ 1);
        }
        Ok(())
    }
}

/// Arithmetic coder source over a [`BitSequence`].
///
/// Reads past the end yield 0 for another [`PAD_BITS`] bits, after that
/// the reader is exhausted.
#[derive(Debug)]
pub struct BitReader<'a> {
    bits: &'a BitSequence,
    pos: usize,
}

/// Zero bits virtually appended to the stream, one full state register
pub const PAD_BITS: usize = u32::BITS as usize;

impl<'a> BitReader<'a> {
    pub fn new(bits: &'a BitSequence) -> Self {
        Self { bits, pos: 0 }
    }

    /// Read cursor in bits
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.bits.len() + PAD_BITS
    }
}

impl ACRead for BitReader<'_> {
    fn read_bit(&mut self) -> Option<u8> {
        if self.is_exhausted() {
            return None;
        }
        let bit = self.bits.get(self.pos).unwrap_or(0);
        self.pos += 1;
        Some(bit)
    }

    fn read_u32(&mut self) -> Option<u32> {
        (0..u32::BITS).try_fold(0, |acc, _| Some((acc << 1) | u32::from(self.read_bit()?)))
    }
}
