pub mod arithmetic_coder;
pub mod interval;
pub mod io;

#[cfg(test)]
mod tests;

use self::arithmetic_coder::ArithmeticCoder;
use self::io::{BitReader, BitSequence, BitWriter};
use crate::error::{Error, Result};
use crate::models::StaticOrder0;

pub trait ACRead {
    /// Read bit or `None` once the source is exhausted
    fn read_bit(&mut self) -> Option<u8>;
    /// Read 32 bits MSB first
    fn read_u32(&mut self) -> Option<u32>;
}

pub trait ACWrite {
    /// Increases the number of reverse bits to write
    fn inc_parity(&mut self);
    /// Writes a bit followed by the pending reverse bits
    fn write_bit(&mut self, bit: u8) -> Result<()>;
}

/// Encodes `buf` into any [`ACWrite`] sink, flushing at the end.
pub fn encode_into<W: ACWrite>(buf: &[u8], model: &StaticOrder0, io: &mut W) -> Result<()> {
    let mut ac = ArithmeticCoder::new_coder();
    for &byte in buf {
        let sym = model.symbol(byte).ok_or(Error::UnknownSymbol(byte))?;
        ac.encode(sym, model.total(), io)?;
    }
    ac.flush(io)
}

pub fn encode(buf: &[u8], model: &StaticOrder0) -> Result<BitSequence> {
    if buf.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut writer = BitWriter::new();
    encode_into(buf, model, &mut writer)?;
    Ok(writer.finish())
}

/// Decodes exactly `symbol_count` bytes from `bits`.
///
/// The model's total is the encoded length, any other count is rejected
/// up front rather than decoding padding or stopping short.
pub fn decode(bits: &BitSequence, model: &StaticOrder0, symbol_count: usize) -> Result<Vec<u8>> {
    let exhausted = |decoded| Error::StreamExhausted { decoded, expected: symbol_count };
    if u64::from(model.total()) != symbol_count as u64 {
        return Err(exhausted(0));
    }

    let mut reader = BitReader::new(bits);
    let mut ac = ArithmeticCoder::new_decoder(&mut reader).ok_or_else(|| exhausted(0))?;

    let mut out = Vec::with_capacity(symbol_count);
    while out.len() < symbol_count {
        let byte = ac.decode(model, &mut reader).ok_or_else(|| exhausted(out.len()))?;
        out.push(byte);
    }
    Ok(out)
}
