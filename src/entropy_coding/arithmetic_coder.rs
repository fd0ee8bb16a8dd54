use std::marker::PhantomData;

use super::interval::{Interval, Renorm, Q1};
use super::{ACRead, ACWrite};
use crate::error::Result;
use crate::models::{StaticOrder0, Symbol};

/// The `ArithmeticCoder` encodes/decodes bytes given a static model
#[derive(Clone)]
pub struct ArithmeticCoder<T> {
    interval: Interval,
    x: u32,                  // state, decoder only
    _marker: PhantomData<T>, // use for io
}

impl<W: ACWrite> ArithmeticCoder<W> {
    pub fn new_coder() -> Self {
        Self { interval: Interval::full(), x: 0, _marker: PhantomData }
    }

    pub fn encode(&mut self, sym: &Symbol, total: u32, io: &mut W) -> Result<()> {
        self.interval.narrow(sym, total);

        // Renormalize range -> write determined bits, defer straddles
        self.interval.renormalize(|step| match step {
            Renorm::EmitLow => io.write_bit(0),
            Renorm::EmitHigh => io.write_bit(1),
            Renorm::Straddle => {
                io.inc_parity();
                Ok(())
            }
            Renorm::Done => Ok(()),
        })
    }

    /// Writes the tail that pins the final interval: `01` + parity if the
    /// interval reaches below Q1, otherwise `10` + parity.
    pub fn flush(&mut self, io: &mut W) -> Result<()> {
        debug_assert_eq!(self.interval.classify(), Renorm::Done);
        io.inc_parity();
        io.write_bit(u8::from(self.interval.low() >= Q1))
    }
}

impl<R: ACRead> ArithmeticCoder<R> {
    /// Fills the state register from the first 32 bits
    pub fn new_decoder(io: &mut R) -> Option<Self> {
        let x = io.read_u32()?;
        Some(Self { interval: Interval::full(), x, _marker: PhantomData })
    }

    /// Decodes the next byte, or `None` if the bit source ran out while
    /// renormalizing.
    pub fn decode(&mut self, model: &StaticOrder0, io: &mut R) -> Option<u8> {
        let scaled = self.interval.scale(self.x, model.total());
        let sym = *model.find(scaled);
        self.interval.narrow(&sym, model.total());

        // Renormalize range -> shift resolved bits out of the state
        let Self { interval, x, .. } = self;
        interval
            .renormalize(|step| {
                let bit = io.read_bit().ok_or(())?;
                *x = ((*x - step.offset()) << 1) | u32::from(bit);
                Ok::<(), ()>(())
            })
            .ok()
            .map(|()| sym.byte)
    }
}

impl<T> std::fmt::Debug for ArithmeticCoder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArithmeticCoder")
            .field("low", &self.interval.low())
            .field("high", &self.interval.high())
            .field("x", &self.x)
            .finish()
    }
}
