use crate::models::Symbol;

const PREC_SHIFT: u32 = u32::BITS - 1; // 31
pub const Q1: u32 = 1 << (PREC_SHIFT - 1); // 0x40000000, 1 = 0b01, quarter 1
pub const Q2: u32 = 2 << (PREC_SHIFT - 1); // 0x80000000, 2 = 0b10, range middle
pub const Q3: u32 = 3 << (PREC_SHIFT - 1); // 0xC0000000, 3 = 0b11, quarter 3

/// One step of the renormalization automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renorm {
    /// Interval is in the lower half, the next bit is 0
    EmitLow,
    /// Interval is in the upper half, the next bit is 1
    EmitHigh,
    /// Interval straddles the middle inside `[Q1, Q3)`, bit is deferred (E3)
    Straddle,
    /// Nothing is determined yet
    Done,
}

impl Renorm {
    /// Amount subtracted from the bounds (and the decoder state) before doubling
    pub const fn offset(self) -> u32 {
        match self {
            Self::EmitHigh => Q2,
            Self::Straddle => Q1,
            Self::EmitLow | Self::Done => 0,
        }
    }
}

/// The coder's fixed-precision `[low, high]` interval, both ends inclusive.
///
/// Encoder and decoder drive the exact same instance of this automaton, they
/// differ only in what they do on each [`Renorm`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    low: u32,
    high: u32,
}

impl Interval {
    pub const fn full() -> Self {
        Self { low: 0, high: u32::MAX }
    }

    pub const fn low(&self) -> u32 {
        self.low
    }

    pub const fn high(&self) -> u32 {
        self.high
    }

    /// `high - low + 1`, up to 2^32
    pub fn range(&self) -> u64 {
        u64::from(self.high - self.low) + 1
    }

    /// Maps `value` (which must lie inside the interval) to the cumulative
    /// frequency line `[0, total)`.
    pub fn scale(&self, value: u32, total: u32) -> u32 {
        debug_assert!(self.low <= value && value <= self.high);
        let offset = u64::from(value - self.low);
        let scaled = offset * u64::from(total) / self.range();
        // offset < range, so scaled < total
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }

    /// Narrows to the sub-interval of `sym`.
    ///
    /// The low edge is `ceil(range * cum / total)` and the high edge is one
    /// below the next symbol's low edge, so neighbouring symbols tile the
    /// interval without gaps or overlap.
    pub fn narrow(&mut self, sym: &Symbol, total: u32) {
        let range = self.range();
        let lo = ceil_scale(range, sym.cum_freq, total);
        let hi = ceil_scale(range, sym.cum_freq + sym.freq, total);
        debug_assert!(lo < hi && hi <= range, "symbol interval collapsed");

        // hi - 1 < range <= 2^32, both fit after adding to low
        let base = u64::from(self.low);
        self.high = u32::try_from(base + hi - 1).unwrap_or(self.high);
        self.low = u32::try_from(base + lo).unwrap_or(self.high);
    }

    pub fn classify(&self) -> Renorm {
        if self.high < Q2 {
            Renorm::EmitLow
        } else if self.low >= Q2 {
            Renorm::EmitHigh
        } else if self.low >= Q1 && self.high < Q3 {
            Renorm::Straddle
        } else {
            Renorm::Done
        }
    }

    /// Runs the renormalization loop, calling `on_step` for each step before
    /// the bounds are shifted. Stops at [`Renorm::Done`].
    pub fn renormalize<E, F>(&mut self, mut on_step: F) -> Result<(), E>
    where
        F: FnMut(Renorm) -> Result<(), E>,
    {
        loop {
            let step = self.classify();
            if step == Renorm::Done {
                return Ok(());
            }
            on_step(step)?;
            self.low = (self.low - step.offset()) << 1;
            self.high = ((self.high - step.offset()) << 1) | 1;
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::full()
    }
}

#[inline(always)]
fn ceil_scale(range: u64, freq: u32, total: u32) -> u64 {
    // range <= 2^32 and freq <= total <= 2^30, no overflow
    (range * u64::from(freq)).div_ceil(u64::from(total))
}
