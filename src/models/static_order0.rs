use super::{FrequencyTable, MAX_TOTAL};
use crate::error::{Error, Result};

/// A symbol's slice of the cumulative frequency line: `[cum_freq, cum_freq + freq)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub byte: u8,
    pub freq: u32,
    pub cum_freq: u32,
}

/// Static order-0 model, frozen from a [`FrequencyTable`].
///
/// Probabilities are the exact rationals `freq / total` and `cum_freq / total`.
/// The coder only ever sees the integers, so both sides narrow identically.
#[derive(Debug, Clone)]
pub struct StaticOrder0 {
    symbols: Vec<Symbol>,
    index: [Option<u8>; 256],
    total: u32,
}

impl StaticOrder0 {
    pub fn new(table: &FrequencyTable) -> Result<Self> {
        let total = table.total();
        if table.is_empty() || total == 0 {
            return Err(Error::ModelMismatch("empty frequency table"));
        }
        if total > u64::from(MAX_TOTAL) {
            return Err(Error::ModelMismatch("frequency total exceeds coder precision"));
        }

        let mut symbols = Vec::with_capacity(table.len());
        let mut index = [None; 256];
        let mut cum_freq = 0;
        for (i, &(byte, freq)) in table.entries().iter().enumerate() {
            if freq == 0 {
                return Err(Error::ModelMismatch("zero frequency"));
            }
            if index[usize::from(byte)].is_some() {
                return Err(Error::ModelMismatch("duplicate symbol"));
            }
            // at most 256 entries, checked by the table
            index[usize::from(byte)] = u8::try_from(i).ok();
            symbols.push(Symbol { byte, freq, cum_freq });
            cum_freq += freq;
        }

        let model = Self { symbols, index, total: cum_freq };
        model.check()?;
        Ok(model)
    }

    /// Cumulative frequencies must be strictly increasing and end at `total`
    fn check(&self) -> Result<()> {
        let monotonic = self
            .symbols
            .windows(2)
            .all(|w| w[0].cum_freq + w[0].freq == w[1].cum_freq);
        let last = self.symbols.last().map(|s| s.cum_freq + s.freq);
        if !monotonic || last != Some(self.total) {
            return Err(Error::ModelMismatch("cumulative table is not monotonic"));
        }
        Ok(())
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Encoder side lookup
    pub fn symbol(&self, byte: u8) -> Option<&Symbol> {
        self.index[usize::from(byte)].map(|i| &self.symbols[usize::from(i)])
    }

    /// Decoder side lookup: the last symbol with `cum_freq <= scaled`.
    pub fn find(&self, scaled: u32) -> &Symbol {
        debug_assert!(scaled < self.total);
        // cum_freq of the first symbol is 0, so the partition point is >= 1
        let idx = self.symbols.partition_point(|s| s.cum_freq <= scaled);
        &self.symbols[idx.saturating_sub(1)]
    }

    /// `(symbol, probability, cumulative probability)` triples in model order.
    ///
    /// For reporting only, the coder never touches floats.
    pub fn probabilities(&self) -> impl Iterator<Item = (u8, f64, f64)> + '_ {
        let total = f64::from(self.total);
        self.symbols.iter().map(move |s| {
            (s.byte, f64::from(s.freq) / total, f64::from(s.cum_freq) / total)
        })
    }

    /// Order-0 entropy of the source in bits, `-sum(freq * log2(freq / total))`
    pub fn entropy_bits(&self) -> f64 {
        let total = f64::from(self.total);
        self.symbols
            .iter()
            .map(|s| {
                let freq = f64::from(s.freq);
                -freq * (freq / total).log2()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::StaticOrder0;
    use crate::models::{build_model, FrequencyTable};

    #[test]
    fn cumulative_frequencies() {
        let (_, model) = build_model(b"abracadabra").unwrap();
        let cum: Vec<_> = model.symbols().iter().map(|s| (s.byte, s.cum_freq, s.freq)).collect();
        assert_eq!(
            cum,
            [(b'a', 0, 5), (b'b', 5, 2), (b'r', 7, 2), (b'c', 9, 1), (b'd', 10, 1)]
        );
        assert_eq!(model.total(), 11);
    }

    #[test]
    fn probabilities_of_0001() {
        let (table, model) = build_model(&[0, 0, 0, 1]).unwrap();
        assert_eq!(table.entries(), &[(0, 3), (1, 1)]);
        let probs: Vec<_> = model.probabilities().collect();
        assert_eq!(probs, [(0, 0.75, 0.0), (1, 0.25, 0.75)]);
    }

    #[test]
    fn find_respects_half_open_intervals() {
        let (_, model) = build_model(b"abracadabra").unwrap();
        assert_eq!(model.find(0).byte, b'a');
        assert_eq!(model.find(4).byte, b'a');
        assert_eq!(model.find(5).byte, b'b');
        assert_eq!(model.find(6).byte, b'b');
        assert_eq!(model.find(7).byte, b'r');
        assert_eq!(model.find(9).byte, b'c');
        assert_eq!(model.find(10).byte, b'd');
    }

    #[test]
    fn rebuilt_from_table_matches() {
        let (table, model) = build_model(b"the quick brown fox").unwrap();
        let stored = FrequencyTable::from_entries(table.entries().to_vec()).unwrap();
        let rebuilt = StaticOrder0::new(&stored).unwrap();
        assert_eq!(model.symbols(), rebuilt.symbols());
        assert_eq!(model.total(), rebuilt.total());
    }

    #[test]
    fn symbol_lookup() {
        let (_, model) = build_model(b"aab").unwrap();
        assert_eq!(model.symbol(b'b').map(|s| s.cum_freq), Some(2));
        assert!(model.symbol(b'c').is_none());
    }

    #[test]
    fn entropy_of_uniform_bytes() {
        let buf: Vec<u8> = (0..=255).collect();
        let (_, model) = build_model(&buf).unwrap();
        assert!((model.entropy_bits() - 256.0 * 8.0).abs() < 1e-9);
    }
}
