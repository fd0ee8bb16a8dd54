/*!
On-disk container around the bit stream.

```text
0..4      symbol count, u32 LE
4         alphabet size - 1, u8
5..       alphabet size x (symbol u8, frequency u32 LE), model order
..        padding bit count, u8
..        packed bits, MSB first, last `padding` bits are zero
```

The padding count written is 0..=7, 0 meaning the last byte is full. A
count of 8 (one whole padding byte) is accepted when reading.
*/

use crate::entropy_coding::io::BitSequence;
use crate::error::{Error, Result};
use crate::models::FrequencyTable;

const ENTRY_SIZE: usize = 5;
const MAX_PADDING: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub symbol_count: u32,
    pub table: FrequencyTable,
    pub bits: BitSequence,
}

impl Container {
    pub fn new(table: FrequencyTable, bits: BitSequence) -> Result<Self> {
        let total = table.total();
        let symbol_count = u32::try_from(total)
            .map_err(|_| Error::InputTooLong(usize::try_from(total).unwrap_or(usize::MAX)))?;
        Ok(Self { symbol_count, table, bits })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let entries = self.table.entries();
        let mut out =
            Vec::with_capacity(5 + entries.len() * ENTRY_SIZE + 1 + self.bits.as_bytes().len());

        out.extend_from_slice(&self.symbol_count.to_le_bytes());
        // 1..=256 entries, enforced by the table
        out.push((entries.len() - 1) as u8);
        for &(byte, freq) in entries {
            out.push(byte);
            out.extend_from_slice(&freq.to_le_bytes());
        }

        out.push(self.bits.padding());
        out.extend_from_slice(self.bits.as_bytes());
        out
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        let mut cursor = Cursor { buf, pos: 0 };

        let symbol_count = u32::from_le_bytes(cursor.take_array()?);
        if symbol_count == 0 {
            return Err(Error::EmptyInput);
        }

        let alphabet = usize::from(cursor.take_array::<1>()?[0]) + 1;
        let entries = cursor
            .take(alphabet * ENTRY_SIZE)?
            .chunks_exact(ENTRY_SIZE)
            .map(|e| (e[0], u32::from_le_bytes([e[1], e[2], e[3], e[4]])))
            .collect();
        let table = FrequencyTable::from_entries(entries)?;

        let frequencies = table.total();
        if frequencies != u64::from(symbol_count) {
            return Err(Error::LengthMismatch { header: symbol_count, frequencies });
        }

        let padding = cursor.take_array::<1>()?[0];
        if padding > MAX_PADDING {
            return Err(Error::InvalidPadding(padding));
        }
        let stream = cursor.rest();
        let len = (stream.len() * 8)
            .checked_sub(usize::from(padding))
            .ok_or(Error::Truncated { needed: 1, available: 0 })?;
        let bits = BitSequence::from_bytes(stream.to_vec(), len)?;

        Ok(Self { symbol_count, table, bits })
    }
}

struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.buf.len() - self.pos;
        if available < n {
            return Err(Error::Truncated { needed: n, available });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut arr = [0; N];
        arr.copy_from_slice(self.take(N)?);
        Ok(arr)
    }

    fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}
