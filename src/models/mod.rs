pub mod frequency;
pub mod static_order0;

pub use self::{frequency::*, static_order0::*};

use crate::error::Result;

/// Largest total frequency the 32-bit coder supports.
///
/// A normalized interval is always wider than a quarter of the full range,
/// so every symbol keeps a non-empty sub-interval while `total <= 2^30`.
pub const MAX_TOTAL: u32 = 1 << 30;

/// Counts `buf` and freezes the counts into a model
pub fn build_model(buf: &[u8]) -> Result<(FrequencyTable, StaticOrder0)> {
    let table = FrequencyTable::from_bytes(buf)?;
    let model = StaticOrder0::new(&table)?;
    Ok((table, model))
}
