// (c) 2026 static-ac contributors, licensed under GPL-3.0

use std::fs;
use std::path::Path;

use crate::container::Container;
use crate::entropy_coding::{decode, encode};
use crate::error::Result;
use crate::helpers::vlog;
use crate::models::{build_model, StaticOrder0};

/// Builds the model, encodes and wraps everything in a [`Container`].
pub fn compress(buf: &[u8]) -> Result<Vec<u8>> {
    let (table, model) = build_model(buf)?;
    let bits = encode(buf, &model)?;

    vlog(2, || {
        format!(
            "model: {} symbols, entropy {:.0} bits, coded {} bits",
            table.len(),
            model.entropy_bits(),
            bits.len()
        )
    });

    Ok(Container::new(table, bits)?.to_bytes())
}

/// Parses a [`Container`], rebuilds the model from the stored counts and decodes.
pub fn decompress(buf: &[u8]) -> Result<Vec<u8>> {
    let container = Container::from_bytes(buf)?;
    let model = StaticOrder0::new(&container.table)?;

    vlog(2, || {
        format!(
            "container: {} symbols over a {} byte alphabet, {} bits",
            container.symbol_count,
            container.table.len(),
            container.bits.len()
        )
    });

    // u32 always fits the platforms we build for
    let count = usize::try_from(container.symbol_count).unwrap_or(usize::MAX);
    decode(&container.bits, &model, count)
}

/// Returns `(input size, output size)`
pub fn compress_file(input: &Path, output: &Path) -> Result<(u64, u64)> {
    let buf = fs::read(input)?;
    let compressed = compress(&buf)?;
    fs::write(output, &compressed)?;
    Ok((buf.len() as u64, compressed.len() as u64))
}

/// Returns `(input size, output size)`
pub fn decompress_file(input: &Path, output: &Path) -> Result<(u64, u64)> {
    let buf = fs::read(input)?;
    let decompressed = decompress(&buf)?;
    fs::write(output, &decompressed)?;
    Ok((buf.len() as u64, decompressed.len() as u64))
}
