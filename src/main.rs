// (c) 2026 static-ac contributors, licensed under GPL-3.0

use std::path::{Path, PathBuf};
use std::time::Instant;
use std::{env, fs};

use clap::{Parser, ValueEnum};
use rayon::prelude::*;

use static_ac::helpers::{set_verbosity, vlog};
use static_ac::{compress_file, decompress_file, Error, Result};

#[derive(Clone, Copy, ValueEnum)]
enum Action {
    /// compress
    C,
    /// decompress
    D,
    /// test = c + d, then compare
    T,
}

#[derive(Parser)]
#[command(name = "static-ac", version, about = "Static order-0 arithmetic coder")]
struct Cli {
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(value_enum)]
    action: Action,

    /// A single file, or a directory (shallow traversed)
    path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_verbosity(cli.verbose);

    if cli.path.is_dir() {
        let files: Vec<PathBuf> = fs::read_dir(&cli.path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        // each file is an independent stream
        files
            .par_iter()
            .filter(|path| path.is_file())
            .try_for_each(|path| run(path, cli.action))
    } else if cli.path.is_file() {
        run(&cli.path, cli.action)
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a file or a directory", cli.path.display()),
        )
        .into())
    }
}

fn run(file_path: &Path, action: Action) -> Result<()> {
    let mut out_path = env::current_dir()?;
    out_path.push(file_path.file_name().unwrap_or(file_path.as_os_str()));

    let compress_path = out_path.with_extension("bin");
    let decompress_path = out_path.with_extension("orig");

    match action {
        Action::C => compress(file_path, &compress_path),
        Action::D => decompress(file_path, &decompress_path),
        Action::T => {
            compress(file_path, &compress_path)?;
            decompress(&compress_path, &decompress_path)?;
            cmp(file_path, &decompress_path)
        }
    }
}

fn compress(input: &Path, output: &Path) -> Result<()> {
    let timer = Instant::now();
    let (size, csize) = compress_file(input, output)?;
    println!(
        "[{}] csize: {} (ratio: {:.3})",
        input.display(),
        csize,
        csize as f64 / size as f64
    );
    vlog(1, || format!("compression took: {:?}", timer.elapsed()));
    Ok(())
}

fn decompress(input: &Path, output: &Path) -> Result<()> {
    let timer = Instant::now();
    let (_, dsize) = decompress_file(input, output)?;
    println!("[{}] dsize: {}", input.display(), dsize);
    vlog(1, || format!("decompression took: {:?}", timer.elapsed()));
    Ok(())
}

fn cmp(file1: &Path, file2: &Path) -> Result<()> {
    let (a, b) = (fs::read(file1)?, fs::read(file2)?);
    if let Some(pos) = a.iter().zip(&b).position(|(x, y)| x != y) {
        return Err(mismatch(format!("files differ at byte {pos}")));
    }
    if a.len() != b.len() {
        return Err(mismatch(format!(
            "file 1 is {} bytes and file 2 is {} bytes",
            a.len(),
            b.len()
        )));
    }
    println!("[{}] compare: OK", file1.display());
    Ok(())
}

fn mismatch(msg: String) -> Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, msg).into()
}
