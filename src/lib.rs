//! Static order-0 binary arithmetic coder.
//!
//! The model is the input's own byte histogram, stored as integer counts in
//! the container header. Encoder and decoder narrow a 32-bit interval with
//! the same integer arithmetic and share one renormalization loop, so they
//! cannot drift apart.
//!
//! ```
//! let input = b"abracadabra";
//! let packed = static_ac::compress(input).unwrap();
//! assert_eq!(static_ac::decompress(&packed).unwrap(), input);
//! ```

pub mod container;
pub mod entropy_coding;
pub mod error;
pub mod helpers;
pub mod models;
pub mod runner;

pub use container::Container;
pub use entropy_coding::io::BitSequence;
pub use entropy_coding::{decode, encode};
pub use error::{Error, Result};
pub use models::{build_model, FrequencyTable, StaticOrder0};
pub use runner::{compress, compress_file, decompress, decompress_file};
