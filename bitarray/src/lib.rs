//! # bitarray
//!
//! A `no_std` compatible bit-packed array. Logical elements of a configurable
//! bit width are packed back to back into storage units of an independent
//! width, so a single element may share a unit with its neighbours or span
//! several units.
//!
//! ```rust
//! use bitarray::BitArray;
//!
//! // 8-bit elements over 64-bit units, 32-bit length field (the default)
//! let mut array = BitArray::<u64, u8>::new(10)?;
//! array.set(0, 0xFF)?;
//! array.set(1, 0x01)?;
//!
//! assert_eq!(array.get(0)?, 0xFF);
//! assert_eq!(array.count_set_bits(), 9);
//! assert!(array.get(10).is_err());
//! # Ok::<(), bitarray::BitArrayError>(())
//! ```
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use bitarray::BitArray;
//!
//! // Vec<u16>: 1000 elements × 2 bytes = 2000 bytes
//! // 10-bit elements in u32 units: 1000 × 10 bits = 313 units = 1252 bytes
//! let mut packed = BitArray::<u32, u16>::with_element_bits(1000, 10)?;
//! for i in 0..1000 {
//!     packed.set(i, (i % 1024) as u16)?;
//! }
//! assert_eq!(packed.as_bytes().len(), 1252);
//! # Ok::<(), bitarray::BitArrayError>(())
//! ```
//!
//! Shared access goes through `&BitArray`, mutation through `&mut BitArray`,
//! so a writer always excludes every other reader and writer of the array.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::{BitArrayError, ErrorKind};

pub type Result<T> = core::result::Result<T, BitArrayError>;

pub mod width;
pub use width::{Element, SizeType, Unit, Width};

pub mod span;

mod bit_ops;

pub mod array;
pub use array::BitArray;

pub mod config;
pub use config::ArrayConfig;

#[cfg(feature = "dynamic")]
pub mod dynamic;

#[cfg(feature = "dynamic")]
pub use dynamic::DynBitArray;
