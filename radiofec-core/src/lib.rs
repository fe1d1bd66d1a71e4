//! # RadioFEC Core
//!
//! Forward error correction for short payloads sent over a noisy low-power
//! radio link.
//!
//! ## Modules
//!
//! - `constants`: Code parameters, packet layout and generator constants
//! - `hamming`: Hamming(7,4) single-error-correcting block code
//! - `convolutional`: Rate 1/2, K=3 convolutional encoder
//! - `pipeline`: Fixed-size payload pipeline over a chosen scheme
//! - `packet`: Header assembly and parsing around an encoded payload
//! - `sample`: Reproducible payload sample generator (`std` only)
//! - `stats`: Bit error accounting

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod constants;
pub mod convolutional;
pub mod error;
pub mod hamming;
pub mod packet;
pub mod pipeline;
#[cfg(feature = "std")]
pub mod sample;
pub mod stats;

// Re-export commonly used types
pub use error::CodecError;
pub use packet::{Packet, PacketBuilder, PacketConfig, Radio};
pub use pipeline::{CodecConfig, CodecPipeline, Scheme};

/// Result type alias for RadioFEC operations
pub type Result<T> = core::result::Result<T, CodecError>;
