//! Library entry for radiofec-cli used by integration tests and embedding.

pub mod commands;

use radiofec_core::{Radio, Scheme};

// Re-export commands for convenience
pub use commands::*;

/// FEC scheme as selected on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemeArg {
    /// Hamming(7,4), encode and decode
    Hamming,
    /// Rate 1/2 K=3 convolutional, encode only
    Convolutional,
}

impl From<SchemeArg> for Scheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Hamming => Scheme::Hamming,
            SchemeArg::Convolutional => Scheme::Convolutional,
        }
    }
}

/// Target receiver as selected on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum RadioArg {
    /// TI CC2500
    Cc2500,
    /// TI CC1352P7
    Cc1352,
}

impl From<RadioArg> for Radio {
    fn from(arg: RadioArg) -> Self {
        match arg {
            RadioArg::Cc2500 => Radio::Cc2500,
            RadioArg::Cc1352 => Radio::Cc1352,
        }
    }
}

/// How binary buffers are written out
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Space separated hex bytes, one buffer per line
    #[default]
    Hex,
    /// Raw bytes, buffers concatenated
    Binary,
}
