//! Pseudo-random payload samples for link tests
//!
//! Samples are 16-bit values drawn from a clamped normal distribution around
//! `0x1FFF`, which gives compressible, realistic-looking sensor data. The
//! generator owns its seed and file position, so two generators built from
//! the same seed emit the same stream.

use crate::constants::{
    DEFAULT_SEED, LCG_INCREMENT, LCG_MULTIPLIER, SAMPLE_MEAN, SAMPLE_SCALE,
};
use std::f64::consts::PI;

#[cfg(feature = "logging")]
use tracing::warn;

/// Caller-owned sample generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGenerator {
    initial_seed: u32,
    seed: u32,
    file_position: u16,
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl SampleGenerator {
    /// Create a generator that restarts from `seed` whenever the file position wraps
    pub const fn new(seed: u32) -> Self {
        Self {
            initial_seed: seed,
            seed,
            file_position: 0,
        }
    }

    /// Index of the next data byte in the virtual file
    pub const fn file_position(&self) -> u16 {
        self.file_position
    }

    /// Next raw LCG value
    pub fn next_u32(&mut self) -> u32 {
        self.seed = self
            .seed
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.seed
    }

    fn next_uniform(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Draw the next 16-bit sample and advance the file position by 2
    pub fn next_sample(&mut self) -> u16 {
        if self.file_position == 0 {
            self.seed = self.initial_seed;
        }
        self.file_position = self.file_position.wrapping_add(2);

        let u1 = self.next_uniform();
        let u2 = self.next_uniform();
        let radius = SAMPLE_SCALE * (-2.0 * u1.ln()).sqrt();
        let value = radius * (2.0 * PI * u2).cos() + SAMPLE_MEAN;

        // NaN and negative values land on 0, large values saturate
        value.clamp(0.0, f64::from(u16::MAX)) as u16
    }

    /// Fill `buffer` with big-endian samples
    ///
    /// With `include_index` the first two bytes carry the file position
    /// (big-endian) before any sample of this buffer is drawn. A buffer
    /// shorter than the index gets no index, only the high byte of one sample.
    pub fn fill(&mut self, buffer: &mut [u8], include_index: bool) {
        if buffer.len() % 2 != 0 {
            #[cfg(feature = "logging")]
            warn!("Filling sample buffer of odd length {}", buffer.len());
        }
        if include_index && buffer.len() < 2 {
            #[cfg(feature = "logging")]
            warn!(
                "Sample buffer of length {} cannot hold the file index",
                buffer.len()
            );
        }

        let mut data_start = 0;
        if include_index && buffer.len() >= 2 {
            buffer[..2].copy_from_slice(&self.file_position.to_be_bytes());
            data_start = 2;
        }

        for chunk in buffer[data_start..].chunks_mut(2) {
            let sample = self.next_sample().to_be_bytes();
            chunk.copy_from_slice(&sample[..chunk.len()]);
        }
    }
}
