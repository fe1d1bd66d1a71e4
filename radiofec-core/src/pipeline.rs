//! Codec pipeline: one FEC scheme applied to fixed-size payloads
//!
//! The scheme is picked once, when the pipeline is built, and never changes
//! per packet. Encoded length depends only on the scheme and the configured
//! payload size, so the packet header's length field can be computed up
//! front.

use crate::constants::RAW_PAYLOAD_SIZE;
use crate::error::CodecError;
use crate::{convolutional, hamming};
use bytes::{Bytes, BytesMut};
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::debug;

/// Available FEC schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Hamming(7,4), two codewords per byte
    Hamming,
    /// Rate 1/2, K=3 convolutional code (encode only)
    #[default]
    Convolutional,
}

impl Scheme {
    /// Encoded size of a `payload_len` byte payload
    pub const fn encoded_len(&self, payload_len: usize) -> usize {
        match self {
            Scheme::Hamming => hamming::encoded_len(payload_len),
            Scheme::Convolutional => convolutional::encoded_len(payload_len),
        }
    }

    /// Whether a decoder exists for this scheme
    pub const fn supports_decode(&self) -> bool {
        matches!(self, Scheme::Hamming)
    }

    /// Short lowercase name
    pub const fn name(&self) -> &'static str {
        match self {
            Scheme::Hamming => "hamming",
            Scheme::Convolutional => "convolutional",
        }
    }
}

/// Trait for schemes that can encode a payload
pub trait PayloadEncoder {
    /// Encoded size of a `payload_len` byte payload
    fn encoded_len(&self, payload_len: usize) -> usize;

    /// Encode `payload` into `out`, returning the number of bytes written
    fn encode_into(&self, payload: &[u8], out: &mut [u8]) -> Result<usize, CodecError>;
}

/// Trait for schemes that can recover a payload
pub trait PayloadDecoder {
    /// Decode `encoded` into `out`, returning the number of bytes written
    fn decode_into(&self, encoded: &[u8], out: &mut [u8]) -> Result<usize, CodecError>;
}

/// Hamming(7,4) codec
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingCodec;

impl PayloadEncoder for HammingCodec {
    fn encoded_len(&self, payload_len: usize) -> usize {
        hamming::encoded_len(payload_len)
    }

    fn encode_into(&self, payload: &[u8], out: &mut [u8]) -> Result<usize, CodecError> {
        hamming::encode_into(payload, out)
    }
}

impl PayloadDecoder for HammingCodec {
    fn decode_into(&self, encoded: &[u8], out: &mut [u8]) -> Result<usize, CodecError> {
        hamming::decode_into(encoded, out).map(|report| report.decoded_len)
    }
}

/// Convolutional encoder (no decoder exists)
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvolutionalCodec;

impl PayloadEncoder for ConvolutionalCodec {
    fn encoded_len(&self, payload_len: usize) -> usize {
        convolutional::encoded_len(payload_len)
    }

    fn encode_into(&self, payload: &[u8], out: &mut [u8]) -> Result<usize, CodecError> {
        let required = convolutional::encoded_len(payload.len());
        convolutional::encode_into(payload, out)?;
        Ok(required)
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// FEC scheme
    pub scheme: Scheme,

    /// Fixed raw payload size in bytes
    pub payload_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::default(),
            payload_len: RAW_PAYLOAD_SIZE,
        }
    }
}

impl CodecConfig {
    /// Create a new configuration
    pub const fn new(scheme: Scheme, payload_len: usize) -> Self {
        Self {
            scheme,
            payload_len,
        }
    }
}

/// Applies the configured scheme to fixed-size payloads
#[derive(Debug, Clone, Copy)]
pub struct CodecPipeline {
    config: CodecConfig,
}

impl CodecPipeline {
    /// Build a pipeline, rejecting a zero payload size
    pub fn new(config: CodecConfig) -> Result<Self, CodecError> {
        if config.payload_len == 0 {
            return Err(CodecError::InvalidConfig("payload_len must be > 0"));
        }

        #[cfg(feature = "logging")]
        debug!(
            "Codec pipeline: {} scheme, {} byte payloads -> {} bytes",
            config.scheme.name(),
            config.payload_len,
            config.scheme.encoded_len(config.payload_len)
        );

        Ok(Self { config })
    }

    /// Active configuration
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Active scheme
    pub const fn scheme(&self) -> Scheme {
        self.config.scheme
    }

    /// Configured raw payload size
    pub const fn payload_len(&self) -> usize {
        self.config.payload_len
    }

    /// Size of every encoded payload this pipeline produces
    pub const fn encoded_len(&self) -> usize {
        self.config.scheme.encoded_len(self.config.payload_len)
    }

    fn encoder(&self) -> &'static dyn PayloadEncoder {
        match self.config.scheme {
            Scheme::Hamming => &HammingCodec,
            Scheme::Convolutional => &ConvolutionalCodec,
        }
    }

    fn decoder(&self) -> Result<&'static dyn PayloadDecoder, CodecError> {
        match self.config.scheme {
            Scheme::Hamming => Ok(&HammingCodec),
            Scheme::Convolutional => Err(CodecError::UnsupportedOperation(
                "convolutional scheme has no decoder",
            )),
        }
    }

    fn check_len(expected: usize, actual: usize) -> Result<(), CodecError> {
        if expected != actual {
            return Err(CodecError::PayloadSizeMismatch { expected, actual });
        }
        Ok(())
    }

    /// Encode a payload into `out`, returning the number of bytes written
    pub fn encode_into(&self, payload: &[u8], out: &mut [u8]) -> Result<usize, CodecError> {
        Self::check_len(self.config.payload_len, payload.len())?;
        self.encoder().encode_into(payload, out)
    }

    /// Encode a payload into a freshly allocated buffer
    pub fn encode(&self, payload: &[u8]) -> Result<Bytes, CodecError> {
        let mut buf = BytesMut::zeroed(self.encoded_len());
        self.encode_into(payload, &mut buf)?;
        Ok(buf.freeze())
    }

    /// Decode an encoded payload into `out`, returning the number of bytes written
    pub fn decode_into(&self, encoded: &[u8], out: &mut [u8]) -> Result<usize, CodecError> {
        let decoder = self.decoder()?;
        Self::check_len(self.encoded_len(), encoded.len())?;
        decoder.decode_into(encoded, out)
    }

    /// Decode an encoded payload into a freshly allocated buffer
    pub fn decode(&self, encoded: &[u8]) -> Result<Bytes, CodecError> {
        let mut buf = BytesMut::zeroed(self.config.payload_len);
        self.decode_into(encoded, &mut buf)?;
        Ok(buf.freeze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let pipeline = CodecPipeline::new(CodecConfig::default()).unwrap();
        assert_eq!(pipeline.scheme(), Scheme::Convolutional);
        assert_eq!(pipeline.payload_len(), 16);
        assert_eq!(pipeline.encoded_len(), 33);
    }

    #[test]
    fn test_default_pipeline_payload_ending_in_one_bit() {
        let pipeline = CodecPipeline::new(CodecConfig::default()).unwrap();
        let mut payload = [0u8; 16];
        payload[15] = 0x01;
        let encoded = pipeline.encode(&payload).unwrap();
        assert_eq!(encoded.len(), 33);
        assert_eq!(&encoded[30..], &[0x00, 0x03, 0xB0]);

        let encoded = pipeline.encode(&[0xFF; 16]).unwrap();
        assert_eq!(encoded.len(), 33);
    }

    #[test]
    fn test_zero_payload_rejected() {
        let result = CodecPipeline::new(CodecConfig::new(Scheme::Hamming, 0));
        assert!(matches!(result, Err(CodecError::InvalidConfig(_))));
    }

    #[test]
    fn test_hamming_round_trip() {
        let pipeline = CodecPipeline::new(CodecConfig::new(Scheme::Hamming, 4)).unwrap();
        let encoded = pipeline.encode(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        assert_eq!(encoded.len(), 8);
        let decoded = pipeline.decode(&encoded).unwrap();
        assert_eq!(&decoded[..], &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_payload_size_enforced() {
        let pipeline = CodecPipeline::new(CodecConfig::new(Scheme::Hamming, 4)).unwrap();
        assert_eq!(
            pipeline.encode(&[1, 2, 3]),
            Err(CodecError::PayloadSizeMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            pipeline.decode(&[0; 6]),
            Err(CodecError::PayloadSizeMismatch {
                expected: 8,
                actual: 6
            })
        );
    }

    #[test]
    fn test_convolutional_decode_unsupported() {
        let pipeline = CodecPipeline::new(CodecConfig::new(Scheme::Convolutional, 2)).unwrap();
        let encoded = pipeline.encode(&[0x80, 0x00]).unwrap();
        assert_eq!(encoded.len(), 5);
        assert!(matches!(
            pipeline.decode(&encoded),
            Err(CodecError::UnsupportedOperation(_))
        ));
        assert!(!Scheme::Convolutional.supports_decode());
        assert!(Scheme::Hamming.supports_decode());
    }

    #[test]
    fn test_trait_objects() {
        let encoders: [&dyn PayloadEncoder; 2] = [&HammingCodec, &ConvolutionalCodec];
        let mut out = [0u8; 8];
        for encoder in encoders {
            let written = encoder.encode_into(&[0x10], &mut out).unwrap();
            assert_eq!(written, encoder.encoded_len(1));
        }
    }
}
