//! Error types for RadioFEC codec operations

/// Errors that can occur while encoding, decoding or framing payloads
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Hamming decode input must hold an even number of codewords
    #[cfg_attr(feature = "std", error("Invalid encoded length {0}: expected an even number of codewords"))]
    InvalidLength(usize),

    /// Caller-supplied output buffer cannot hold the result
    #[cfg_attr(feature = "std", error("Output buffer too small: need {required} bytes, got {actual}"))]
    BufferTooSmall {
        /// The number of bytes the operation writes.
        required: usize,
        /// The capacity of the supplied buffer.
        actual: usize,
    },

    /// Payload does not match the configured fixed size
    #[cfg_attr(feature = "std", error("Payload size mismatch: expected {expected} bytes, got {actual}"))]
    PayloadSizeMismatch {
        /// The configured payload size.
        expected: usize,
        /// The size of the supplied payload.
        actual: usize,
    },

    /// The selected scheme cannot perform the requested operation
    #[cfg_attr(feature = "std", error("Unsupported operation: {0}"))]
    UnsupportedOperation(&'static str),

    /// Codec configuration is not usable
    #[cfg_attr(feature = "std", error("Invalid configuration: {0}"))]
    InvalidConfig(&'static str),

    /// Encoded payload does not fit the one-byte length field
    #[cfg_attr(feature = "std", error("Payload of {0} bytes does not fit in a packet"))]
    PacketTooLarge(usize),

    /// Sync sequence does not belong to any known radio
    #[cfg_attr(feature = "std", error("Unknown sync sequence: {0:02x?}"))]
    BadSync([u8; 8]),

    /// Incomplete packet - not enough data
    #[cfg_attr(feature = "std", error("Incomplete packet: expected {expected} bytes, got {actual}"))]
    IncompletePacket {
        /// The number of bytes expected.
        expected: usize,
        /// The number of bytes actually found.
        actual: usize,
    },
}

impl CodecError {
    pub(crate) fn check_capacity(required: usize, actual: usize) -> Result<(), CodecError> {
        if actual < required {
            return Err(CodecError::BufferTooSmall { required, actual });
        }
        Ok(())
    }
}
