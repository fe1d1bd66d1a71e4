//! Constants shared by the codecs and the packet layer

/// Convolutional code constraint length K
pub const CONSTRAINT_LENGTH: usize = 3;

/// Zero bits fed after the payload to clear the encoder memory
pub const TAIL_BITS: usize = CONSTRAINT_LENGTH - 1;

/// First generator polynomial (octal 7)
pub const GENERATOR_1: u8 = 0b111;

/// Second generator polynomial (octal 5)
pub const GENERATOR_2: u8 = 0b101;

/// Mask of the shift register width
pub const REGISTER_MASK: u8 = (1 << CONSTRAINT_LENGTH) - 1;

/// Output bits produced per input bit (rate 1/2)
pub const OUTPUTS_PER_BIT: usize = 2;

/// Mask of the significant codeword bits (bit 7 is reserved)
pub const CODEWORD_MASK: u8 = 0x7F;

/// Mask of a data nibble
pub const NIBBLE_MASK: u8 = 0x0F;

/// Codewords emitted per payload byte
pub const CODEWORDS_PER_BYTE: usize = 2;

/// Raw payload size used by the test harness: 2-byte index + 7 samples of 2 bytes
pub const RAW_PAYLOAD_SIZE: usize = 14 + 2;

/// Convolutional encoding of a [`RAW_PAYLOAD_SIZE`] payload:
/// (128 + 2) * 2 = 260 bits, i.e. 33 bytes.
pub const MAX_ENC_PAYLOAD_SIZE: usize = 33;

/// Length of the sync sequence that opens every packet
pub const SYNC_LEN: usize = 8;

/// Header size: 8 bytes sync + 1 byte length + 1 byte sequence number
pub const HEADER_LEN: usize = SYNC_LEN + 2;

/// Largest encoded payload the one-byte length field can describe
/// (the field also counts the sequence byte)
pub const MAX_PACKET_PAYLOAD: usize = u8::MAX as usize - 1;

/// Sync sequence for the CC2500 receiver
pub const SYNC_CC2500: [u8; SYNC_LEN] = [0xAA, 0xAA, 0xAA, 0xAA, 0xD3, 0x91, 0xD3, 0x91];

/// Sync sequence for the CC1352P7 receiver
pub const SYNC_CC1352: [u8; SYNC_LEN] = [0xAA, 0xAA, 0xAA, 0xAA, 0x93, 0x0B, 0x51, 0xDE];

/// Default seed of the payload sample generator
pub const DEFAULT_SEED: u32 = 0xABCD;

/// LCG multiplier (Numerical Recipes)
pub const LCG_MULTIPLIER: u32 = 1_664_525;

/// LCG increment (Numerical Recipes)
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// Mean of generated samples
pub const SAMPLE_MEAN: f64 = 0x1FFF as f64;

/// Scale applied to the Box-Muller radius
pub const SAMPLE_SCALE: f64 = 0x7FF as f64;
