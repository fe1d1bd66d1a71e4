//! Packet assembly around an encoded payload
//!
//! Packet layout:
//! 1. Sync sequence (8 bytes), radio specific
//! 2. Length (1 byte): encoded payload length + 1 for the sequence byte
//! 3. Sequence number (1 byte)
//! 4. Encoded payload
//!
//! The codec output is placed in the packet unmodified.

use crate::constants::{
    DEFAULT_SEED, HEADER_LEN, MAX_PACKET_PAYLOAD, RAW_PAYLOAD_SIZE, SYNC_CC1352, SYNC_CC2500,
    SYNC_LEN,
};
use crate::error::CodecError;
use crate::pipeline::{CodecConfig, Scheme};
use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

/// Target receiver, which selects the sync sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radio {
    /// TI CC2500
    #[default]
    Cc2500,
    /// TI CC1352P7
    Cc1352,
}

impl Radio {
    /// Map a receiver model number to a radio; anything but 2500 is a CC1352
    pub const fn from_model(model: u16) -> Self {
        if model == 2500 {
            Radio::Cc2500
        } else {
            Radio::Cc1352
        }
    }

    /// Sync sequence that opens this radio's packets
    pub const fn sync_word(&self) -> &'static [u8; SYNC_LEN] {
        match self {
            Radio::Cc2500 => &SYNC_CC2500,
            Radio::Cc1352 => &SYNC_CC1352,
        }
    }

    /// Identify the radio from a received sync sequence
    pub fn from_sync_word(sync: &[u8; SYNC_LEN]) -> Option<Self> {
        [Radio::Cc2500, Radio::Cc1352]
            .into_iter()
            .find(|radio| radio.sync_word() == sync)
    }
}

/// Value of the length field for an encoded payload of `payload_len` bytes
pub fn length_field(payload_len: usize) -> Result<u8, CodecError> {
    if payload_len > MAX_PACKET_PAYLOAD {
        return Err(CodecError::PacketTooLarge(payload_len));
    }
    Ok((payload_len + 1) as u8)
}

/// Write the packet header into the first [`HEADER_LEN`] bytes of `out`
pub fn write_header(
    out: &mut [u8],
    radio: Radio,
    sequence: u8,
    payload_len: usize,
) -> Result<(), CodecError> {
    CodecError::check_capacity(HEADER_LEN, out.len())?;
    let length = length_field(payload_len)?;

    out[..SYNC_LEN].copy_from_slice(radio.sync_word());
    out[SYNC_LEN] = length;
    out[SYNC_LEN + 1] = sequence;
    Ok(())
}

/// Settings for a packet generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacketConfig {
    /// Target receiver
    pub radio: Radio,

    /// FEC scheme
    pub scheme: Scheme,

    /// Raw payload size in bytes, index included
    pub payload_len: usize,

    /// Prefix each payload with the 2-byte file position
    pub include_index: bool,

    /// Sample generator seed
    pub seed: u32,

    /// Number of packets to produce
    pub count: usize,
}

impl Default for PacketConfig {
    fn default() -> Self {
        Self {
            radio: Radio::default(),
            scheme: Scheme::default(),
            payload_len: RAW_PAYLOAD_SIZE,
            include_index: true,
            seed: DEFAULT_SEED,
            count: 1,
        }
    }
}

impl PacketConfig {
    /// Codec settings of this run
    pub const fn codec(&self) -> CodecConfig {
        CodecConfig::new(self.scheme, self.payload_len)
    }
}

/// A parsed packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Radio identified from the sync sequence
    pub radio: Radio,

    /// Sequence number
    pub sequence: u8,

    /// Encoded payload
    pub payload: Bytes,
}

impl Packet {
    /// Total size of the packet on air
    pub fn total_size(&self) -> usize {
        HEADER_LEN + self.payload.len()
    }
}

/// Builder for assembling packets
pub struct PacketBuilder {
    radio: Radio,
    sequence: u8,
    payload: Bytes,
}

impl PacketBuilder {
    /// Create a new packet builder
    pub fn new(radio: Radio) -> Self {
        Self {
            radio,
            sequence: 0,
            payload: Bytes::new(),
        }
    }

    /// Set the sequence number
    pub fn sequence(mut self, sequence: u8) -> Self {
        self.sequence = sequence;
        self
    }

    /// Set the encoded payload
    pub fn payload(mut self, payload: Bytes) -> Self {
        self.payload = payload;
        self
    }

    /// Build and serialize the packet
    pub fn build(self) -> Result<Bytes, CodecError> {
        let length = length_field(self.payload.len())?;

        let mut buf = BytesMut::with_capacity(HEADER_LEN + self.payload.len());
        buf.put_slice(self.radio.sync_word());
        buf.put_u8(length);
        buf.put_u8(self.sequence);
        buf.put_slice(&self.payload);

        Ok(buf.freeze())
    }

    /// Build the packet struct without serializing
    pub fn build_struct(self) -> Result<Packet, CodecError> {
        length_field(self.payload.len())?;
        Ok(Packet {
            radio: self.radio,
            sequence: self.sequence,
            payload: self.payload,
        })
    }
}

/// Parse a packet from the start of `data`
///
/// Bytes beyond the length announced in the header are ignored.
pub fn parse_packet(data: &[u8]) -> Result<Packet, CodecError> {
    if data.len() < HEADER_LEN {
        return Err(CodecError::IncompletePacket {
            expected: HEADER_LEN,
            actual: data.len(),
        });
    }

    let mut sync = [0u8; SYNC_LEN];
    sync.copy_from_slice(&data[..SYNC_LEN]);
    let radio = Radio::from_sync_word(&sync).ok_or(CodecError::BadSync(sync))?;

    // The length field counts the sequence byte
    let length = data[SYNC_LEN] as usize;
    let payload_len = length.saturating_sub(1);
    let total = HEADER_LEN + payload_len;
    if data.len() < total {
        return Err(CodecError::IncompletePacket {
            expected: total,
            actual: data.len(),
        });
    }

    Ok(Packet {
        radio,
        sequence: data[SYNC_LEN + 1],
        payload: Bytes::copy_from_slice(&data[HEADER_LEN..total]),
    })
}
