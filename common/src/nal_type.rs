use std::fmt;

use thiserror::Error;

use crate::taxonomy::{H264NalUnitType, HevcNalUnitType};

/// The two bitstream layouts a length-prefixed payload can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    H264,
    Hevc,
}

impl Codec {
    /// Number of bytes in a NAL unit header: one for H.264, two for HEVC.
    pub const fn header_size(self) -> usize {
        match self {
            Codec::H264 => 1,
            Codec::Hevc => 2,
        }
    }

    pub const fn is_hevc(self) -> bool {
        matches!(self, Codec::Hevc)
    }

    /// Largest `nal_unit_type` the codec can express.
    const fn max_type_id(self) -> u8 {
        match self {
            Codec::H264 => 0b0001_1111,
            Codec::Hevc => 0b0011_1111,
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codec::H264 => f.write_str("H.264"),
            Codec::Hevc => f.write_str("HEVC"),
        }
    }
}

/// Raw NAL unit header bits, tagged with the codec they were read for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NalHeader {
    /// `forbidden_zero_bit(1) nal_ref_idc(2) nal_unit_type(5)`
    H264(u8),

    /// `forbidden_zero_bit(1) nal_unit_type(6) nuh_layer_id(6) nuh_temporal_id_plus1(3)`, big-endian.
    Hevc(u16),
}

impl NalHeader {
    pub const fn codec(&self) -> Codec {
        match self {
            NalHeader::H264(_) => Codec::H264,
            NalHeader::Hevc(_) => Codec::Hevc,
        }
    }
}

impl fmt::Display for NalHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NalHeader::H264(b) => write!(f, "{b:#04x}"),
            NalHeader::Hevc(h) => write!(f, "{h:#06x}"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{} nal unit header {header} has forbidden_zero_bit set", .header.codec())]
pub struct InvalidHeader {
    pub header: NalHeader,
}

/// `nal_unit_type` of a single NAL unit, together with the codec whose table it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NalType {
    codec: Codec,
    value: u8,
}

impl NalType {
    const H264_FORBIDDEN_ZERO_BIT: u8 = 0b1000_0000;
    const HEVC_FORBIDDEN_ZERO_BIT: u16 = 0b1000_0000_0000_0000;

    /// `nal_unit_type` of filler data NAL units.
    const H264_FILLER_DATA: u8 = 12;
    const HEVC_FD_NUT: u8 = 38;

    /// Returns `None` if `value` does not fit the codec's `nal_unit_type` field.
    pub fn new(codec: Codec, value: u8) -> Option<Self> {
        (value <= codec.max_type_id()).then_some(Self { codec, value })
    }

    /// Checks `forbidden_zero_bit` and extracts `nal_unit_type` from a raw header.
    pub fn classify(header: NalHeader) -> Result<Self, InvalidHeader> {
        let nal_type = match header {
            NalHeader::H264(b) => Self::classify_h264(b),
            NalHeader::Hevc(h) => Self::classify_hevc(h),
        };

        nal_type.ok_or(InvalidHeader { header })
    }

    fn classify_h264(header: u8) -> Option<Self> {
        if header & Self::H264_FORBIDDEN_ZERO_BIT != 0 {
            return None;
        }

        Some(Self {
            codec: Codec::H264,
            value: header & 0b0001_1111,
        })
    }

    fn classify_hevc(header: u16) -> Option<Self> {
        if header & Self::HEVC_FORBIDDEN_ZERO_BIT != 0 {
            return None;
        }

        Some(Self {
            codec: Codec::Hevc,
            value: ((header >> 9) & 0b0011_1111) as u8,
        })
    }

    pub const fn codec(&self) -> Codec {
        self.codec
    }

    pub const fn is_hevc(&self) -> bool {
        self.codec.is_hevc()
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Filler data carries only padding and is usually dropped by consumers.
    pub fn is_filler_data(&self) -> bool {
        match self.codec {
            Codec::H264 => self.value == Self::H264_FILLER_DATA,
            Codec::Hevc => self.value == Self::HEVC_FD_NUT,
        }
    }

    pub fn kind(&self) -> NalUnitKind {
        match self.codec {
            Codec::H264 => NalUnitKind::H264(H264NalUnitType::from_type_id(self.value)),
            Codec::Hevc => NalUnitKind::Hevc(HevcNalUnitType::from_type_id(self.value)),
        }
    }
}

impl fmt::Display for NalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind() {
            NalUnitKind::H264(t) => t.name(),
            NalUnitKind::Hevc(t) => t.name(),
        };
        write!(f, "{} {} ({})", self.codec, name, self.value)
    }
}

/// Meaning of a `NalType` in its codec's taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NalUnitKind {
    H264(H264NalUnitType),
    Hevc(HevcNalUnitType),
}
