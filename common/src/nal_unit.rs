use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nal_type::{Codec, NalType};

/// `NalUnit` locates one length-prefixed NAL unit inside a payload buffer owned by the caller.
///
/// No payload bytes are copied: the unit is described by the offset of its header and the
/// length taken from its 4-byte length prefix. Use [`NalUnit::bytes`] to borrow the unit back
/// out of the buffer it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "NalUnitRecord", try_from = "NalUnitRecord")]
pub struct NalUnit {
    /// Offset of the first header byte, immediately after the length prefix.
    start_position: usize,

    /// The length prefix verbatim: header plus payload.
    full_size: u32,

    nal_type: NalType,

    /// Content digest filled in by whoever deduplicates units. Never computed while scanning.
    hash: Option<String>,
}

impl NalUnit {
    /// Width of the big-endian length field preceding every NAL unit.
    pub const LENGTH_PREFIX_SIZE: usize = 4;

    pub fn new(start_position: usize, full_size: u32, nal_type: NalType) -> Self {
        Self {
            start_position,
            full_size,
            nal_type,
            hash: None,
        }
    }

    pub fn start_position(&self) -> usize {
        self.start_position
    }

    pub fn full_size(&self) -> u32 {
        self.full_size
    }

    /// Offset one past the last byte of the unit, where the next length prefix begins.
    pub fn end_position(&self) -> usize {
        self.start_position + self.full_size as usize
    }

    pub fn nal_type(&self) -> NalType {
        self.nal_type
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    pub fn set_hash(&mut self, hash: impl Into<String>) {
        self.hash = Some(hash.into());
    }

    /// Header and payload of this unit in `data`, the buffer it was scanned from.
    ///
    /// Returns `None` if `data` is too short to hold the unit.
    pub fn bytes<'a>(&self, data: &'a [u8]) -> Option<&'a [u8]> {
        data.get(self.start_position..self.end_position())
    }
}

/// Flat record a `NalUnit` is serialized as.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NalUnitRecord {
    start_position: usize,
    full_size: u32,
    is_hevc: bool,
    type_value: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hash: Option<String>,
}

#[derive(Error, Debug)]
#[error("typeValue {type_value} is out of range for {codec}")]
pub struct RecordError {
    codec: Codec,
    type_value: u8,
}

impl From<NalUnit> for NalUnitRecord {
    fn from(nal_unit: NalUnit) -> Self {
        Self {
            start_position: nal_unit.start_position,
            full_size: nal_unit.full_size,
            is_hevc: nal_unit.nal_type.is_hevc(),
            type_value: nal_unit.nal_type.value(),
            hash: nal_unit.hash,
        }
    }
}

impl TryFrom<NalUnitRecord> for NalUnit {
    type Error = RecordError;

    fn try_from(record: NalUnitRecord) -> Result<Self, Self::Error> {
        let codec = match record.is_hevc {
            true => Codec::Hevc,
            false => Codec::H264,
        };

        let nal_type = NalType::new(codec, record.type_value).ok_or(RecordError {
            codec,
            type_value: record.type_value,
        })?;

        Ok(Self {
            start_position: record.start_position,
            full_size: record.full_size,
            nal_type,
            hash: record.hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::nal_type::NalHeader;

    fn sps() -> NalType {
        NalType::classify(NalHeader::H264(0x67)).unwrap()
    }

    #[test]
    fn test_bytes_borrows_from_buffer() {
        let data = [0x17, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x67, 0x42];
        let nal_unit = NalUnit::new(9, 2, sps());

        assert_eq!(nal_unit.end_position(), 11);
        assert_eq!(nal_unit.bytes(&data), Some(&data[9..11]));
        assert_eq!(nal_unit.bytes(&data[..10]), None);
    }

    #[test]
    fn test_hash_is_absent_until_set() {
        let mut nal_unit = NalUnit::new(9, 2, sps());
        assert_eq!(nal_unit.hash(), None);

        nal_unit.set_hash("d41d8cd9");
        assert_eq!(nal_unit.hash(), Some("d41d8cd9"));
    }

    #[test]
    fn test_serialize_flat_record() -> Result<(), serde_json::Error> {
        let mut nal_unit = NalUnit::new(9, 2, sps());
        assert_eq!(
            serde_json::to_value(&nal_unit)?,
            json!({"startPosition": 9, "fullSize": 2, "isHevc": false, "typeValue": 7})
        );

        nal_unit.set_hash("abc");
        assert_eq!(
            serde_json::to_value(&nal_unit)?,
            json!({"startPosition": 9, "fullSize": 2, "isHevc": false, "typeValue": 7, "hash": "abc"})
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_record() -> Result<(), serde_json::Error> {
        let nal_unit: NalUnit = serde_json::from_value(json!({
            "startPosition": 9,
            "fullSize": 120,
            "isHevc": true,
            "typeValue": 38
        }))?;

        assert_eq!(nal_unit.start_position(), 9);
        assert_eq!(nal_unit.full_size(), 120);
        assert!(nal_unit.nal_type().is_filler_data());
        assert_eq!(nal_unit.hash(), None);
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_type() {
        let res = serde_json::from_value::<NalUnit>(json!({
            "startPosition": 9,
            "fullSize": 2,
            "isHevc": false,
            "typeValue": 38
        }));

        assert!(res.is_err());
    }
}
