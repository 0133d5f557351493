mod nal_type;
mod nal_unit;
mod taxonomy;

pub use nal_type::{Codec, InvalidHeader, NalHeader, NalType, NalUnitKind};
pub use nal_unit::{NalUnit, RecordError};
pub use taxonomy::{H264NalUnitType, HevcNalUnitType};
