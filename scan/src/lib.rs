use std::io::{Cursor, Read, Seek};

use nalu_common::{Codec, NalUnit};

mod errors;
mod length_prefixed;

pub use errors::ScanError;
pub use length_prefixed::{LengthPrefixedStream, ScanState};

/// Scans a video tag payload held in memory.
///
/// Either every NAL unit in `data` is returned, in order, or the scan fails as a whole.
pub fn scan(data: &[u8], codec: Codec) -> Result<Vec<NalUnit>, ScanError> {
    scan_reader(Cursor::new(data), codec)
}

/// Scans a video tag payload from a seekable source. Offsets in the returned units are
/// absolute positions within `reader`.
pub fn scan_reader<R: Read + Seek>(reader: R, codec: Codec) -> Result<Vec<NalUnit>, ScanError> {
    LengthPrefixedStream::new(reader, codec)?.collect()
}
