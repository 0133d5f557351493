use std::io::{Read, Seek, SeekFrom};
use std::iter::FusedIterator;

use log::{debug, trace};
use nalu_common::{Codec, NalHeader, NalType, NalUnit};

use crate::errors::ScanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    /// The cursor landed exactly on the end of the payload.
    Done,
    Failed,
}

/// `LengthPrefixedStream` walks a video tag payload made of a 5-byte framing header followed by
/// NAL units, each preceded by a 4-byte big-endian length.
///
/// Iterating yields one `NalUnit` per length prefix. The first error moves the stream to
/// `ScanState::Failed` and nothing is yielded afterwards.
#[derive(Debug)]
pub struct LengthPrefixedStream<R> {
    reader: R,
    codec: Codec,
    cursor: u64,
    len: u64,
    state: ScanState,
    units: usize,
}

impl<R: Read + Seek> LengthPrefixedStream<R> {
    /// Frame type and codec id, packet type, 24-bit composition time.
    pub const FRAMING_HEADER_SIZE: u64 = 5;

    /// Positions `reader` just past the framing header. Offsets are absolute within `reader`.
    pub fn new(mut reader: R, codec: Codec) -> Result<Self, ScanError> {
        let len = reader.seek(SeekFrom::End(0))?;

        if len < Self::FRAMING_HEADER_SIZE {
            return Err(ScanError::PrematureEnd {
                position: 0,
                needed: Self::FRAMING_HEADER_SIZE as usize,
                available: len,
            });
        }

        let cursor = reader.seek(SeekFrom::Start(Self::FRAMING_HEADER_SIZE))?;

        Ok(Self {
            reader,
            codec,
            cursor,
            len,
            state: ScanState::Scanning,
            units: 0,
        })
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn position(&self) -> u64 {
        self.cursor
    }

    fn remaining(&self) -> u64 {
        self.len - self.cursor
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ScanError> {
        if self.remaining() < N as u64 {
            return Err(ScanError::PrematureEnd {
                position: self.cursor,
                needed: N,
                available: self.remaining(),
            });
        }

        let mut buf = [0u8; N];
        self.reader.read_exact(&mut buf)?;
        self.cursor += N as u64;

        Ok(buf)
    }

    fn read_header(&mut self) -> Result<NalHeader, ScanError> {
        match self.codec {
            Codec::H264 => {
                let [b] = self.read_array::<1>()?;
                Ok(NalHeader::H264(b))
            }
            Codec::Hevc => Ok(NalHeader::Hevc(u16::from_be_bytes(self.read_array::<2>()?))),
        }
    }

    fn read_nal_unit(&mut self) -> Result<NalUnit, ScanError> {
        let prefix_position = self.cursor;
        let size = u32::from_be_bytes(self.read_array::<4>()?);
        let header_size = self.codec.header_size();

        let malformed = || ScanError::MalformedLength {
            position: prefix_position,
            size,
            header_size,
        };

        if (size as usize) < header_size {
            return Err(malformed());
        }

        let start_position = self.cursor;
        let header = self.read_header()?;
        let nal_type = NalType::classify(header).map_err(|source| ScanError::InvalidHeaderBit {
            position: start_position,
            source,
        })?;

        // the rest of the unit is skipped, never read
        let skip = u64::from(size) - header_size as u64;
        if skip > self.remaining() {
            return Err(malformed());
        }

        self.cursor += skip;
        self.reader.seek(SeekFrom::Start(self.cursor))?;

        let start_position = usize::try_from(start_position).map_err(|_| malformed())?;
        trace!("{nal_type} at byte {start_position}, {size} bytes");

        Ok(NalUnit::new(start_position, size, nal_type))
    }
}

impl<R: Read + Seek> Iterator for LengthPrefixedStream<R> {
    type Item = Result<NalUnit, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != ScanState::Scanning {
            return None;
        }

        if self.cursor == self.len {
            self.state = ScanState::Done;
            debug!("found {} {} nal units in {} bytes", self.units, self.codec, self.len);
            return None;
        }

        match self.read_nal_unit() {
            Ok(nal_unit) => {
                self.units += 1;
                Some(Ok(nal_unit))
            }
            Err(err) => {
                self.state = ScanState::Failed;
                debug!("{} payload scan aborted: {err}", self.codec);
                Some(Err(err))
            }
        }
    }
}

impl<R: Read + Seek> FusedIterator for LengthPrefixedStream<R> {}
