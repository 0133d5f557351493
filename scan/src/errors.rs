use std::io;

use nalu_common::InvalidHeader;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("payload ended at byte {position}: {needed} bytes required, {available} available")]
    PrematureEnd {
        position: u64,
        needed: usize,
        available: u64,
    },

    #[error(
        "nal unit length prefix at byte {position} declares {size} bytes, which does not fit a {header_size}-byte header and the rest of the payload"
    )]
    MalformedLength {
        position: u64,
        size: u32,
        header_size: usize,
    },

    #[error("invalid nal unit header at byte {position}")]
    InvalidHeaderBit {
        position: u64,
        #[source]
        source: InvalidHeader,
    },

    #[error("An error occurred reading from the payload")]
    Io(#[from] io::Error),
}
