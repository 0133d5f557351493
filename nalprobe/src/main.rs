use std::fmt::Write as _;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use memmap::Mmap;
use nalu_common::{Codec, NalUnit};
use serde::Serialize;
use tracing::{debug, info};

mod logging;

/// FLV `CodecID` values found in the low nibble of a video tag's first byte.
const FLV_CODEC_AVC: u8 = 7;
const FLV_CODEC_HEVC: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CodecArg {
    /// Read the codec id from the payload's first byte
    Auto,
    H264,
    Hevc,
}

/// Lists the NAL units of one AVC/HEVC video tag payload.
#[derive(Parser, Debug)]
#[command(name = "nalprobe", version)]
struct Args {
    /// File holding a single video tag payload
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = CodecArg::Auto)]
    codec: CodecArg,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Leave filler data units out of the listing
    #[arg(long)]
    drop_filler: bool,

    /// -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProbeOutput<'a> {
    codec: String,
    payload_size: usize,
    nal_units: &'a [NalUnit],
}

fn detect_codec(data: &[u8]) -> Result<Codec> {
    let Some(&video_header) = data.first() else {
        bail!("payload is empty");
    };

    match video_header & 0x0F {
        FLV_CODEC_AVC => Ok(Codec::H264),
        FLV_CODEC_HEVC => Ok(Codec::Hevc),
        other => bail!("codec id {other} is neither AVC nor HEVC, pass --codec to override"),
    }
}

fn resolve_codec(arg: CodecArg, data: &[u8]) -> Result<Codec> {
    match arg {
        CodecArg::Auto => detect_codec(data),
        CodecArg::H264 => Ok(Codec::H264),
        CodecArg::Hevc => Ok(Codec::Hevc),
    }
}

fn map_payload(path: &Path) -> Result<Mmap> {
    let file = File::open(path).with_context(|| format!("unable to open {}", path.display()))?;

    // zero-length files cannot be mapped
    if file.metadata()?.len() == 0 {
        bail!("{} is empty", path.display());
    }

    let mmap = unsafe { Mmap::map(&file)? };
    Ok(mmap)
}

fn render_table(nal_units: &[NalUnit]) -> String {
    let mut out = format!("{:>10} {:>10}  type\n", "offset", "size");
    for nal_unit in nal_units {
        let _ = writeln!(
            out,
            "{:>10} {:>10}  {}",
            nal_unit.start_position(),
            nal_unit.full_size(),
            nal_unit.nal_type()
        );
    }
    out
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let data = map_payload(&args.input)?;
    let codec = resolve_codec(args.codec, &data)?;
    info!(path = %args.input.display(), bytes = data.len(), %codec, "scanning payload");

    let mut nal_units = nalu_scan::scan(&data, codec)
        .with_context(|| format!("{} could not be parsed", args.input.display()))?;
    debug!(count = nal_units.len(), "scan complete");

    if args.drop_filler {
        let before = nal_units.len();
        nal_units.retain(|n| !n.nal_type().is_filler_data());
        info!(dropped = before - nal_units.len(), "dropped filler data");
    }

    if args.json {
        let output = ProbeOutput {
            codec: codec.to_string(),
            payload_size: data.len(),
            nal_units: &nal_units,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_table(&nal_units));
    }

    Ok(())
}
